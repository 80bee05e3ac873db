//! Whole-profile accept/reject decisions
//!
//! A profile is filtered before any of its levels are touched: invalid
//! coordinates, a timestamp year outside the configured window, or a
//! position outside the configured bounding box each reject the profile
//! with a named reason. The geographic and temporal filters are
//! independent and individually configurable; both windows are inclusive.

use crate::app::models::ProfileSkip;
use crate::config::FilterConfig;
use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

/// Check a resolved profile against the configured filters
///
/// `latitude`/`longitude` arrive straight from the normalizer, so absence
/// is still possible here and is treated the same as a non-finite value.
/// Returns the validated coordinates on acceptance.
pub fn check_profile(
    timestamp: &DateTime<Utc>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    filters: &FilterConfig,
) -> Result<(f64, f64), ProfileSkip> {
    let (Some(lat), Some(lon)) = (
        latitude.filter(|v| v.is_finite()),
        longitude.filter(|v| v.is_finite()),
    ) else {
        return Err(ProfileSkip::InvalidCoordinates);
    };

    if filters.temporal.enabled {
        let year = timestamp.year();
        if year < filters.temporal.year_min || year > filters.temporal.year_max {
            debug!(
                "Profile rejected: year {} outside window {}..={}",
                year, filters.temporal.year_min, filters.temporal.year_max
            );
            return Err(ProfileSkip::OutsideYearWindow);
        }
    }

    if filters.geographic.enabled {
        let geo = &filters.geographic;
        let inside = lon >= geo.lon_min
            && lon <= geo.lon_max
            && lat >= geo.lat_min
            && lat <= geo.lat_max;
        if !inside {
            debug!(
                "Profile rejected: position ({}, {}) outside lon {}..={}, lat {}..={}",
                lon, lat, geo.lon_min, geo.lon_max, geo.lat_min, geo.lat_max
            );
            return Err(ProfileSkip::OutsideRegion);
        }
    }

    Ok((lat, lon))
}
