//! Measurement timestamp resolution
//!
//! Argo encodes measurement time in two pieces: a file-wide reference
//! instant stored as a 14-character string ("YYYYMMDDHHMMSS"), and a
//! per-profile offset in (possibly fractional) days since that instant
//! (JULD). Both are combined here into an absolute UTC timestamp.

use crate::constants::REFERENCE_TIME_FORMAT;
use crate::{Error, Result};
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

/// Milliseconds per day, used to apply fractional day offsets
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse the decoded reference-time string
///
/// The layout is fixed: 4-digit year, then 2 digits each for month, day,
/// hour, minute, second. Surrounding padding is tolerated.
pub fn parse_reference_time(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, REFERENCE_TIME_FORMAT).map_err(|e| {
        Error::datetime_parsing(format!("Invalid reference time '{}'", trimmed), e)
    })
}

/// Combine the reference instant with a day offset
///
/// Returns `None` when the offset is missing or non-finite, or when the
/// combination overflows the representable time range; a profile without
/// a resolvable timestamp emits no rows.
pub fn resolve_timestamp(base: NaiveDateTime, day_offset: Option<f64>) -> Option<DateTime<Utc>> {
    let days = day_offset.filter(|d| d.is_finite())?;
    let millis = (days * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }

    let instant = base.checked_add_signed(Duration::milliseconds(millis as i64))?;
    Some(Utc.from_utc_datetime(&instant))
}
