//! Data models for Argo profile extraction
//!
//! This module contains the core data structures: the emitted measurement
//! row, the named skip reasons used for profile rejection accounting, and
//! the per-file processing outcome.

use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Utc};

// =============================================================================
// Measurement Row
// =============================================================================

/// One per-level measurement emitted by the pipeline
///
/// A row is only ever constructed for a present, finite, non-negative
/// pressure; temperature and salinity are independently absent when the
/// variable was unresolved for the file or the level's value is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Identifier of the float that recorded the profile, never empty
    pub platform_id: String,

    /// Absolute measurement instant (reference time + day offset)
    pub timestamp: DateTime<Utc>,

    /// Profile latitude in decimal degrees
    pub latitude: f64,

    /// Profile longitude in decimal degrees
    pub longitude: f64,

    /// Pressure at this level in decibar, finite and >= 0
    pub pressure_dbar: f64,

    /// In-situ temperature in degrees Celsius, if present at this level
    pub temperature_celsius: Option<f64>,

    /// Practical salinity in PSU, if present at this level
    pub salinity_psu: Option<f64>,
}

impl MeasurementRow {
    /// Create a new row, enforcing the pressure invariant
    pub fn new(
        platform_id: String,
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        pressure_dbar: f64,
        temperature_celsius: Option<f64>,
        salinity_psu: Option<f64>,
    ) -> Result<Self> {
        if !pressure_dbar.is_finite() || pressure_dbar < 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid pressure {}: must be finite and non-negative",
                pressure_dbar
            )));
        }
        if platform_id.is_empty() {
            return Err(Error::data_validation(
                "Platform id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            platform_id,
            timestamp,
            latitude,
            longitude,
            pressure_dbar,
            temperature_celsius,
            salinity_psu,
        })
    }

    /// Calendar year of the measurement, derived for sinks that want it
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Timestamp serialized as "YYYY-MM-DD HH:MM:SS"
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Render the row as the eight-column CSV record, absent values empty
    pub fn to_csv_record(&self) -> Vec<String> {
        fn optional(value: Option<f64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        vec![
            self.platform_id.clone(),
            self.timestamp_string(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.pressure_dbar.to_string(),
            optional(self.temperature_celsius),
            optional(self.salinity_psu),
            self.year().to_string(),
        ]
    }
}

// =============================================================================
// Skip Reasons
// =============================================================================

/// Reason a whole profile was rejected before row emission
///
/// These replace generic catch-and-continue handling: every rejected
/// profile carries a named reason that is aggregated into the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSkip {
    /// Time offset missing or non-finite; no valid timestamp exists
    MissingTimestamp,

    /// Latitude or longitude missing or non-finite
    InvalidCoordinates,

    /// Timestamp year outside the configured inclusive year window
    OutsideYearWindow,

    /// Coordinates outside the configured inclusive bounding box
    OutsideRegion,
}

impl ProfileSkip {
    /// Short label used in logs and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSkip::MissingTimestamp => "missing timestamp",
            ProfileSkip::InvalidCoordinates => "invalid coordinates",
            ProfileSkip::OutsideYearWindow => "outside year window",
            ProfileSkip::OutsideRegion => "outside region",
        }
    }
}

impl std::fmt::Display for ProfileSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// File Outcome
// =============================================================================

/// Result of attempting to process one source file
///
/// Missing required variables reject the file as a whole without touching
/// any profile; this is a counted per-file condition, never fatal to the
/// batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// All profiles were iterated; per-profile results are in the stats
    Extracted,

    /// Required roles with no matching variable in the file
    MissingVariables(Vec<String>),
}
