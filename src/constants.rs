//! Application constants for the Argo processor
//!
//! This module contains variable alias tables, time formats, default
//! filter windows, and output layout constants used throughout the
//! application. All of them are defaults: the alias tables and filter
//! windows are carried in [`crate::config::Config`] and can be replaced
//! by the caller.

// =============================================================================
// Variable Roles and Aliases
// =============================================================================

/// Canonical variable roles resolved against each source file.
///
/// Alias lists are ordered by preference: the adjusted (delayed-mode)
/// variant of a measurement variable is taken over the raw one when both
/// are present. Matching is case-insensitive.
pub mod aliases {
    /// Pressure, in decibar. Required.
    pub const PRESSURE: &[&str] = &["PRES_ADJUSTED", "PRES"];

    /// In-situ temperature, in degrees Celsius. Optional.
    pub const TEMPERATURE: &[&str] = &["TEMP_ADJUSTED", "TEMP"];

    /// Practical salinity, in PSU. Optional.
    pub const SALINITY: &[&str] = &["PSAL_ADJUSTED", "PSAL"];

    /// Platform (float) identifier. Required.
    pub const PLATFORM_ID: &[&str] = &["PLATFORM_NUMBER", "FLOAT_SERIAL_NO", "WMO_INST_TYPE"];

    /// Julian day offset relative to the reference time. Required.
    pub const TIME_OFFSET: &[&str] = &["JULD"];

    /// Reference timestamp the day offsets count from. Required.
    pub const REFERENCE_TIME: &[&str] = &["REFERENCE_DATE_TIME"];

    /// Profile latitude, degrees north. Required.
    pub const LATITUDE: &[&str] = &["LATITUDE"];

    /// Profile longitude, degrees east. Required.
    pub const LONGITUDE: &[&str] = &["LONGITUDE"];
}

// =============================================================================
// Container Layout
// =============================================================================

/// Profile dimension name in multi-profile Argo files.
///
/// Files lacking this dimension hold exactly one implicit profile.
pub const PROFILE_DIMENSION: &str = "N_PROF";

/// File extension of Argo profile containers
pub const NETCDF_EXTENSION: &str = "nc";

// =============================================================================
// Time Formats
// =============================================================================

/// Layout of the REFERENCE_DATE_TIME character variable (14 characters)
pub const REFERENCE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Serialization layout for measurement timestamps in output rows
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Platform Identity
// =============================================================================

/// Digit-run pattern used for the filename fallback when the platform-id
/// variable decodes to nothing usable. WMO float numbers are 7 digits,
/// with 8-digit identifiers already allocated.
pub const PLATFORM_ID_PATTERN: &str = r"([0-9]{7,8})";

/// Decoded platform-id text treated as absent
pub const PLATFORM_ID_SENTINEL: &str = "None";

// =============================================================================
// Default Filter Windows
// =============================================================================

/// Default geographic window: the Indian Ocean, 20°E–140°E, 70°S–30°N
pub mod default_region {
    pub const LON_MIN: f64 = 20.0;
    pub const LON_MAX: f64 = 140.0;
    pub const LAT_MIN: f64 = -70.0;
    pub const LAT_MAX: f64 = 30.0;
}

/// Default inclusive year window
pub mod default_years {
    pub const MIN: i32 = 2020;
    pub const MAX: i32 = 2025;
}

// =============================================================================
// Output Layout
// =============================================================================

/// CSV header for emitted measurement rows
pub const CSV_HEADERS: &[&str] = &[
    "platform_id",
    "measurement_date",
    "latitude",
    "longitude",
    "pressure_dbar",
    "temperature_celsius",
    "salinity_psu",
    "year",
];

/// Default output file name when none is configured
pub const DEFAULT_OUTPUT_FILE: &str = "argo_measurements.csv";
