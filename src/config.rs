//! Configuration management and validation.
//!
//! Provides the sectioned configuration for the extraction pipeline:
//! input/output paths, geographic and temporal filter windows, variable
//! alias preference lists, and performance/logging settings. Nothing in
//! the pipeline reads these values from anywhere else; the whole
//! configuration is constructed here and passed in.

use crate::constants::{DEFAULT_OUTPUT_FILE, aliases, default_region, default_years};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for Argo profile extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input/output path settings
    pub processing: ProcessingConfig,

    /// Geographic and temporal profile filters
    pub filters: FilterConfig,

    /// Variable alias preference lists
    pub variables: VariableConfig,

    /// Worker and throughput settings
    pub performance: PerformanceConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Input and output path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Directory scanned recursively for .nc profile files
    pub input_path: PathBuf,

    /// Output CSV file path
    pub output_path: PathBuf,
}

/// Profile filter settings
///
/// The geographic and temporal filters are independent; either can be
/// disabled without affecting the other. Both windows are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Geographic bounding-box filter
    pub geographic: GeographicFilterConfig,

    /// Calendar-year window filter
    pub temporal: TemporalFilterConfig,
}

/// Inclusive geographic bounding box
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeographicFilterConfig {
    /// Whether the bounding-box filter is applied
    pub enabled: bool,
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

/// Inclusive calendar-year window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalFilterConfig {
    /// Whether the year-window filter is applied
    pub enabled: bool,
    pub year_min: i32,
    pub year_max: i32,
}

/// Ordered alias preference lists for each variable role
///
/// The first alias present in a file wins; matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableConfig {
    pub pressure: Vec<String>,
    pub temperature: Vec<String>,
    pub salinity: Vec<String>,
    pub platform_id: Vec<String>,
    pub time_offset: Vec<String>,
    pub reference_time: Vec<String>,
    pub latitude: Vec<String>,
    pub longitude: Vec<String>,
}

/// Worker and throughput settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of files processed concurrently (1 = sequential)
    pub workers: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Suppress progress output and use compact logging
    pub quiet: bool,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            filters: FilterConfig::default(),
            variables: VariableConfig::default(),
            performance: PerformanceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            geographic: GeographicFilterConfig::default(),
            temporal: TemporalFilterConfig::default(),
        }
    }
}

impl Default for GeographicFilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lon_min: default_region::LON_MIN,
            lon_max: default_region::LON_MAX,
            lat_min: default_region::LAT_MIN,
            lat_max: default_region::LAT_MAX,
        }
    }
}

impl Default for TemporalFilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            year_min: default_years::MIN,
            year_max: default_years::MAX,
        }
    }
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self {
            pressure: owned(aliases::PRESSURE),
            temperature: owned(aliases::TEMPERATURE),
            salinity: owned(aliases::SALINITY),
            platform_id: owned(aliases::PLATFORM_ID),
            time_offset: owned(aliases::TIME_OFFSET),
            reference_time: owned(aliases::REFERENCE_TIME),
            latitude: owned(aliases::LATITUDE),
            longitude: owned(aliases::LONGITUDE),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            quiet: false,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, falling back to
    /// defaults when no file is given
    ///
    /// CLI argument overrides are applied afterwards by the command layer.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    Error::io(format!("Failed to read config file '{}'", path.display()), e)
                })?;
                toml::from_str(&contents).map_err(|e| {
                    Error::configuration(format!(
                        "Invalid config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => Self::default(),
        };

        Ok(config)
    }

    /// Validate the configuration for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        let geo = &self.filters.geographic;
        if geo.enabled {
            if geo.lon_min > geo.lon_max {
                return Err(Error::configuration(format!(
                    "Invalid longitude window: {} > {}",
                    geo.lon_min, geo.lon_max
                )));
            }
            if geo.lat_min > geo.lat_max {
                return Err(Error::configuration(format!(
                    "Invalid latitude window: {} > {}",
                    geo.lat_min, geo.lat_max
                )));
            }
            if !(-90.0..=90.0).contains(&geo.lat_min) || !(-90.0..=90.0).contains(&geo.lat_max) {
                return Err(Error::configuration(
                    "Latitude window must be within -90..=90 degrees".to_string(),
                ));
            }
        }

        let temporal = &self.filters.temporal;
        if temporal.enabled && temporal.year_min > temporal.year_max {
            return Err(Error::configuration(format!(
                "Invalid year window: {} > {}",
                temporal.year_min, temporal.year_max
            )));
        }

        if self.performance.workers == 0 {
            return Err(Error::configuration(
                "Worker count must be at least 1".to_string(),
            ));
        }

        let required: [(&str, &Vec<String>); 6] = [
            ("pressure", &self.variables.pressure),
            ("platform_id", &self.variables.platform_id),
            ("time_offset", &self.variables.time_offset),
            ("reference_time", &self.variables.reference_time),
            ("latitude", &self.variables.latitude),
            ("longitude", &self.variables.longitude),
        ];
        for (role, list) in required {
            if list.is_empty() {
                return Err(Error::configuration(format!(
                    "Alias list for required role '{}' is empty",
                    role
                )));
            }
        }

        Ok(())
    }

    /// Create configuration with a custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.performance.workers = workers;
        self
    }

    /// Create configuration with the geographic filter disabled
    pub fn without_geographic_filter(mut self) -> Self {
        self.filters.geographic.enabled = false;
        self
    }

    /// Create configuration with the temporal filter disabled
    pub fn without_temporal_filter(mut self) -> Self {
        self.filters.temporal.enabled = false;
        self
    }

    /// Create configuration with a custom bounding box
    pub fn with_bounding_box(mut self, lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        self.filters.geographic = GeographicFilterConfig {
            enabled: true,
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        };
        self
    }

    /// Create configuration with a custom year window
    pub fn with_year_range(mut self, year_min: i32, year_max: i32) -> Self {
        self.filters.temporal = TemporalFilterConfig {
            enabled: true,
            year_min,
            year_max,
        };
        self
    }
}
