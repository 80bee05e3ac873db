//! Command-line argument definitions for the Argo processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Filter-related flags override the corresponding configuration
//! values; absence of a flag leaves the configured (or default) value in
//! place.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the Argo profile processor
///
/// Converts Argo oceanographic float profiles from NetCDF containers into
/// a single flat CSV of per-level measurements for data analysis.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "argo-processor",
    version,
    about = "Convert Argo float NetCDF profiles into a flat measurement CSV",
    long_about = "Processes Argo oceanographic float profile files (NetCDF) into a single \
                  flat CSV of per-level measurements. Handles single- and multi-profile \
                  container layouts, variable name aliasing, fill-value masking, and \
                  geographic/temporal filtering, and reports exactly what it skipped and why."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the Argo processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract measurement rows from NetCDF profiles to CSV (default command)
    Extract(ExtractArgs),
    /// Inspect one NetCDF profile file: dimensions, variables, resolved roles
    Inspect(InspectArgs),
}

/// Arguments for the extract command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Input directory scanned recursively for .nc profile files
    ///
    /// If not specified, defaults to the configured input path (the
    /// current directory out of the box).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory containing NetCDF profile files"
    )]
    pub input_path: Option<PathBuf>,

    /// Output CSV file path
    ///
    /// Will be overwritten if it exists. If not specified, defaults to
    /// ./argo_measurements.csv
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV file path"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for filter windows, variable alias lists,
    /// and performance settings. CLI flags override file values.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Western edge of the bounding box, degrees east
    #[arg(
        long = "lon-min",
        value_name = "DEG",
        allow_negative_numbers = true,
        help = "Bounding box minimum longitude"
    )]
    pub lon_min: Option<f64>,

    /// Eastern edge of the bounding box, degrees east
    #[arg(
        long = "lon-max",
        value_name = "DEG",
        allow_negative_numbers = true,
        help = "Bounding box maximum longitude"
    )]
    pub lon_max: Option<f64>,

    /// Southern edge of the bounding box, degrees north
    #[arg(
        long = "lat-min",
        value_name = "DEG",
        allow_negative_numbers = true,
        help = "Bounding box minimum latitude"
    )]
    pub lat_min: Option<f64>,

    /// Northern edge of the bounding box, degrees north
    #[arg(
        long = "lat-max",
        value_name = "DEG",
        allow_negative_numbers = true,
        help = "Bounding box maximum latitude"
    )]
    pub lat_max: Option<f64>,

    /// Disable the geographic bounding-box filter entirely
    #[arg(
        long = "no-geographic-filter",
        help = "Accept profiles regardless of position",
        conflicts_with_all = ["lon_min", "lon_max", "lat_min", "lat_max"]
    )]
    pub no_geographic_filter: bool,

    /// First calendar year accepted (inclusive)
    #[arg(long = "year-min", value_name = "YEAR", help = "First accepted year")]
    pub year_min: Option<i32>,

    /// Last calendar year accepted (inclusive)
    #[arg(long = "year-max", value_name = "YEAR", help = "Last accepted year")]
    pub year_max: Option<i32>,

    /// Disable the calendar-year filter entirely
    #[arg(
        long = "no-temporal-filter",
        help = "Accept profiles regardless of measurement year",
        conflicts_with_all = ["year_min", "year_max"]
    )]
    pub no_temporal_filter: bool,

    /// Number of parallel workers
    ///
    /// Controls how many files are processed concurrently. More workers
    /// speed up large archives but use more memory and CPU.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers for processing"
    )]
    pub workers: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (single-file diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// NetCDF profile file to inspect
    #[arg(value_name = "FILE", help = "NetCDF profile file to inspect")]
    pub file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0".to_string(),
                ));
            }

            if workers > 100 {
                return Err(Error::configuration(
                    "Number of workers cannot exceed 100".to_string(),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.lon_min, self.lon_max) {
            if min > max {
                return Err(Error::configuration(format!(
                    "Longitude window is inverted: {} > {}",
                    min, max
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.lat_min, self.lat_max) {
            if min > max {
                return Err(Error::configuration(format!(
                    "Latitude window is inverted: {} > {}",
                    min, max
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.year_min, self.year_max) {
            if min > max {
                return Err(Error::configuration(format!(
                    "Year window is inverted: {} > {}",
                    min, max
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
