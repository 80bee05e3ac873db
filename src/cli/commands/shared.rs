//! Shared components for CLI commands
//!
//! Common helpers used across the command implementations: logging
//! setup, layered configuration loading, profile file discovery, and
//! progress reporting.

use crate::cli::args::ExtractArgs;
use crate::config::Config;
use crate::constants::NETCDF_EXTENSION;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging to stderr
///
/// Honors `RUST_LOG` when set; otherwise filters to this crate at the
/// requested level. Quiet mode drops timestamps and uses the compact
/// formatter.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("argo_processor={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using a layered approach (file -> CLI args)
pub fn load_configuration(args: &ExtractArgs) -> Result<Config> {
    info!("Loading configuration");

    if let Some(config_path) = &args.config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file specified, using defaults");
    }

    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.processing.output_path = output_path.clone();
    }

    let geo = &mut config.filters.geographic;
    if args.no_geographic_filter {
        geo.enabled = false;
    }
    if let Some(lon_min) = args.lon_min {
        geo.lon_min = lon_min;
    }
    if let Some(lon_max) = args.lon_max {
        geo.lon_max = lon_max;
    }
    if let Some(lat_min) = args.lat_min {
        geo.lat_min = lat_min;
    }
    if let Some(lat_max) = args.lat_max {
        geo.lat_max = lat_max;
    }

    let temporal = &mut config.filters.temporal;
    if args.no_temporal_filter {
        temporal.enabled = false;
    }
    if let Some(year_min) = args.year_min {
        temporal.year_min = year_min;
    }
    if let Some(year_max) = args.year_max {
        temporal.year_max = year_max;
    }

    if let Some(workers) = args.workers {
        config.performance.workers = workers;
    }

    config.logging.level = args.get_log_level().to_string();
    config.logging.quiet = args.quiet;
}

/// Discover NetCDF profile files under a directory, recursively
///
/// Matches on the `.nc` extension case-insensitively and sorts the
/// result for a deterministic processing order.
pub fn discover_profile_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    if !input_dir.exists() {
        return Err(Error::configuration(format!(
            "Input path does not exist: {}",
            input_dir.display()
        )));
    }

    let mut profile_files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_netcdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(NETCDF_EXTENSION))
            .unwrap_or(false);
        if is_netcdf {
            profile_files.push(path.to_path_buf());
        }
    }

    profile_files.sort();

    debug!(
        "Discovered {} NetCDF files in {}",
        profile_files.len(),
        input_dir.display()
    );

    Ok(profile_files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn extract_args(extra: &[&str]) -> ExtractArgs {
        use crate::cli::args::{Args, Commands};
        let mut argv = vec!["argo-processor", "extract"];
        argv.extend_from_slice(extra);
        match Args::parse_from(argv).command {
            Some(Commands::Extract(args)) => args,
            other => panic!("expected extract command, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_profile_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_profile_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_profile_files_recursive_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2021/06");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(nested.join("b_profile.nc"), b"").unwrap();
        std::fs::write(nested.join("a_profile.NC"), b"").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"").unwrap();

        let files = discover_profile_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a_profile.NC"));
        assert!(files[1].ends_with("b_profile.nc"));
    }

    #[test]
    fn test_discover_profile_files_missing_directory() {
        assert!(discover_profile_files(Path::new("/nonexistent/argo")).is_err());
    }

    #[test]
    fn test_cli_overrides_filters_and_paths() {
        let args = extract_args(&[
            "--input",
            "/tmp",
            "--output",
            "out.csv",
            "--lat-min",
            "-60",
            "--year-max",
            "2023",
            "--workers",
            "2",
        ]);

        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.processing.input_path, PathBuf::from("/tmp"));
        assert_eq!(config.processing.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.filters.geographic.lat_min, -60.0);
        assert_eq!(config.filters.temporal.year_max, 2023);
        assert_eq!(config.performance.workers, 2);
    }

    #[test]
    fn test_cli_disables_filters() {
        let args = extract_args(&["--no-geographic-filter", "--no-temporal-filter"]);

        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);

        assert!(!config.filters.geographic.enabled);
        assert!(!config.filters.temporal.enabled);
    }
}
