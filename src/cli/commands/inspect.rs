//! Inspect command implementation for the Argo processor CLI
//!
//! Opens a single NetCDF profile file and reports its layout: the
//! profile dimension, every variable with its rank, and how the default
//! alias lists resolve against it. Useful for diagnosing why a file is
//! rejected for missing variables before running a full extraction.

use super::shared::setup_logging;
use crate::app::services::netcdf_source::{NetcdfSource, ProfileSource};
use crate::app::services::profile_extractor::VariableMap;
use crate::cli::args::InspectArgs;
use crate::config::VariableConfig;
use crate::constants::PROFILE_DIMENSION;
use crate::{Error, Result};
use colored::*;

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    if !args.file.exists() {
        return Err(Error::file_not_found(args.file.display().to_string()));
    }

    let source = NetcdfSource::open(&args.file)?;

    println!("\n{}", args.file.display().to_string().bright_green().bold());
    println!("{}", "=".repeat(50));

    match source.dimension_len(PROFILE_DIMENSION) {
        Some(count) => println!(
            "Layout:     multi-profile ({} = {})",
            PROFILE_DIMENSION,
            count.to_string().bright_white().bold()
        ),
        None => println!("Layout:     single-profile (no {} dimension)", PROFILE_DIMENSION),
    }

    let mut names = source.variable_names();
    names.sort();

    println!("\n{}", "Variables".bright_green().bold());
    for name in &names {
        match source.variable_rank(name) {
            Ok(rank) => println!("  {} (rank {})", name, rank),
            Err(_) => println!("  {}", name),
        }
    }

    let variables = VariableConfig::default();
    println!("\n{}", "Resolved roles".bright_green().bold());
    match VariableMap::resolve(&names, &variables) {
        Ok(map) => {
            print_role("pressure", Some(&map.pressure));
            print_role("temperature", map.temperature.as_deref());
            print_role("salinity", map.salinity.as_deref());
            print_role("platform_id", Some(&map.platform_id));
            print_role("time_offset", Some(&map.time_offset));
            print_role("reference_time", Some(&map.reference_time));
            print_role("latitude", Some(&map.latitude));
            print_role("longitude", Some(&map.longitude));
        }
        Err(missing) => {
            println!(
                "  {} missing required roles: {}",
                "!".bright_red().bold(),
                missing.join(", ").bright_red()
            );
        }
    }

    println!();
    Ok(())
}

fn print_role(role: &str, resolved: Option<&str>) {
    match resolved {
        Some(name) => println!("  {:<15} -> {}", role, name.bright_white().bold()),
        None => println!("  {:<15} -> {}", role, "absent".yellow()),
    }
}
