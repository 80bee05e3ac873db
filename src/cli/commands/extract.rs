//! Extract command implementation for the Argo processor CLI
//!
//! Orchestrates the batch workflow: configuration loading, recursive
//! file discovery, parallel per-file extraction, CSV writing, and the
//! final summary report. File-scoped failures (unreadable container,
//! missing required variables) are counted and never abort the batch;
//! only configuration and output-write errors are fatal.

use super::shared::{
    create_progress_bar, discover_profile_files, load_configuration, setup_logging,
};
use crate::app::models::{FileOutcome, MeasurementRow};
use crate::app::services::netcdf_source::NetcdfSource;
use crate::app::services::profile_extractor::{ExtractionStats, FileStats, ProfileExtractor};
use crate::app::services::row_sink::{CsvRowSink, MemorySink, RowSink};
use crate::cli::args::ExtractArgs;
use crate::{Error, Result};
use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, warn};

type FileResult = (PathBuf, Result<(FileOutcome, FileStats, Vec<MeasurementRow>)>);

/// Extract command runner
///
/// 1. Set up logging and configuration
/// 2. Discover NetCDF files under the input directory
/// 3. Extract files in parallel, writing rows to the output CSV
/// 4. Generate summary statistics
pub async fn run_extract(args: ExtractArgs) -> Result<ExtractionStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting Argo profile extraction");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let files = discover_profile_files(&config.processing.input_path)?;
    info!(
        "Discovered {} NetCDF files under {}",
        files.len(),
        config.processing.input_path.display()
    );

    let mut stats = ExtractionStats::new();
    stats.files_seen = files.len();

    // The header is written immediately, so an empty discovery still
    // yields a valid (empty) CSV.
    let output_path = config.processing.output_path.clone();
    let mut csv_sink = CsvRowSink::create(&output_path)?;

    if files.is_empty() {
        warn!(
            "No NetCDF files found under {}",
            config.processing.input_path.display()
        );
        csv_sink.finish()?;
        generate_final_report(&args, &stats, &output_path, start_time.elapsed());
        return Ok(stats);
    }

    let progress_bar = if args.show_progress() {
        Some(create_progress_bar(
            files.len() as u64,
            "Extracting profiles...",
        ))
    } else {
        None
    };

    let workers = config.performance.workers.max(1);
    let config = Arc::new(config);

    // Each worker opens its own file handle and extracts into a memory
    // buffer; the single CSV writer stays on this task so rows from
    // different files never interleave mid-record.
    let mut results = stream::iter(files.into_iter().map(|path| {
        let config = Arc::clone(&config);
        task::spawn_blocking(move || -> FileResult {
            let result = extract_one_file(&path, config);
            (path, result)
        })
    }))
    .buffer_unordered(workers);

    while let Some(joined) = results.next().await {
        let (path, result) = joined
            .map_err(|e| Error::processing_interrupted(format!("Worker task failed: {}", e)))?;

        match result {
            Ok((outcome, file_stats, rows)) => {
                match outcome {
                    FileOutcome::Extracted => stats.files_extracted += 1,
                    FileOutcome::MissingVariables(_) => stats.files_missing_variables += 1,
                }
                stats.merge_file(&file_stats);
                for row in &rows {
                    csv_sink.write_row(row)?;
                }
            }
            Err(e) => {
                warn!("Failed to process '{}': {}", path.display(), e);
                stats.files_unreadable += 1;
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    csv_sink.finish()?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Extraction complete");
    }

    info!("{}", stats.summary());
    generate_final_report(&args, &stats, &output_path, start_time.elapsed());

    Ok(stats)
}

/// Extract one file into a memory buffer, on a blocking worker thread
fn extract_one_file(
    path: &Path,
    config: Arc<crate::config::Config>,
) -> Result<(FileOutcome, FileStats, Vec<MeasurementRow>)> {
    let source = NetcdfSource::open(path)?;
    let extractor = ProfileExtractor::new(config);
    let mut sink = MemorySink::new();
    let (outcome, file_stats) = extractor.extract(&source, &mut sink)?;
    Ok((outcome, file_stats, sink.into_rows()))
}

/// Print the human-readable summary report to stdout
fn generate_final_report(
    args: &ExtractArgs,
    stats: &ExtractionStats,
    output_path: &Path,
    elapsed: std::time::Duration,
) {
    if args.quiet {
        return;
    }

    println!("\n{}", "Extraction Summary".bright_green().bold());
    println!("{}", "=".repeat(50));
    println!(
        "Files:      {} seen, {} extracted, {} missing variables, {} unreadable",
        stats.files_seen.to_string().bright_white().bold(),
        stats.files_extracted,
        stats.files_missing_variables,
        if stats.files_unreadable > 0 {
            stats.files_unreadable.to_string().bright_red().bold()
        } else {
            stats.files_unreadable.to_string().normal()
        }
    );
    println!(
        "Profiles:   {} seen, {} accepted ({:.1}%)",
        stats.totals.profiles_seen,
        stats.totals.profiles_accepted.to_string().bright_white().bold(),
        stats.acceptance_rate()
    );
    println!(
        "            skipped: {} no timestamp, {} bad coordinates, {} outside years, {} outside region",
        stats.totals.profiles_missing_timestamp,
        stats.totals.profiles_invalid_coordinates,
        stats.totals.profiles_outside_year_window,
        stats.totals.profiles_outside_region
    );
    println!(
        "Rows:       {} emitted from {} levels ({} levels skipped)",
        stats.totals.rows_emitted.to_string().bright_white().bold(),
        stats.totals.levels_seen,
        stats.totals.levels_skipped
    );

    if !stats.totals.rows_by_year.is_empty() {
        println!("\n{}", "Rows by year".bright_green().bold());
        for (year, count) in &stats.totals.rows_by_year {
            println!("  {}: {}", year, count);
        }
    }

    println!(
        "\nOutput written to {} in {}",
        output_path.display().to_string().bright_white().bold(),
        HumanDuration(elapsed)
    );
}
