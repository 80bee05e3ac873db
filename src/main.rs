use argo_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(argo_processor::Error::processing_interrupted(
                    "Processing interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Argo Processor - Oceanographic Float Profile Converter");
    println!("======================================================");
    println!();
    println!("Convert Argo float profile files (NetCDF) into a single flat CSV");
    println!("of per-level measurements for data analysis.");
    println!();
    println!("USAGE:");
    println!("    argo-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract measurement rows from NetCDF profiles to CSV");
    println!("    inspect     Inspect one NetCDF profile file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract everything under a directory with default filters:");
    println!("    argo-processor extract --input /data/argo --output measurements.csv");
    println!();
    println!("    # Whole-globe extraction for the year 2022 only:");
    println!("    argo-processor extract -i /data/argo --no-geographic-filter \\");
    println!("                           --year-min 2022 --year-max 2022");
    println!();
    println!("    # See why a file is rejected:");
    println!("    argo-processor inspect /data/argo/nodc_D2902746_142.nc");
    println!();
    println!("For detailed help on any command, use:");
    println!("    argo-processor <COMMAND> --help");
}
