use analytics::{PaymentSummary, analyse_payments};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::PaymentRecord;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the payment analyzer.
fn main() {
    // Initialize logging; verbosity is controlled through RUST_LOG.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize logging");

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyse(args) => {
            if let Err(e) = handle_analyse(args) {
                eprintln!("Error during analysis: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive statistics over batches of payment records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a JSON document of payment records.
    Analyse(AnalyseArgs),
}

#[derive(Parser)]
struct AnalyseArgs {
    /// Path to a JSON file containing an array of payment records.
    #[arg(long)]
    input: PathBuf,

    /// Emit the summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Analyse Command Logic
// ==============================================================================

/// Handles the orchestration of the analysis: load, analyse, render.
fn handle_analyse(args: AnalyseArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let records: Vec<PaymentRecord> =
        serde_json::from_str(&raw).context("Input is not a JSON array of payment records")?;
    info!(records = records.len(), "Loaded payment records");

    let summary = analyse_payments(&records).context("Could not analyse payments")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary_table(&summary);
    }

    Ok(())
}

/// Renders the five summary statistics as a table.
fn print_summary_table(summary: &PaymentSummary) {
    let mut table = Table::new();
    table.set_header(vec!["Statistic", "Value"]);
    table.add_row(vec!["Max".to_string(), summary.max.to_string()]);
    table.add_row(vec!["Mean".to_string(), summary.mean.to_string()]);
    table.add_row(vec!["Median".to_string(), summary.median.to_string()]);
    table.add_row(vec!["Min".to_string(), summary.min.to_string()]);
    table.add_row(vec![
        "Standard Deviation".to_string(),
        summary.standard_deviation.to_string(),
    ]);

    println!("{table}");
}
