// ==========================================
// Divider Calculatie - CLI entry point
// ==========================================
// Reads a part table (CSV), classifies every row against the divider
// catalog under the 52mm and 95mm regimes, writes the result table
// ==========================================

use anyhow::Context;
use clap::Parser;
use divider_calc::report::ReportFormat;
use divider_calc::{logging, run_classification, ClassificationRequest};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "divider-calc",
    version,
    about = "Classify bill-of-materials rows into storage dividers"
)]
struct Cli {
    /// Part table (CSV with columns Stuklijst, Soort, Omschrijving,
    /// P1..P5, "Netto lengte PL")
    input: PathBuf,

    /// Divider table (CSV with columns name, L, B, H); omit to use the
    /// factory defaults
    #[arg(long)]
    dividers: Option<PathBuf>,

    /// Override height in mm for the 95mm check (0 = no override)
    #[arg(long, default_value_t = 0.0)]
    hoogte_override: f64,

    /// Result table destination
    #[arg(long, short, default_value = "indeling_resultaat.csv")]
    output: PathBuf,

    /// Result table format
    #[arg(long, value_enum, default_value = "csv")]
    format: ReportFormat,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    tracing::info!("Divider Calculatie v{}", divider_calc::VERSION);

    // the operator sentinel 0 means "no override"
    let override_height_95 = (cli.hoogte_override != 0.0).then_some(cli.hoogte_override);

    let request = ClassificationRequest {
        input: cli.input,
        dividers: cli.dividers,
        override_height_95,
        output: cli.output.clone(),
        format: cli.format,
    };

    let summary = run_classification(&request)
        .with_context(|| format!("classification run for {}", request.input.display()))?;

    tracing::info!(
        "done: {} rows in, {} matched (52mm), {} unmatched -> {}",
        summary.rows_in,
        summary.matched_52,
        summary.unmatched_52,
        cli.output.display()
    );

    Ok(())
}
