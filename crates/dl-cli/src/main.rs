//! dilepton-spectrum CLI
//!
//! Stand-in for the hosting framework: feeds recorded events to the analyzer
//! and persists the filled histograms as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dl_analysis::{AnalyzerConfig, DileptonAnalyzer};
use dl_core::EventRecord;

#[derive(Parser)]
#[command(name = "dilepton-spectrum")]
#[command(about = "Dilepton kinematics and dimuon invariant-mass spectra")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis over an event file
    Run {
        /// Input event file (JSON array of event records)
        #[arg(short, long)]
        input: PathBuf,

        /// Analyzer configuration (JSON). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for the histograms (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Run { input, config, output } => {
            cmd_run(&input, config.as_ref(), output.as_ref())
        }
        Commands::Version => {
            println!("dilepton-spectrum {}", dl_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_run(input: &PathBuf, config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let events = load_events(input)?;

    let mut analyzer = DileptonAnalyzer::new(config);
    analyzer.begin_job()?;
    for event in &events {
        analyzer.analyze(event)?;
    }
    let summary = analyzer.end_job();
    tracing::info!(events = summary.events, mass_fills = summary.mass_fills, "analysis done");

    write_json(output, serde_json::to_value(analyzer.histograms().histograms())?)
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalyzerConfig> {
    match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading analyzer config");
            let json = std::fs::read_to_string(p)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn load_events(input: &PathBuf) -> Result<Vec<EventRecord>> {
    tracing::info!(path = %input.display(), "loading events");
    let json = std::fs::read_to_string(input)?;
    let events: Vec<EventRecord> = serde_json::from_str(&json)?;
    tracing::info!(events = events.len(), "events loaded");
    Ok(events)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&value)?;
    if let Some(path) = output {
        std::fs::write(path, pretty)?;
        tracing::info!(path = %path.display(), "histograms written");
    } else {
        println!("{pretty}");
    }
    Ok(())
}
