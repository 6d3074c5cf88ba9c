//! Health risk engine CLI
//!
//! Collects lifestyle and biometric measurements, scores them against the
//! pre-trained disease classifiers, and renders flagged risks with
//! educational detail.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use risk_lib::models::{Gender, YesNo};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Health risk engine CLI
#[derive(Parser)]
#[command(name = "riskcheck")]
#[command(author, version, about = "CLI for the health risk engine", long_about = None)]
pub struct Cli {
    /// Directory holding the classifier artifacts (env: RISK_MODEL_DIR)
    #[arg(long, value_name = "DIR")]
    pub model_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the entered measurements and show flagged risks
    Analyze(AnalyzeArgs),

    /// Show educational text for a condition
    Info {
        /// Disease name as shown on the risk cards
        disease: String,
    },

    /// List the registered diseases and their classifier artifacts
    Models {
        /// Try to load each artifact and report its status
        #[arg(long)]
        check: bool,
    },
}

/// Measurement flags for an analysis run. All thirteen inputs are required
/// unless a JSON profile file supplies them instead.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Read the measurements from a JSON profile file (flags are ignored)
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Age in years (15-100)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(15..=100))]
    pub age: Option<u8>,

    /// Gender (female or male)
    #[arg(long, required_unless_present = "profile", value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Body mass index (10.0-50.0)
    #[arg(long, required_unless_present = "profile", value_parser = parse_bmi)]
    pub bmi: Option<f32>,

    /// Sleep hours per night (0-12)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(0..=12))]
    pub sleep: Option<u8>,

    /// Screen time in hours per day (0-15)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(0..=15))]
    pub screen: Option<u8>,

    /// Stress level (1-10)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub stress: Option<u8>,

    /// Physical activity level (1-10)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub activity: Option<u8>,

    /// Water intake in glasses per day (0-15)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(0..=15))]
    pub water: Option<u8>,

    /// Fatigue level (1-10)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub fatigue: Option<u8>,

    /// Sun exposure (1-10)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub sun: Option<u8>,

    /// Hydration level (1-10)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub hydration: Option<u8>,

    /// Diabetes risk score (0-100)
    #[arg(long, required_unless_present = "profile", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub diabetes_score: Option<u8>,

    /// Do you have anemia? (no or yes)
    #[arg(long, required_unless_present = "profile", value_parser = parse_answer)]
    pub anemia: Option<YesNo>,

    /// Open the detail view for a flagged disease after analysis
    #[arg(long, value_name = "DISEASE")]
    pub detail: Option<String>,

    /// Abort the run if any classifier artifact fails to load
    #[arg(long)]
    pub strict: bool,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_ascii_lowercase().as_str() {
        "female" | "f" | "0" => Ok(Gender::Female),
        "male" | "m" | "1" => Ok(Gender::Male),
        _ => Err(format!("unknown gender '{s}', expected female or male")),
    }
}

fn parse_answer(s: &str) -> Result<YesNo, String> {
    match s.to_ascii_lowercase().as_str() {
        "no" | "n" | "0" => Ok(YesNo::No),
        "yes" | "y" | "1" => Ok(YesNo::Yes),
        _ => Err(format!("unknown answer '{s}', expected no or yes")),
    }
}

fn parse_bmi(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("invalid BMI '{s}'"))?;
    if (10.0..=50.0).contains(&value) {
        Ok(value)
    } else {
        Err("BMI must be between 10.0 and 50.0".to_string())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = config::EngineConfig::load(cli.model_dir)?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(&config, args, cli.format),
        Commands::Info { disease } => commands::info::run(&disease, cli.format),
        Commands::Models { check } => commands::models::run(&config, check, cli.format),
    }
}
