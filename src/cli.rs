use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the demonstration report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gradebook")]
#[command(about = "Gradebook - runs the academic records demonstration scenario")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hours worked used for the salary calculation (overrides config)
    #[arg(long)]
    pub hours: Option<f64>,

    /// Report output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level filter when RUST_LOG is unset (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,
}
