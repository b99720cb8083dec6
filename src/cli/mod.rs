//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Pathogen Portal - clipboard import and notification submission
#[derive(Parser, Debug)]
#[command(name = "pathogen-portal")]
#[command(version, about, long_about = None)]
#[command(author = "Pathogen Portal Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "portal.toml", env = "PORTAL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PORTAL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import clipboard text into a notification model
    ImportClipboard(commands::import::ImportArgs),

    /// Submit a notification to the gateway
    Submit(commands::submit::SubmitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
