pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gift-matcher")]
#[command(about = "Find a gift for a recipient and place an order")]
pub struct CliConfig {
    /// Path to the JSON gift catalog (overrides the config file)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Print the completed order as JSON
    #[arg(long)]
    pub receipt_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the gifts matching the given requirements and exit
    Search {
        #[arg(long)]
        occasion: String,

        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        #[arg(long)]
        gender: String,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },
}
