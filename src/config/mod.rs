#[cfg(feature = "cli")]
pub mod cli;
pub mod messages;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::messages::Locale;
#[cfg(feature = "cli")]
use clap::Parser;

/// Every flag is optional; with none given the calculator behaves exactly
/// like the bare prompt-read-answer program.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Calculates one expression with Arabic (1..10) or Roman (I..X) operands")]
pub struct CliConfig {
    /// Optional TOML file with locale and message overrides
    #[arg(short, long)]
    pub config: Option<String>,

    /// Language of the error messages, overrides the config file
    #[arg(long, value_enum)]
    pub lang: Option<Locale>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
