pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use toml_config::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "zodiac-match.toml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "zodiac-match")]
#[command(about = "Zodiac compatibility analysis client")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Analysis service base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory the report is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Page URL used when sharing results
    #[arg(long)]
    pub page_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit two people from a form file and render the compatibility report
    Analyze {
        /// TOML file with [person1] and [person2] tables
        #[arg(short, long)]
        form: String,
    },
    /// Print the zodiac sign for a birthdate
    Sign { birthdate: String },
    /// Fetch today's horoscope for a sign
    Horoscope { sign: String },
    /// Check that the analysis service is up
    Health,
    /// Share the results page link
    Share,
    /// Remove the rendered report so a new analysis can start
    Reset,
}

#[cfg(feature = "cli")]
impl Command {
    /// Commands whose failures are already shown to the user through a surface alert.
    pub fn alerts_on_failure(&self) -> bool {
        matches!(self, Command::Analyze { .. })
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                AppConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.report.output_path = output_path.clone();
        }
        if let Some(page_url) = &self.page_url {
            config.report.page_url = page_url.clone();
        }

        Ok(config)
    }
}
