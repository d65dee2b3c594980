pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::ConsoleSurface, toml_config::AppConfig};
pub use crate::core::{client::HttpAnalysisClient, submit::SubmitController};
pub use domain::zodiac::ZodiacSign;
pub use utils::error::{Result, ZodiacError};
