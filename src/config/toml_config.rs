use crate::core::ConfigProvider;
use crate::utils::error::{Result, ZodiacError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PAGE_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_REPORT_FILENAME: &str = "report.html";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_page_url")]
    pub page_url: String,
    #[serde(default = "default_report_filename")]
    pub report_filename: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_report_filename() -> String {
    DEFAULT_REPORT_FILENAME.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            page_url: default_page_url(),
            report_filename: default_report_filename(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZodiacError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ZodiacError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZodiacError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("client.base_url", &self.client.base_url)?;
        validate_url("report.page_url", &self.report.page_url)?;
        validate_path("report.output_path", &self.report.output_path)?;
        validate_non_empty_string("report.report_filename", &self.report.report_filename)?;
        validate_file_extension(
            "report.report_filename",
            &self.report.report_filename,
            &["html", "htm"],
        )?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn page_url(&self) -> &str {
        &self.report.page_url
    }

    fn report_filename(&self) -> &str {
        &self.report.report_filename
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
