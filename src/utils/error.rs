use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZodiacError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("Analysis rejected by server: {message}")]
    ServerRejected { message: String },

    #[error("No compatibility data in response")]
    MissingPayload,

    #[error("An analysis request is already in progress")]
    Busy,

    #[error("Unknown zodiac sign: {value}")]
    UnknownSign { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ZodiacError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ZodiacError::ApiError(_) | ZodiacError::UrlError(_) => ErrorCategory::Network,
            ZodiacError::HttpStatus { .. } | ZodiacError::ServerRejected { .. } => {
                ErrorCategory::Server
            }
            ZodiacError::SerializationError(_)
            | ZodiacError::TemplateError(_)
            | ZodiacError::MissingPayload => ErrorCategory::Data,
            ZodiacError::ConfigError { .. }
            | ZodiacError::MissingConfigError { .. }
            | ZodiacError::InvalidConfigValueError { .. }
            | ZodiacError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ZodiacError::UnknownSign { .. }
            | ZodiacError::ValidationError { .. }
            | ZodiacError::Busy => ErrorCategory::Input,
            ZodiacError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ZodiacError::Busy => ErrorSeverity::Low,
            ZodiacError::ApiError(_)
            | ZodiacError::HttpStatus { .. }
            | ZodiacError::ServerRejected { .. }
            | ZodiacError::MissingPayload => ErrorSeverity::Medium,
            ZodiacError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the analysis service is reachable and --base-url is correct",
            ErrorCategory::Server => "Resubmit the form; the analysis service reported a failure",
            ErrorCategory::Data => "Resubmit the form; the service returned data that could not be displayed",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
            ErrorCategory::Input => "Check the form values and command arguments",
            ErrorCategory::System => "Check file permissions and available disk space for the output path",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZodiacError::HttpStatus { status } => {
                format!("The analysis service answered with HTTP {}", status)
            }
            ZodiacError::ServerRejected { message } => {
                format!("The analysis service could not analyze this pair: {}", message)
            }
            ZodiacError::MissingPayload => {
                "The analysis service returned no compatibility data".to_string()
            }
            ZodiacError::ApiError(_) => "Could not reach the analysis service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZodiacError>;
