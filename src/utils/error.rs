use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template is not valid UTF-8: {0}")]
    TemplateEncodingError(#[from] std::string::FromUtf8Error),

    #[error("Skipping {file}: {reason}")]
    RecordError { file: String, reason: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ReadmeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReadmeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReadmeError::IoError(_) => ErrorCategory::Io,
            ReadmeError::SerializationError(_)
            | ReadmeError::TemplateEncodingError(_)
            | ReadmeError::RecordError { .. } => ErrorCategory::Data,
            ReadmeError::InvalidConfigValueError { .. } | ReadmeError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A single unreadable record never fails the run.
            ReadmeError::RecordError { .. } => ErrorSeverity::Low,
            ReadmeError::SerializationError(_) | ReadmeError::TemplateEncodingError(_) => {
                ErrorSeverity::Medium
            }
            ReadmeError::IoError(_) => ErrorSeverity::High,
            ReadmeError::InvalidConfigValueError { .. } | ReadmeError::MissingConfigError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReadmeError::IoError(e) => format!("File operation failed: {}", e),
            ReadmeError::SerializationError(e) => format!("Could not parse JSON: {}", e),
            ReadmeError::TemplateEncodingError(_) => {
                "The README template is not valid UTF-8 text".to_string()
            }
            ReadmeError::RecordError { file, reason } => {
                format!("Could not read record {}: {}", file, reason)
            }
            ReadmeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ReadmeError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReadmeError::IoError(_) => {
                "Check that the data directory, template and output paths exist and are accessible"
                    .to_string()
            }
            ReadmeError::SerializationError(_) | ReadmeError::RecordError { .. } => {
                "Check the JSON record files for syntax errors and missing fields".to_string()
            }
            ReadmeError::TemplateEncodingError(_) => {
                "Re-save the template file with UTF-8 encoding".to_string()
            }
            ReadmeError::InvalidConfigValueError { .. } | ReadmeError::MissingConfigError { .. } => {
                "Run with --help and check the provided arguments".to_string()
            }
        }
    }
}
