use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpError {
    #[error("Invalid interval{}: start {start} is after end {end}", label_suffix(.label))]
    InvalidInterval {
        label: Option<String>,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

fn label_suffix(label: &Option<String>) -> String {
    match label {
        Some(label) => format!(" ({})", label),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExpError::ConfigValidationError { .. }
            | ExpError::InvalidConfigValueError { .. }
            | ExpError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ExpError::InvalidInterval { .. } | ExpError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            ExpError::IoError(_) => ErrorCategory::Io,
            ExpError::SerializationError(_) | ExpError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExpError::IoError(_) => ErrorSeverity::Critical,
            ExpError::SerializationError(_) | ExpError::CsvError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ExpError::InvalidInterval { .. } => {
                "Check the experience entry: its start date must not be after its end date"
                    .to_string()
            }
            ExpError::InvalidConfigValueError { field, .. } => format!(
                "Fix '{}' in the configuration file (dates use YYYY-MM-DD or YYYY-MM)",
                field
            ),
            ExpError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            ExpError::ConfigValidationError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            ExpError::IoError(_) => "Check the file path and its permissions".to_string(),
            ExpError::SerializationError(_) | ExpError::CsvError(_) => {
                "Try a different output format".to_string()
            }
            ExpError::ProcessingError { .. } => {
                "Re-run with --verbose to see which entry failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Experience data problem: {}", self),
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Output => format!("Could not render the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpError>;
