use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Cannot open '{path}': {source}")]
    FileOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Line {line_number}: age '{value}' is not a valid number")]
    AgeParseError { line_number: usize, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::FileOpenError { .. } | RosterError::IoError(_) => ErrorCategory::Io,
            RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RosterError::AgeParseError { .. } => ErrorCategory::Data,
            RosterError::CsvError(_) | RosterError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RosterError::FileOpenError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            RosterError::IoError(_) => "Check file permissions and free disk space".to_string(),
            RosterError::CsvError(_) | RosterError::SerializationError(_) => {
                "Try a different output format".to_string()
            }
            RosterError::ConfigError { .. } => {
                "Review the configuration file for syntax errors".to_string()
            }
            RosterError::InvalidConfigValueError { field, .. }
            | RosterError::MissingConfigError { field } => {
                format!("Fix the '{}' setting and try again", field)
            }
            RosterError::AgeParseError { .. } => {
                "Fix the age on that line or run without --strict-ages".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::FileOpenError { path, .. } => format!("Could not open '{}'", path),
            RosterError::AgeParseError { line_number, value } => {
                format!("Line {} has an age that is out of range: {}", line_number, value)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
