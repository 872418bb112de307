use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Malformed argument blob: {message}")]
    BlobFormatError { message: String },

    #[error("Value too large for the blob format: {what} = {value}")]
    BlobOverflowError { what: String, value: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::IoError(_) => ErrorCategory::Io,
            GenError::ConfigValidationError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GenError::SerializationError(_)
            | GenError::BlobFormatError { .. }
            | GenError::BlobOverflowError { .. } => ErrorCategory::Format,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GenError::IoError(_) => ErrorSeverity::Critical,
            GenError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::IoError(e) => format!("File system operation failed: {}", e),
            GenError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            GenError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GenError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
            GenError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            GenError::BlobFormatError { message } => {
                format!("The argument blob is not readable: {}", message)
            }
            GenError::BlobOverflowError { what, value } => {
                format!("{} ({}) does not fit in a 32-bit field", what, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the output directory exists and is writable, then rerun the build from a clean state"
            }
            ErrorCategory::Configuration => {
                "Fix the build configuration file or command line flags and try again"
            }
            ErrorCategory::Format => {
                "Regenerate the file with the same tool version that reads it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_critical() {
        let err = GenError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_config_errors_share_a_suggestion() {
        let missing = GenError::MissingConfigError {
            field: "modules.header".to_string(),
        };
        let invalid = GenError::InvalidConfigValueError {
            field: "modules.enabled".to_string(),
            value: "bad name".to_string(),
            reason: "not an identifier".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.recovery_suggestion(), invalid.recovery_suggestion());
        assert_eq!(invalid.severity(), ErrorSeverity::High);
    }
}
