use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Data source {url} responded with status {status}")]
    SourceStatusError { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data error at row {row}, column {column}: {message}")]
    DataError {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Data source contains no records")]
    EmptyTableError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::HttpError(_) | LookupError::SourceStatusError { .. } => {
                ErrorCategory::Network
            }
            LookupError::CsvError(_)
            | LookupError::DataError { .. }
            | LookupError::EmptyTableError => ErrorCategory::Data,
            LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LookupError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::HttpError(_) => "Check network connectivity and the data source URL",
            LookupError::SourceStatusError { .. } => {
                "Verify the spreadsheet export URL is public and still exists"
            }
            LookupError::CsvError(_) | LookupError::DataError { .. } => {
                "Check that the CSV headers match the selected --variant"
            }
            LookupError::EmptyTableError => "Export the spreadsheet again; it has no data rows",
            LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            LookupError::IoError(_) => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download the price table: {}", self),
            ErrorCategory::Data => format!("The price table could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// Process exit code for a fatal startup error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = LookupError::SourceStatusError {
            url: "https://example.com/data.csv".to_string(),
            status: 404,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.exit_code(), 2);

        let err = LookupError::MissingConfigError {
            field: "data.source".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: LookupError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
