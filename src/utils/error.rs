use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoScanError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Scan of {domain} failed: {message}")]
    ScanFailure { domain: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },
}

/// Coarse grouping used for logging and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Scan,
    Output,
    Configuration,
}

impl SeoScanError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::ScanFailure { .. } | Self::Http(_) => ErrorCategory::Scan,
            Self::Csv(_) | Self::Io(_) | Self::Serialization(_) => ErrorCategory::Output,
            Self::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// 依錯誤類別決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 2,
            ErrorCategory::Output | ErrorCategory::Scan => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => format!("Invalid domain list: {}", message),
            Self::ScanFailure { domain, .. } => format!("Could not scan {}", domain),
            Self::Http(e) => format!("Network request failed: {}", e),
            Self::Csv(_) | Self::Io(_) | Self::Serialization(_) => {
                format!("Could not write the scan report: {}", self)
            }
            Self::Config { field, message } => {
                format!("Invalid configuration value for {}: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Pass a comma-separated list of domains without spaces, e.g. whitehouse.gov,gsa.gov"
            }
            ErrorCategory::Scan => "Check that the domain resolves and serves HTTPS",
            ErrorCategory::Output => {
                "Check that the output path is writable or choose another with --output-path"
            }
            ErrorCategory::Configuration => "Review the command-line flags and the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SeoScanError>;
