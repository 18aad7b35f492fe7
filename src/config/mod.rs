#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::report::DEFAULT_OUTPUT_PATH;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 4;
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_USER_AGENT: &str = concat!("seo-scan/", env!("CARGO_PKG_VERSION"));

pub fn default_pages() -> Vec<String> {
    vec!["/".to_string(), "/privacy".to_string()]
}

/// Effective settings after merging flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub output_path: String,
    pub timeout_seconds: u64,
    pub pages: Vec<String>,
    pub scheme: String,
    pub user_agent: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            pages: default_pages(),
            scheme: DEFAULT_SCHEME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScanSettings {
    /// Fills every unset field from `file`, then from the defaults.
    pub fn merge(overrides: SettingsOverrides, file: Option<TomlConfig>) -> Self {
        let defaults = Self::default();
        let file = file.unwrap_or_default();

        Self {
            output_path: overrides
                .output_path
                .or(file.output.path)
                .unwrap_or(defaults.output_path),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.scanner.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            pages: overrides
                .pages
                .or(file.scanner.pages)
                .unwrap_or(defaults.pages),
            scheme: overrides
                .scheme
                .or(file.scanner.scheme)
                .unwrap_or(defaults.scheme),
            user_agent: overrides
                .user_agent
                .or(file.scanner.user_agent)
                .unwrap_or(defaults.user_agent),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub output_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub pages: Option<Vec<String>>,
    pub scheme: Option<String>,
    pub user_agent: Option<String>,
}

impl Validate for ScanSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output.path", &self.output_path)?;
        validation::validate_range("scanner.timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_page_paths("scanner.pages", &self.pages)?;
        validation::validate_scheme("scanner.scheme", &self.scheme)?;
        validation::validate_header_value("scanner.user_agent", &self.user_agent)?;
        Ok(())
    }
}

impl ConfigProvider for ScanSettings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn pages(&self) -> &[String] {
        &self.pages
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
