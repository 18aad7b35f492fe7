use crate::config::{ScanSettings, SettingsOverrides, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "seo-scan")]
#[command(about = "Check domains for basic SEO and search-indexing signals")]
pub struct CliConfig {
    /// Comma-separated domains without scheme or trailing slash, e.g. whitehouse.gov,gsa.gov
    pub domains: String,

    #[arg(long, help = "CSV report path [default: scan_output.csv]")]
    pub output_path: Option<String>,

    #[arg(long, help = "TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds [default: 4]")]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_delimiter = ',', help = "Page paths to inspect [default: /,/privacy]")]
    pub pages: Option<Vec<String>>,

    #[arg(long, help = "URL scheme used to reach each domain [default: https]")]
    pub scheme: Option<String>,

    #[arg(long, help = "User-Agent header sent with every request")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            output_path: self.output_path.clone(),
            timeout_seconds: self.timeout_secs,
            pages: self.pages.clone(),
            scheme: self.scheme.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Loads `--config` when given and merges it under the explicit flags.
    pub fn resolve_settings(&self) -> Result<ScanSettings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(ScanSettings::merge(self.overrides(), file))
    }
}
