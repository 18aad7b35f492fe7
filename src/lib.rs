pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ScanSettings, TomlConfig};

pub use adapters::{http::HttpScanner, storage::LocalStorage};
pub use self::core::{
    engine::ScanEngine, input::parse_domain_list, orchestrator::ScanOrchestrator,
    report::ReportWriter,
};
pub use domain::model::{DomainList, PageReport, ScanResult, ScanSummary, Signals};
pub use domain::ports::{ConfigProvider, Scanner, Storage};
pub use utils::error::{Result, SeoScanError};
