pub mod engine;
pub mod input;
pub mod orchestrator;
pub mod report;

pub use crate::domain::model::{DomainList, ScanResult, ScanSummary, Signals};
pub use crate::domain::ports::{ConfigProvider, Scanner, Storage};
pub use crate::utils::error::Result;
