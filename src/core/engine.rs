use crate::core::input::parse_domain_list;
use crate::core::orchestrator::ScanOrchestrator;
use crate::core::report::ReportWriter;
use crate::domain::model::ScanSummary;
use crate::domain::ports::{ConfigProvider, Scanner, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::ResourceMonitor;

pub struct ScanEngine<S: Scanner, St: Storage> {
    orchestrator: ScanOrchestrator<S>,
    writer: ReportWriter<St>,
    output_path: String,
    monitor: ResourceMonitor,
}

impl<S: Scanner, St: Storage> ScanEngine<S, St> {
    pub fn new(scanner: S, writer: ReportWriter<St>, output_path: impl Into<String>) -> Self {
        Self::new_with_monitoring(scanner, writer, output_path, false)
    }

    /// Report columns and output path come from `config`.
    pub fn from_config<C: ConfigProvider>(
        scanner: S,
        storage: St,
        config: &C,
        enable_monitoring: bool,
    ) -> Self {
        let writer = ReportWriter::new(storage, config.pages().to_vec());
        Self::new_with_monitoring(scanner, writer, config.output_path(), enable_monitoring)
    }

    pub fn new_with_monitoring(
        scanner: S,
        writer: ReportWriter<St>,
        output_path: impl Into<String>,
        enable_monitoring: bool,
    ) -> Self {
        Self {
            orchestrator: ScanOrchestrator::new(scanner),
            writer,
            output_path: output_path.into(),
            monitor: ResourceMonitor::new(enable_monitoring),
        }
    }

    /// Parse, scan every domain, then write the report once.
    ///
    /// An invalid domain list fails before any request is made or any file
    /// is touched.
    pub async fn run(&self, raw_domains: &str) -> Result<ScanSummary> {
        let domains = parse_domain_list(raw_domains)?;
        tracing::info!("Starting scan of {} domain(s)", domains.len());

        let results = self.orchestrator.scan_all(&domains).await;
        let failures = results.iter().filter(|r| r.is_failure()).count();
        tracing::info!(
            "Scanned {} domain(s), {} failed",
            results.len(),
            failures
        );
        self.monitor.log_phase("Scan");

        let output_path = self.writer.write(&results, &self.output_path).await?;
        self.monitor.log_phase("Report");

        Ok(ScanSummary {
            output_path,
            rows_written: results.len(),
            failures,
        })
    }
}
