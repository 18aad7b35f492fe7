use crate::domain::model::{DomainList, ScanResult};
use crate::domain::ports::Scanner;

/// Runs the scanner over every domain, one at a time, in input order.
pub struct ScanOrchestrator<S: Scanner> {
    scanner: S,
}

impl<S: Scanner> ScanOrchestrator<S> {
    pub fn new(scanner: S) -> Self {
        Self { scanner }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub async fn scan_domain(&self, domain: &str) -> ScanResult {
        match self.scanner.scan(domain).await {
            Ok(signals) => {
                tracing::info!(
                    "✅ {} scanned: {} URLs, {} warnings",
                    domain,
                    signals.total_urls,
                    signals.warnings.len()
                );
                ScanResult::success(domain, signals)
            }
            Err(e) => {
                tracing::warn!("⚠️ {} scan failed: {}", domain, e);
                ScanResult::failed(domain, e.to_string())
            }
        }
    }

    pub async fn scan_all(&self, domains: &DomainList) -> Vec<ScanResult> {
        let mut results = Vec::with_capacity(domains.len());
        for (index, domain) in domains.iter().enumerate() {
            tracing::info!("Scanning {} ({}/{})", domain, index + 1, domains.len());
            results.push(self.scan_domain(domain).await);
        }
        results
    }
}
