use crate::domain::model::{PageReport, ScanResult, Signals};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "scan_output.csv";

/// Signal columns, in output order. Page columns follow, then `Error`.
pub const SIGNAL_COLUMNS: [&str; 15] = [
    "Platforms",
    "Sitemap status code",
    "Sitemap final url",
    "Sitemap items",
    "PDFs in sitemap",
    "Sitemaps from index",
    "Robots.txt",
    "Crawl delay",
    "Sitemaps from robots",
    "Total URLs",
    "Est time to index",
    "Main tags found",
    "Search found",
    "Pages",
    "Warnings",
];

const LIST_SEPARATOR: &str = "; ";

/// Flattened CSV projection of one [`ScanResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    cells: Vec<String>,
}

impl ReportRow {
    pub fn header(pages: &[String]) -> Vec<String> {
        let mut header = vec!["Domain".to_string()];
        header.extend(SIGNAL_COLUMNS.iter().map(|c| c.to_string()));
        header.extend(pages.iter().cloned());
        header.push("Error".to_string());
        header
    }

    pub fn from_result(result: &ScanResult, pages: &[String]) -> Result<Self> {
        let mut cells = Vec::with_capacity(SIGNAL_COLUMNS.len() + pages.len() + 2);
        cells.push(result.domain.clone());

        match result.signals() {
            Some(signals) => {
                cells.extend(signal_cells(signals));
                for page in pages {
                    cells.push(match signals.page(page) {
                        Some(report) => page_cell(report)?,
                        None => String::new(),
                    });
                }
            }
            None => {
                // 失敗的網域：所有訊號欄位留空
                cells.extend(std::iter::repeat_n(
                    String::new(),
                    SIGNAL_COLUMNS.len() + pages.len(),
                ));
            }
        }

        cells.push(result.error().unwrap_or_default().to_string());
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

fn signal_cells(signals: &Signals) -> Vec<String> {
    let platforms = if signals.platforms.is_empty() {
        "Unknown".to_string()
    } else {
        signals.platforms.join(LIST_SEPARATOR)
    };
    let est_time = signals
        .est_hours_to_index
        .map(|hours| format!("{:.2}", hours))
        .unwrap_or_else(|| "Unknown".to_string());

    vec![
        platforms,
        signals.sitemap_status.clone().unwrap_or_default(),
        signals.sitemap_final_url.clone().unwrap_or_default(),
        signals.sitemap_items.to_string(),
        signals.sitemap_pdfs.to_string(),
        signals.sitemaps_from_index.join(LIST_SEPARATOR),
        signals.robots_txt.clone().unwrap_or_default(),
        signals.crawl_delay.clone().unwrap_or_default(),
        signals.sitemaps_from_robots.join(LIST_SEPARATOR),
        signals.total_urls.to_string(),
        est_time,
        signals.main_tag_found.to_string(),
        signals.search_found.to_string(),
        signals.pages_found.to_string(),
        signals.warnings.join(LIST_SEPARATOR),
    ]
}

fn page_cell(report: &PageReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Serializes scan results to CSV and hands them to storage in a single write.
pub struct ReportWriter<St: Storage> {
    storage: St,
    pages: Vec<String>,
}

impl<St: Storage> ReportWriter<St> {
    pub fn new(storage: St, pages: Vec<String>) -> Self {
        Self { storage, pages }
    }

    pub fn render(&self, results: &[ScanResult]) -> Result<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(ReportRow::header(&self.pages))?;

        for result in results {
            let row = ReportRow::from_result(result, &self.pages)?;
            wtr.write_record(row.cells())?;
        }

        wtr.into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }

    pub async fn write(&self, results: &[ScanResult], output_path: &str) -> Result<PathBuf> {
        let data = self.render(results)?;
        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            results.len(),
            data.len(),
            output_path
        );
        self.storage.write_file(output_path, &data).await?;
        Ok(PathBuf::from(output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn pages() -> Vec<String> {
        vec!["/".to_string(), "/privacy".to_string()]
    }

    fn sample_signals() -> Signals {
        Signals {
            platforms: vec!["WordPress 6.4".to_string()],
            sitemap_status: Some("200".to_string()),
            sitemap_final_url: Some("https://gsa.gov/sitemap.xml".to_string()),
            sitemap_items: 3,
            sitemap_pdfs: 1,
            robots_txt: Some("OK".to_string()),
            crawl_delay: Some("10".to_string()),
            sitemaps_from_robots: vec![
                "https://gsa.gov/a.xml".to_string(),
                "https://gsa.gov/b.xml".to_string(),
            ],
            total_urls: 360,
            est_hours_to_index: Some(1.0),
            main_tag_found: true,
            pages_found: 1,
            pages: vec![(
                "/".to_string(),
                PageReport::Found {
                    title: Some("GSA".to_string()),
                    description: None,
                    date: None,
                },
            )],
            ..Default::default()
        }
    }

    #[test]
    fn test_header_layout() {
        let header = ReportRow::header(&pages());
        assert_eq!(header.first().unwrap(), "Domain");
        assert_eq!(header[1], "Platforms");
        assert_eq!(header[15], "Warnings");
        assert_eq!(header[16], "/");
        assert_eq!(header[17], "/privacy");
        assert_eq!(header.last().unwrap(), "Error");
        assert_eq!(header.len(), SIGNAL_COLUMNS.len() + 4);
    }

    #[test]
    fn test_success_row_renders_signals() {
        let result = ScanResult::success("gsa.gov", sample_signals());
        let row = ReportRow::from_result(&result, &pages()).unwrap();
        let cells = row.cells();

        assert_eq!(cells[0], "gsa.gov");
        assert_eq!(cells[1], "WordPress 6.4");
        assert_eq!(cells[9], "https://gsa.gov/a.xml; https://gsa.gov/b.xml");
        assert_eq!(cells[10], "360");
        assert_eq!(cells[11], "1.00");
        assert_eq!(cells[12], "true");
        assert_eq!(cells[13], "false");
        assert!(cells[16].contains("\"title\":\"GSA\""));
        // /privacy was not reported
        assert_eq!(cells[17], "");
        assert_eq!(cells.last().unwrap(), "");
    }

    #[test]
    fn test_failed_row_has_empty_signals_and_error() {
        let result = ScanResult::failed("down.example", "connection refused");
        let row = ReportRow::from_result(&result, &pages()).unwrap();
        let cells = row.cells();

        assert_eq!(cells.len(), ReportRow::header(&pages()).len());
        assert_eq!(cells[0], "down.example");
        assert!(cells[1..cells.len() - 1].iter().all(String::is_empty));
        assert_eq!(cells.last().unwrap(), "connection refused");
    }

    #[test]
    fn test_unknown_defaults() {
        let result = ScanResult::success("gsa.gov", Signals::default());
        let row = ReportRow::from_result(&result, &pages()).unwrap();
        assert_eq!(row.cells()[1], "Unknown");
        assert_eq!(row.cells()[11], "Unknown");
    }

    #[tokio::test]
    async fn test_write_one_row_per_result_in_order() {
        let storage = MockStorage::default();
        let writer = ReportWriter::new(storage.clone(), pages());
        let results = vec![
            ScanResult::success("whitehouse.gov", sample_signals()),
            ScanResult::failed("gsa.gov", "timed out"),
        ];

        let path = writer.write(&results, "scan_output.csv").await.unwrap();
        assert_eq!(path, PathBuf::from("scan_output.csv"));

        let data = storage.get_file("scan_output.csv").await.unwrap();
        let mut rdr = csv::Reader::from_reader(data.as_slice());
        let domains: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap().get(0).unwrap().to_string())
            .collect();
        assert_eq!(domains, vec!["whitehouse.gov", "gsa.gov"]);
    }
}
