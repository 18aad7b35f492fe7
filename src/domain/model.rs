use serde::Serialize;

/// Ordered list of domains from the command line. Never deduplicated or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainList {
    domains: Vec<String>,
}

impl DomainList {
    pub(crate) fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.domains
    }
}

/// Outcome of fetching one configured page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageReport {
    Found {
        title: Option<String>,
        description: Option<String>,
        date: Option<String>,
    },
    /// Any response other than 200, e.g. 404, 403 or 500.
    HttpStatus {
        status: u16,
    },
    Unreachable {
        message: String,
    },
}

/// SEO signals collected for one domain. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signals {
    pub platforms: Vec<String>,
    /// Status code of `/sitemap.xml`, or the fetch error text.
    pub sitemap_status: Option<String>,
    pub sitemap_final_url: Option<String>,
    pub sitemap_items: usize,
    pub sitemap_pdfs: usize,
    pub sitemaps_from_index: Vec<String>,
    /// `OK` or the status code of `/robots.txt`.
    pub robots_txt: Option<String>,
    pub crawl_delay: Option<String>,
    pub sitemaps_from_robots: Vec<String>,
    pub total_urls: usize,
    pub est_hours_to_index: Option<f64>,
    pub main_tag_found: bool,
    pub search_found: bool,
    pub pages_found: usize,
    pub warnings: Vec<String>,
    /// Keyed by page path, in configured order.
    pub pages: Vec<(String, PageReport)>,
}

impl Signals {
    pub fn page(&self, path: &str) -> Option<&PageReport> {
        self.pages
            .iter()
            .find(|(page, _)| page == path)
            .map(|(_, report)| report)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Scanned(Signals),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub domain: String,
    pub outcome: ScanOutcome,
}

impl ScanResult {
    pub fn success(domain: impl Into<String>, signals: Signals) -> Self {
        Self {
            domain: domain.into(),
            outcome: ScanOutcome::Scanned(signals),
        }
    }

    pub fn failed(domain: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            outcome: ScanOutcome::Failed(error.into()),
        }
    }

    pub fn signals(&self) -> Option<&Signals> {
        match &self.outcome {
            ScanOutcome::Scanned(signals) => Some(signals),
            ScanOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ScanOutcome::Scanned(_) => None,
            ScanOutcome::Failed(message) => Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Failed(_))
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub output_path: std::path::PathBuf,
    pub rows_written: usize,
    pub failures: usize,
}
