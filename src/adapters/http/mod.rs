pub mod page;
pub mod robots;
pub mod sitemap;

use crate::domain::model::{PageReport, Signals};
use crate::domain::ports::{ConfigProvider, Scanner};
use crate::utils::error::{Result, SeoScanError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashSet;
use url::Url;

use self::page::analyze_page;
use self::robots::{estimate_hours_to_index, parse_robots};
use self::sitemap::parse_sitemap;

const ROOT_PAGE: &str = "/";

struct Fetched {
    status: StatusCode,
    final_url: String,
    powered_by: Option<String>,
    server: Option<String>,
    body: Option<String>,
}

/// Scans a live site over HTTP(S).
pub struct HttpScanner {
    client: Client,
    scheme: String,
    pages: Vec<String>,
}

impl HttpScanner {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| {
                SeoScanError::config("scanner", format!("cannot build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            scheme: config.scheme().to_string(),
            pages: config.pages().to_vec(),
        })
    }

    /// `{scheme}://{domain}` without a trailing slash.
    fn base_url(&self, domain: &str) -> Result<String> {
        let base = format!("{}://{}", self.scheme, domain);
        Url::parse(&base).map_err(|e| SeoScanError::ScanFailure {
            domain: domain.to_string(),
            message: format!("invalid domain: {}", e),
        })?;
        Ok(base)
    }

    /// Single attempt. The body is only read for 200 responses.
    async fn fetch(&self, url: &str) -> Result<Fetched> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let final_url = response.url().to_string();
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let powered_by = header("x-powered-by");
        let server = header("server");
        let body = if status == StatusCode::OK {
            Some(response.text().await?)
        } else {
            None
        };

        tracing::debug!("{} -> {}", url, status);
        Ok(Fetched {
            status,
            final_url,
            powered_by,
            server,
            body,
        })
    }

    async fn scan_sitemap(&self, base: &str, signals: &mut Signals) {
        let url = format!("{}/sitemap.xml", base);
        let fetched = match self.fetch(&url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                let message = format!("Could not get data from {}: {}", url, e);
                tracing::warn!("{}", message);
                signals.sitemap_status = Some(message);
                return;
            }
        };

        signals.sitemap_status = Some(fetched.status.as_u16().to_string());
        signals.sitemap_final_url = Some(fetched.final_url);

        if let Some(body) = fetched.body {
            let document = parse_sitemap(&body);
            signals.sitemap_items = document.url_count;
            signals.sitemap_pdfs = document.pdf_count;
            signals.sitemaps_from_index = document.child_sitemaps;
        }
    }

    async fn scan_robots(&self, base: &str, signals: &mut Signals) {
        let url = format!("{}/robots.txt", base);
        match self.fetch(&url).await {
            Ok(Fetched {
                body: Some(body), ..
            }) => {
                let directives = parse_robots(&body);
                signals.robots_txt = Some("OK".to_string());
                signals.crawl_delay = directives.crawl_delay;
                signals.sitemaps_from_robots = directives.sitemaps;
            }
            Ok(fetched) => {
                signals.robots_txt = Some(fetched.status.as_u16().to_string());
            }
            Err(e) => {
                tracing::warn!("Error reading {}: {}", url, e);
            }
        }
    }

    /// `<url>` entries in every referenced sitemap other than the primary one.
    async fn count_additional_urls(&self, signals: &Signals) -> usize {
        let mut seen: HashSet<&str> = HashSet::new();
        if let Some(primary) = signals.sitemap_final_url.as_deref() {
            seen.insert(primary);
        }

        let mut additional = 0;
        let locations = signals
            .sitemaps_from_index
            .iter()
            .chain(signals.sitemaps_from_robots.iter());
        for loc in locations {
            if !seen.insert(loc.as_str()) {
                continue;
            }
            match self.fetch(loc).await {
                Ok(Fetched {
                    body: Some(body), ..
                }) => additional += parse_sitemap(&body).url_count,
                Ok(fetched) => tracing::debug!("Skipping {} ({})", loc, fetched.status),
                Err(e) => tracing::warn!("Could not read sitemap {}: {}", loc, e),
            }
        }
        additional
    }

    async fn scan_pages(&self, domain: &str, base: &str, signals: &mut Signals) -> Result<()> {
        let mut titles = Vec::new();
        let mut descriptions = Vec::new();
        let mut platforms = Vec::new();

        for path in &self.pages {
            let url = format!("{}{}", base, path);
            let fetched = match self.fetch(&url).await {
                Ok(fetched) => fetched,
                Err(e) if path == ROOT_PAGE => {
                    return Err(SeoScanError::ScanFailure {
                        domain: domain.to_string(),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    signals.pages.push((
                        path.clone(),
                        PageReport::Unreachable {
                            message: format!("Could not get data from {}: {}", url, e),
                        },
                    ));
                    continue;
                }
            };

            platforms.extend(fetched.powered_by);
            platforms.extend(fetched.server);

            let Some(body) = fetched.body else {
                signals.pages.push((
                    path.clone(),
                    PageReport::HttpStatus {
                        status: fetched.status.as_u16(),
                    },
                ));
                continue;
            };

            let page = analyze_page(&body);
            signals.pages_found += 1;
            signals.main_tag_found |= page.has_main;
            signals.search_found |= page.has_search;
            platforms.extend(page.generator);
            titles.extend(page.title.clone());
            descriptions.extend(page.description.clone());

            signals.pages.push((
                path.clone(),
                PageReport::Found {
                    title: page.title,
                    description: page.description,
                    date: page.date,
                },
            ));
        }

        // 平台資訊去重，保留首次出現順序
        let mut seen = HashSet::new();
        platforms.retain(|p| seen.insert(p.clone()));
        signals.platforms = platforms;

        if has_duplicates(&titles) {
            signals.warnings.push("Duplicate titles found".to_string());
        }
        if has_duplicates(&descriptions) {
            signals
                .warnings
                .push("Duplicate descriptions found".to_string());
        }

        Ok(())
    }
}

fn has_duplicates(values: &[String]) -> bool {
    let unique: HashSet<&String> = values.iter().collect();
    unique.len() != values.len()
}

#[async_trait]
impl Scanner for HttpScanner {
    async fn scan(&self, domain: &str) -> Result<Signals> {
        let base = self.base_url(domain)?;
        let mut signals = Signals::default();

        tracing::debug!("Sitemap scan for {}", base);
        self.scan_sitemap(&base, &mut signals).await;
        self.scan_robots(&base, &mut signals).await;

        let additional = self.count_additional_urls(&signals).await;
        signals.total_urls = signals.sitemap_items + additional;
        signals.est_hours_to_index =
            estimate_hours_to_index(signals.total_urls, signals.crawl_delay.as_deref());

        tracing::debug!("Page scan for {}", base);
        self.scan_pages(domain, &base, &mut signals).await?;

        Ok(signals)
    }
}
