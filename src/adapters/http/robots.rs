use regex::Regex;
use std::sync::LazyLock;

static CRAWL_DELAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*crawl-delay\s*:\s*(\S+)").unwrap());
static SITEMAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*sitemap\s*:\s*(\S+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsDirectives {
    pub crawl_delay: Option<String>,
    pub sitemaps: Vec<String>,
}

/// Extracts the first `Crawl-delay` and every `Sitemap` line.
///
/// Per-agent delays are not distinguished; later declarations are ignored.
pub fn parse_robots(body: &str) -> RobotsDirectives {
    let crawl_delay = CRAWL_DELAY
        .captures(body)
        .map(|caps| caps[1].to_string());
    let sitemaps = SITEMAP
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect();

    RobotsDirectives {
        crawl_delay,
        sitemaps,
    }
}

/// Hours needed to crawl `total_urls` at one request per `crawl_delay` seconds.
pub fn estimate_hours_to_index(total_urls: usize, crawl_delay: Option<&str>) -> Option<f64> {
    let delay: f64 = crawl_delay?.parse().ok()?;
    if !delay.is_finite() || delay < 0.0 {
        return None;
    }
    Some(total_urls as f64 * delay / 3600.0)
}
