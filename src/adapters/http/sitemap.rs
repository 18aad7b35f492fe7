use scraper::{Html, Selector};

/// What a single sitemap document contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    pub url_count: usize,
    pub pdf_count: usize,
    /// `<loc>` of each `<sitemap>` when the document is a sitemap index.
    pub child_sitemaps: Vec<String>,
}

/// Parses sitemap XML leniently; malformed markup yields whatever entries
/// could be recovered.
pub fn parse_sitemap(body: &str) -> SitemapDocument {
    let document = Html::parse_document(body);
    let url_selector = Selector::parse("url").unwrap();
    let index_selector = Selector::parse("sitemapindex").unwrap();
    let child_selector = Selector::parse("sitemap > loc").unwrap();

    let mut url_count = 0;
    let mut pdf_count = 0;
    for url in document.select(&url_selector) {
        url_count += 1;
        if url.text().any(|text| text.contains(".pdf")) {
            pdf_count += 1;
        }
    }

    let child_sitemaps = if document.select(&index_selector).next().is_some() {
        document
            .select(&child_selector)
            .map(|loc| loc.text().collect::<String>().trim().to_string())
            .filter(|loc| !loc.is_empty())
            .collect()
    } else {
        Vec::new()
    };

    SitemapDocument {
        url_count,
        pdf_count,
        child_sitemaps,
    }
}
