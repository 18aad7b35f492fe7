use scraper::{ElementRef, Html, Selector};

const DATE_SELECTORS: [&str; 3] = [
    "meta[name='article:published_time'], meta[property='article:published_time']",
    "meta[name='article:modified_time'], meta[property='article:modified_time']",
    "meta[name='DC.Date']",
];

/// On-page facts pulled from one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAnalysis {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub generator: Option<String>,
    pub has_main: bool,
    pub has_search: bool,
}

pub fn analyze_page(html: &str) -> PageAnalysis {
    let document = Html::parse_document(html);

    let title = select_first(&document, "title")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty());
    let description = meta_content(&document, "meta[name='description']");
    let date = DATE_SELECTORS
        .iter()
        .find_map(|css| meta_content(&document, css));
    let generator = meta_content(&document, "meta[name='generator']");

    let has_main = select_first(&document, "main, [role='main']").is_some();
    let has_search =
        select_first(&document, "input[type='search'], [class*='search']").is_some();

    PageAnalysis {
        title,
        description,
        date,
        generator,
        has_main,
        has_search,
    }
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn meta_content(document: &Html, css: &str) -> Option<String> {
    select_first(document, css)
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
}
