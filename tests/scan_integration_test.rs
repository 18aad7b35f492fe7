use httpmock::prelude::*;
use seo_scan::{HttpScanner, LocalStorage, ScanEngine, ScanSettings, Scanner, SeoScanError};
use std::collections::HashMap;
use tempfile::TempDir;

fn test_settings(output_path: &str) -> ScanSettings {
    ScanSettings {
        output_path: output_path.to_string(),
        timeout_seconds: 2,
        scheme: "http".to_string(),
        ..Default::default()
    }
}

fn engine_for(
    temp_dir: &TempDir,
    settings: &ScanSettings,
) -> ScanEngine<HttpScanner, LocalStorage> {
    let scanner = HttpScanner::new(settings).unwrap();
    ScanEngine::from_config(scanner, LocalStorage::new(temp_dir.path()), settings, false)
}

fn read_rows(path: &std::path::Path) -> Vec<HashMap<String, String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    rdr.records()
        .map(|record| {
            let record = record.unwrap();
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

fn mock_full_site(server: &MockServer) {
    let extra_sitemap = server.url("/sitemap-news.xml");

    server.mock(|when, then| {
        when.method(GET).path("/sitemap.xml");
        then.status(200).header("Content-Type", "application/xml").body(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://gsa.gov/</loc></url>
  <url><loc>https://gsa.gov/about</loc></url>
  <url><loc>https://gsa.gov/forms/report.pdf</loc></url>
</urlset>"#,
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/robots.txt");
        then.status(200).body(format!(
            "User-agent: *\nCrawl-delay: 3600\nSitemap: {}\n",
            extra_sitemap
        ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/sitemap-news.xml");
        then.status(200).body(
            r#"<urlset><url><loc>https://gsa.gov/news/1</loc></url><url><loc>https://gsa.gov/news/2</loc></url></urlset>"#,
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("X-Powered-By", "Express")
            .body(
                r#"<html><head><title>GSA</title>
<meta name="description" content="Government services">
<meta name="generator" content="Drupal 10"></head>
<body><main><input type="search"></main></body></html>"#,
            );
    });
    server.mock(|when, then| {
        when.method(GET).path("/privacy");
        then.status(200).body(
            r#"<html><head><title>GSA</title>
<meta name="description" content="Privacy policy">
<meta name="DC.Date" content="2023-05-01"></head><body></body></html>"#,
        );
    });
}

#[tokio::test]
async fn test_full_site_signals() {
    let server = MockServer::start();
    mock_full_site(&server);

    let settings = test_settings("scan_output.csv");
    let scanner = HttpScanner::new(&settings).unwrap();
    let signals = scanner.scan(&server.address().to_string()).await.unwrap();

    assert_eq!(signals.sitemap_status.as_deref(), Some("200"));
    assert_eq!(signals.sitemap_items, 3);
    assert_eq!(signals.sitemap_pdfs, 1);
    assert_eq!(signals.robots_txt.as_deref(), Some("OK"));
    assert_eq!(signals.crawl_delay.as_deref(), Some("3600"));
    assert_eq!(signals.total_urls, 5);
    assert_eq!(signals.est_hours_to_index, Some(5.0));
    assert!(signals.main_tag_found);
    assert!(signals.search_found);
    assert_eq!(signals.pages_found, 2);
    assert!(signals.platforms.contains(&"Express".to_string()));
    assert!(signals.platforms.contains(&"Drupal 10".to_string()));
    assert_eq!(signals.warnings, vec!["Duplicate titles found"]);
}

#[tokio::test]
async fn test_end_to_end_with_partial_failure() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    mock_full_site(&server);

    let dead = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_address = dead.local_addr().unwrap().to_string();
    drop(dead);

    let live_address = server.address().to_string();
    let settings = test_settings("scan_output.csv");
    let engine = engine_for(&temp_dir, &settings);

    let summary = engine
        .run(&format!("{},{}", live_address, dead_address))
        .await
        .unwrap();

    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.failures, 1);

    let rows = read_rows(&temp_dir.path().join("scan_output.csv"));
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["Domain"], live_address);
    assert_eq!(rows[0]["Total URLs"], "5");
    assert_eq!(rows[0]["Est time to index"], "5.00");
    assert_eq!(rows[0]["Robots.txt"], "OK");
    assert!(rows[0]["/privacy"].contains("2023-05-01"));
    assert_eq!(rows[0]["Error"], "");

    assert_eq!(rows[1]["Domain"], dead_address);
    assert_eq!(rows[1]["Total URLs"], "");
    assert_eq!(rows[1]["Platforms"], "");
    assert!(!rows[1]["Error"].is_empty());
}

#[tokio::test]
async fn test_empty_input_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let settings = test_settings("scan_output.csv");
    let engine = engine_for(&temp_dir, &settings);

    let err = engine.run("").await.unwrap_err();

    assert!(matches!(err, SeoScanError::InvalidInput { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!temp_dir.path().join("scan_output.csv").exists());
}

#[tokio::test]
async fn test_rerun_overwrites_previous_report() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    mock_full_site(&server);
    let address = server.address().to_string();

    let settings = test_settings("scan_output.csv");
    let engine = engine_for(&temp_dir, &settings);

    engine.run(&format!("{},{}", address, address)).await.unwrap();
    assert_eq!(read_rows(&temp_dir.path().join("scan_output.csv")).len(), 2);

    engine.run(&address).await.unwrap();
    let rows = read_rows(&temp_dir.path().join("scan_output.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Domain"], address);
}
