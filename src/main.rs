use clap::Parser;
use seo_scan::utils::{logger, validation::Validate};
use seo_scan::{CliConfig, HttpScanner, LocalStorage, ScanEngine, SeoScanError};

fn exit_with(e: &SeoScanError) -> ! {
    tracing::error!(
        "❌ Scan failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting seo-scan");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if config.monitor {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let scanner = match HttpScanner::new(&settings) {
        Ok(scanner) => scanner,
        Err(e) => exit_with(&e),
    };
    let engine = ScanEngine::from_config(
        scanner,
        LocalStorage::new("."),
        &settings,
        config.monitor,
    );

    match engine.run(&config.domains).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Scan completed: {} row(s), {} failed domain(s)",
                summary.rows_written,
                summary.failures
            );
            println!("✅ Your scan output csv has been written.");
            println!("📁 Output saved to: {}", summary.output_path.display());
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
