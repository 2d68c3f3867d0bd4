use clap::Parser;
use london_price_lookup::app;
use london_price_lookup::utils::logger;
use london_price_lookup::{CliConfig, LookupError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting london-price-lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("Using configuration file {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => app::run(&config).await,
                Err(e) => Err(e),
            }
        }
        None => app::run(&cli).await,
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn report(e: &LookupError) {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
