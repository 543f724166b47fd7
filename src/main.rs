use clap::Parser;
use zipscope::utils::{logger, validation::Validate};
use zipscope::{CliConfig, Dashboard, DashboardError, SearchController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zipscope");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let zip = config.zip.clone();
    let controller = SearchController::new(config);
    let mut dashboard = Dashboard::new(controller);

    let outcome = match zip {
        Some(zip) => dashboard.run_once(&zip).await,
        None => dashboard.run_interactive().await,
    };

    if let Err(e) = outcome {
        tracing::error!("Search failed: {}", e);
        eprintln!("❌ {}", e);
        let exit_code = match e {
            DashboardError::Validation { .. } => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
