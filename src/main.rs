use clap::Parser;
use revenue_report::core::ConfigProvider;
use revenue_report::utils::{logger, validation::Validate};
use revenue_report::{CliConfig, LocalStorage, ReportEngine, ReportPipeline, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting revenue-report CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            let config = TomlConfig::from_file(&path)?;
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C>(config: C) -> Result<(), Box<dyn std::error::Error>>
where
    C: ConfigProvider + Validate + 'static,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Report pipeline completed");
            println!("✅ Report generated successfully!");
            println!("📁 Saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Report pipeline failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
