use clap::Parser;
use events_etl::config::toml_config::TomlConfig;
use events_etl::core::Pipeline;
use events_etl::utils::{logger, validation::Validate};
use events_etl::{CliConfig, EtlEngine, ExportPipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting events-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // A TOML file replaces the command-line settings wholesale.
    if let Some(config_path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", config_path);
        let toml_config = match TomlConfig::from_file(&config_path) {
            Ok(toml_config) => toml_config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                std::process::exit(1);
            }
        };

        if let Err(e) = toml_config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        let show_table = toml_config.show_table();
        let storage = LocalStorage::new(".");
        let pipeline = ExportPipeline::new(storage, toml_config);
        run(EtlEngine::new(pipeline, show_table)).await;
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let show_table = !config.no_table;
    let storage = LocalStorage::new(".");
    let pipeline = ExportPipeline::new(storage, config);
    run(EtlEngine::new(pipeline, show_table)).await;

    Ok(())
}

async fn run<P: Pipeline>(engine: EtlEngine<P>) {
    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Export completed successfully");
            println!("✅ Export completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
