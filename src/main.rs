use clap::Parser;
use services_csv::utils::{logger, validation::Validate};
use services_csv::{CatalogPipeline, CliConfig, ConvertEngine, ConvertError, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok((rows_written, output_path)) => {
            println!("Written {} rows to {}", rows_written, output_path);
        }
        Err(e) => {
            if e.is_usage() {
                eprintln!("{}", e.user_friendly_message());
            } else {
                tracing::error!("❌ Conversion failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(usize, String), ConvertError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    // 相對路徑一律以啟動時的工作目錄為準
    let storage = LocalStorage::new(std::env::current_dir()?);
    let pipeline = CatalogPipeline::new(storage, config);

    let summary = ConvertEngine::new(pipeline).run()?;
    Ok((summary.rows_written, summary.output_path))
}
