use clap::Parser;
use greet_ages::utils::{logger, validation::Validate};
use greet_ages::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if cli.json_logs_enabled(&config) {
        logger::init_json_logger(cli.verbose_enabled(&config));
    } else {
        logger::init_cli_logger(cli.verbose_enabled(&config));
    }

    tracing::info!("Starting greet-ages");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let pipeline = RosterPipeline::new(LocalStorage::default(), config);
    let engine = RosterEngine::new(pipeline);

    if let Err(e) = engine.run() {
        tracing::error!(
            "Roster run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
