use anyhow::Context;
use clap::Parser;
use roman_calc::utils::error::ErrorCategory;
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{CalcEngine, CliConfig, StdConsole, TomlConfig};

fn load_config(path: Option<&str>) -> anyhow::Result<TomlConfig> {
    match path {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path)),
        None => Ok(TomlConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 載入配置
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(2);
        }
    };

    // 初始化日誌
    match config.log_format() {
        "json" => logger::init_json_logger(args.verbose, config.log_level()),
        _ => logger::init_cli_logger(args.verbose, config.log_level()),
    }

    tracing::debug!("CLI args: {:?}", args);
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut engine = CalcEngine::new(StdConsole::new(), config);

    if let Err(e) = engine.run() {
        if e.category() == ErrorCategory::System {
            tracing::error!("❌ Console failure: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
        }
        tracing::debug!("Exiting with code {} (Category: {:?})", e.exit_code(), e.category());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
