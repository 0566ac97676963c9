use clap::Parser;
use sample_middleware::utils::logger;
use sample_middleware::{CliArgs, MiddlewareError, ServiceManager};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if config.enable_logging {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("🚀 Starting {}", config.service_name);
    tracing::debug!("Resolved config: {:?}", config);

    let mut service = ServiceManager::new(config);

    match service.initialize() {
        Ok(true) => {}
        Ok(false) => {
            anyhow::bail!("initialization of {} reported failure", service.config().service_name)
        }
        Err(e) => {
            drop(service);
            exit_with(&e);
        }
    }

    if let Err(e) = service.run() {
        drop(service);
        exit_with(&e);
    }
    service.stop();

    tracing::info!("✅ Service lifecycle completed");
    Ok(())
}

fn exit_with(e: &MiddlewareError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
