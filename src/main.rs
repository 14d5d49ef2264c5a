use clap::Parser;
use robot_escape::utils::monitor::SystemMonitor;
use robot_escape::utils::{logger, validation::Validate};
use robot_escape::{CliConfig, ConsoleProgress, HttpRobotClient, Navigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting robot-escape CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let client = HttpRobotClient::from_config(&config)?;
    let navigator = Navigator::new(client, config.email.clone(), ConsoleProgress);

    match navigator.start().await {
        Ok(escaped) => {
            if escaped {
                tracing::info!("✅ Run finished: the robot escaped");
            } else {
                tracing::info!("Run finished: the escape was denied");
            }
            monitor.log_final_stats();
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            monitor.log_final_stats();
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
