//! HomeworkBot - homework review status notifier
//!
//! Entry point: loads configuration, validates credentials and runs the poll loop.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, error, info};

use homeworkbot::cli::Cli;
use homeworkbot::config::{Config, Credentials};
use homeworkbot::{CycleOutcome, EXIT_CONFIG, PracticumClient, Poller, TelegramNotifier};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Secrets may live in a local .env file
    let dotenv_path: Option<PathBuf> = dotenvy::dotenv().ok();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    if let Some(path) = dotenv_path {
        debug!(path = %path.display(), "Loaded environment from file");
    }

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let client = PracticumClient::from_config(&config.api, &credentials.api_token)
        .context("Failed to create status API client")?;
    let notifier = TelegramNotifier::from_config(&config.telegram, &credentials.bot_token, &credentials.chat_id)
        .context("Failed to create Telegram notifier")?;

    let mut poller = Poller::new(config.poll.clone(), Arc::new(client), Arc::new(notifier));
    info!("Bot started");

    if cli.once {
        let outcome = poller.run_cycle().await;
        match &outcome {
            CycleOutcome::Notified { message } => info!(%message, "Single cycle delivered a status change"),
            CycleOutcome::NoUpdates => info!("Single cycle found no updates"),
            CycleOutcome::Failed { error, .. } => info!(%error, "Single cycle failed"),
        }
        return Ok(());
    }

    poller.run().await;
    Ok(())
}
