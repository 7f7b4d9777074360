//! CLI argument parsing for homeworkbot

use clap::Parser;
use std::path::PathBuf;

/// Homework review status notifier
#[derive(Parser, Debug)]
#[command(name = "hb")]
#[command(author, version, about = "Polls homework review statuses and forwards changes to Telegram", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,
}
