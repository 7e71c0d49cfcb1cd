//! Pet care admin command line client

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use petcare_frontend_common::AppConfig;
use std::path::PathBuf;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "petcare")]
#[command(about = "Administer the pet care backend from the terminal")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (TOML or YAML); PETCARE__* variables override it
    #[arg(short = 'c', long, global = true, env = "PETCARE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable file logging (only log to stderr)
    #[arg(long, global = true)]
    no_file_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let log_dir = if cli.no_file_log {
        None
    } else {
        config.storage.path.parent().map(PathBuf::from)
    };
    logging::init_logging(cli.log_level.into(), log_dir)?;

    info!(base_url = %config.api.base_url, "Starting petcare CLI");

    if let Err(e) = cli.command.execute(&config).await {
        error!("Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_orders_list() {
        let cli = Cli::try_parse_from([
            "petcare",
            "--no-file-log",
            "orders",
            "list",
            "--status",
            "pending",
            "--page",
            "2",
        ])
        .unwrap();
        assert!(cli.no_file_log);
        assert!(matches!(cli.command, Commands::Orders { .. }));
    }
}
