use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "cli.log";

/// Initialize logging for the CLI
///
/// Logs always go to stderr so stdout stays clean for command output. With
/// a `log_dir` they are also written to `cli.log` inside it.
pub fn init_logging(log_level: Level, log_dir: Option<PathBuf>) -> Result<()> {
    match log_dir {
        Some(dir) => init_file_logging(log_level, &dir),
        None => {
            init_stderr_logging(log_level);
            Ok(())
        }
    }
}

fn env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("petcare={level_str},petcare_http={level_str},petcare_frontend_common={level_str}")
            .into()
    })
}

fn init_file_logging(level: Level, log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))?;

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

fn init_stderr_logging(level: Level) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
