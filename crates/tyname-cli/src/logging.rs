//! Diagnostic logging to stderr.
//!
//! The level comes from `--log-level` when given, then from `TYNAME_LOG`
//! (any `EnvFilter` directive), then defaults to `warn`.

use std::fmt;

use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

pub const LOG_ENV: &str = "TYNAME_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(text)
    }
}

/// Build the filter for an explicit level, or from the environment.
pub fn make_filter(level: Option<LogLevel>) -> EnvFilter {
    let env = std::env::var(LOG_ENV).ok();
    filter_for(level, env.as_deref())
}

fn filter_for(level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::new(level.to_string());
    }
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(LogLevel::default().to_string()))
}

pub fn init_logging(level: Option<LogLevel>) {
    use std::io::IsTerminal;

    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let subscriber = tfmt::fmt()
        .with_env_filter(make_filter(level))
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
