//! Tracing setup for the command-line tool.
//!
//! Output is controlled by two environment variables:
//!
//! ```bash
//! # Conflict fallbacks and delegate names
//! SCRIPTNAME_LOG=debug scriptname names
//!
//! # Every rejected annotation, as JSON lines
//! SCRIPTNAME_LOG=trace SCRIPTNAME_LOG_FORMAT=json scriptname names
//! ```
//!
//! Nothing is installed unless `SCRIPTNAME_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

const LOG_VAR: &str = "SCRIPTNAME_LOG";
const FORMAT_VAR: &str = "SCRIPTNAME_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(FORMAT_VAR).unwrap_or_default())
    }
}

/// `SCRIPTNAME_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_VAR) {
        Ok(value) => EnvFilter::builder().parse_lossy(value),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init_tracing() {
    if std::env::var(LOG_VAR).is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
