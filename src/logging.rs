//! Structured logging setup
//!
//! Events go to stderr so stdout carries only results. `RUST_LOG` or
//! `FRONTIER_LOG` override the level chosen on the command line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "FRONTIER_LOG";

/// Filter directive for the CLI flags
///
/// A bare level applies to this crate only; anything containing `=` is used
/// as a full directive.
#[must_use]
pub fn directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("frontier_graph={level}"),
        (true, None) => "frontier_graph=debug".to_string(),
        (false, None) => "frontier_graph=warn".to_string(),
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
