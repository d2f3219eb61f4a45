//! Configuration loading and management

use tracing_subscriber::EnvFilter;

/// Port the service binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Filter directives applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the menu service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// TCP port the HTTP listener binds
    pub port: u16,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `PORT`; unset, empty or unparseable values fall back to the
    /// default so a misconfigured deployment still comes up.
    pub fn from_env() -> Self {
        let raw = std::env::var("PORT").ok();
        if let Some(value) = &raw {
            if value.trim().parse::<u16>().is_err() {
                tracing::warn!(%value, "ignoring invalid PORT value, using default");
            }
        }
        Self {
            port: port_from(raw),
        }
    }

    /// The address string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Resolve the port from a raw environment value.
fn port_from(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Log filter honoring `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
///
/// An env filter built straight from the environment only emits errors when
/// `RUST_LOG` is unset, which would silence the startup and request logs.
pub fn log_filter() -> EnvFilter {
    EnvFilter::new(log_directives(std::env::var("RUST_LOG").ok()))
}

/// Resolve the filter directives from a raw environment value.
fn log_directives(raw: Option<String>) -> String {
    match raw {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}
