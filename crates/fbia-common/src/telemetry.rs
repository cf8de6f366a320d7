//! Tracing setup for fbia binaries.
//!
//! Libraries in the workspace only emit `tracing` events; a binary calls
//! [`init`] once to get them onto stderr.
//!
//! ```ignore
//! use fbia_common::telemetry::{self, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_config("fbia", &Config::default());
//! telemetry::init(config);
//! tracing::info!("ready");
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Config;

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Console filter directive, used when `RUST_LOG` is unset
    pub console_filter: String,
}

impl TelemetryConfig {
    pub fn from_config(service_name: impl Into<String>, config: &Config) -> Self {
        Self {
            service_name: service_name.into(),
            console_filter: config.log_level.clone(),
        }
    }
}

/// Install the global subscriber.
///
/// Later calls are no-ops; the first subscriber stays in place.
pub fn init(config: TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.console_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the rendered document, so logs go to stderr
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(env_filter);

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(service = %config.service_name, "telemetry initialized");
    }
}
