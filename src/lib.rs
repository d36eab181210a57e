//! Biomarker extraction and clinical classification for lab reports.
//!
//! Report text goes through [`pipeline::extraction`] to become a dated
//! [`models::MeasurementRecord`]; each value is then tiered by
//! [`intelligence`] against the bundled reference ranges, and
//! [`timeline`] tracks records over time for trends.

pub mod config;
pub mod intelligence;
pub mod models;
pub mod pipeline;
pub mod timeline;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
