// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod config;
pub mod diff;
pub mod filter;
pub mod history;
pub mod ingest;
pub mod metrics;
pub mod notify;
pub mod pipeline;

// ---- Re-exports for stable public API ----
pub use crate::config::SniperConfig;
pub use crate::ingest::http::HttpFetcher;
pub use crate::notify::{DeliveryOutcome, EmailNotifier, NoopNotifier, Notifier, Report};
pub use crate::pipeline::{run_once, RunSummary};

use tracing_subscriber::EnvFilter;

/// Compact stdout logging; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
