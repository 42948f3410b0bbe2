//! Ledgerdesk client core
//!
//! Transaction-editing building blocks for a small-business accounting
//! frontend: the line-item ledger calculator, product catalog lookup,
//! draft validation and REST submission against the accounting backend.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::ledger;
pub use modules::products;
pub use modules::transactions;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for binaries and test harnesses embedding this crate.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
