pub mod catalog;
pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod selection;
pub mod session;
pub mod summary;

pub use catalog::CostCatalog;
pub use error::CostModelError;
pub use estimator::{estimate, CostEstimate, UsageParameters};
pub use selection::{SelectionState, Totals};
pub use session::CostSession;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. Output goes to stderr so that
/// command output on stdout stays clean. Can only be called once.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
