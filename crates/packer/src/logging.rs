//! Tracing setup for the `packer` binary and embedding applications.
//!
//! ## Log Levels
//!
//! - **INFO**: Batch lifecycle (batch start/end)
//! - **WARN**: Rejected batches and failed tasks
//! - **DEBUG**: Per-task results and reader progress
//! - **TRACE**: Every improvement found while enumerating subsets

use std::io;
use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "packer=info,packer_solver=info,packer_io=warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already set.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init();
    });
}
