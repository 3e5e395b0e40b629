// src/log.rs
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

/// Environment variable read for the log filter (e.g. `CATALOG_PREP_LOG=debug`).
pub const LOG_ENV: &str = "CATALOG_PREP_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once. `default_level` applies when
/// `CATALOG_PREP_LOG` is unset or unparsable.
pub fn init(default_level: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
