//! Logging and tracing setup for ISCC code generation.
//!
//! The library itself only emits `tracing` events: one `debug!` per
//! generated code and `trace!` events for intermediate values. Installing
//! a subscriber is left to the application, or to one of the helpers below.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Only the first
/// call of either initializer has an effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // another subscriber may already be installed by the host application
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init();

        info!("ISCC tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init();

        info!("ISCC tracing initialized (JSON mode)");
    });
}

/// Initialize logging from Python
#[cfg(feature = "python-ext")]
#[pyo3::prelude::pyfunction]
#[pyo3(signature = (json=false))]
pub fn init_logging(json: bool) -> pyo3::PyResult<()> {
    if json {
        init_tracing_json();
    } else {
        init_tracing();
    }
    Ok(())
}

/// Macro for creating spans around stream-consuming operations
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Macro for logging and returning errors
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::error!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::error!(error = %e, message = $msg, "Operation failed");
        e
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IsccError;

    #[test]
    fn test_init_tracing_once() {
        // Should be callable multiple times without panic
        init_tracing();
        init_tracing();
        init_tracing_json();
    }

    #[test]
    fn test_span_creation() {
        init_tracing();
        let span = span_trace!("instance_id", chunk_size = 64_000);
        let _guard = span.enter();
        info!("Inside span");
    }

    #[test]
    fn test_log_error_returns_error() {
        init_tracing();
        let err = log_error!(IsccError::UnsupportedVersion { version: 2 }, "meta_id");
        assert!(matches!(err, IsccError::UnsupportedVersion { version: 2 }));
    }
}
