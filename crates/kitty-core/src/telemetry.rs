//! Centralised tracing initialisation for kitty binaries.
//!
//! Call [`init_tracing`] once at program start to configure the global
//! subscriber with an `EnvFilter` and either human-readable or JSON output.
//! Log lines go to stderr; stdout is reserved for allocation results.
//!
//! Later calls are ignored because the global subscriber can only be set once.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Stderr formatter for allocator logs, as JSON lines or plain text.
fn stderr_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// `RUST_LOG` when set, otherwise `level`.
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Initialise the global tracing subscriber.
///
/// * `json`: when `true`, emit newline-delimited JSON log lines.
/// * `level`: default verbosity when `RUST_LOG` is not set.
pub fn init_tracing(json: bool, level: Level) {
    tracing_subscriber::registry()
        .with(stderr_layer(json))
        .with(env_filter(level))
        .try_init()
        .ok();
}

