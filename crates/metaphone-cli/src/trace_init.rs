#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Log encoder spans to stderr. `RUST_LOG` overrides the default filter.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metaphone_core=debug")),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
