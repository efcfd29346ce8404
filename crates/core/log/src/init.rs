use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGER_INIT: Once = Once::new();

/// Checked before `RUST_LOG`.
pub const LOG_ENV: &str = "MACROD_LOG";

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }))
}

pub fn init(debug: bool) {
    LOGGER_INIT.call_once(|| {
        let _ = tracing_log::LogTracer::init();

        let subscriber = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(debug)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .with(filter(debug));

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
