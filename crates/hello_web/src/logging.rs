//! Tracing subscriber setup.
//!
//! On wasm the fmt layer writes to the browser console; elsewhere it writes to
//! stdout. Timestamps are dropped because `SystemTime` is unavailable on
//! `wasm32-unknown-unknown`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer().without_time();

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    let fmt_layer = fmt_layer
        .with_ansi(false)
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
