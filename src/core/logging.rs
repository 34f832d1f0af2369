//! Logger installation for the hosts this crate ships with.
//!
//! The library itself only emits through `log`; a host picks the sink.

/// Install `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
///
/// Returns false if a logger was already installed.
#[cfg(feature = "debug")]
pub fn init_env_logger() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}

/// Route `log` records to the browser console.
#[cfg(feature = "wasm")]
pub fn init_console_logger(level: log::Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}
