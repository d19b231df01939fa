//! Logging setup
//!
//! The crate logs through the `log` facade; binaries pick the backend.
//! These helpers install `env_logger`.

/// Initialize the logging system with an explicit filter string (e.g. `"debug"`
/// or `"hitbox_engine=trace"`). `RUST_LOG` directives are applied on top.
///
/// Returns `false` if a logger was already installed.
pub fn init_with_level(filter: &str) -> bool {
    env_logger::Builder::new()
        .parse_filters(filter)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok()
}
