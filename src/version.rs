/// Cargo package version reported at startup and by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
