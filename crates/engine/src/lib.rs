pub mod grid;
pub mod layout;
pub mod signature;

/// Engine version, for hosts that log it at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
