/// game-reviews library
///
/// Review store, persistence, queries and statistics behind the
/// interactive game review shell.

pub mod config;
pub mod core;
pub mod error;
pub mod shell;
pub mod stats;
pub mod store;

// Re-exports for convenience
pub use error::{Result, ReviewError};
pub use store::{ReviewFile, Store};
