/// Review storage
///
/// The in-memory store and the JSON file it is saved to.

pub mod collection;
pub mod models;
pub mod persistence;

pub use collection::Store;
pub use models::*;
pub use persistence::{LoadOutcome, ReviewFile, DEFAULT_FILE_NAME};
