/// Statistics module
///
/// Review counts and rating averages.

pub mod summary;

pub use summary::{Statistics, Summary};
