/// Core functionality modules
///
/// Contains the review rules and the queries run over the store:
/// validation, filtering and suggestions.

pub mod filter;
pub mod suggester;
pub mod validator;

pub use filter::{FilterKey, ReviewFilter};
pub use suggester::Suggester;
pub use validator::Validator;
