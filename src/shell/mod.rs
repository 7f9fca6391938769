/// Interactive shell
///
/// Menu loop, prompts and console output. No review rules live here; every
/// decision is delegated to the store, query and statistics modules.

pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::Session;
