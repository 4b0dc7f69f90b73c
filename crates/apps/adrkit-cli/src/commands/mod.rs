//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod extract;
pub mod init;
pub mod list;
pub mod render;

// Re-export command handlers
pub use check::check;
pub use completions::completions;
pub use extract::extract;
pub use init::init;
pub use list::list;
pub use render::render;
