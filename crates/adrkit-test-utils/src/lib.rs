//! Shared test utilities for adrkit.
//!
//! - [`fixtures`] - Annotated source files used across crates
//! - [`project`] - Temporary project trees on disk

pub mod fixtures;
pub mod project;

pub use fixtures::*;
pub use project::TempProject;
