//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `apply`: Reconcile a configuration entry with a desired document
//! - `get`: Fetch a configuration entry and print it
//! - `check`: Report whether an apply would change anything
//! - `completions`: Generate shell completion scripts

pub mod apply;
pub mod check;
pub mod completions;
pub mod get;

pub use apply::ApplyCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
