//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]. The report and
//! manifest commands share project loading through [`ProjectContext`].

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod manifest;
pub mod report;

pub use context::{ProjectContext, ProjectOptions, EXIT_NO_DOCROOT};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
