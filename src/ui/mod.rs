//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminals and pipes
//! - [`MockUI`] capturing output for tests
//! - [`Table`] for box-drawn reports
//!
//! # Example
//!
//! ```
//! use modreport::ui::{MockUI, Table, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut table = Table::new(&["Module name", "Enabled"]);
//! table.add_row(&["Token", "Yes"]);
//! ui.show_table(&table);
//! ui.success("Done");
//!
//! assert_eq!(ui.tables().len(), 1);
//! assert!(ui.has_success("Done"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::{Table, HIGHLIGHT_MARKER};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ReportTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a title line above a report.
    fn show_header(&mut self, title: &str);

    /// Render a table.
    fn show_table(&mut self, table: &Table);

    /// Write requested data (JSON, manifest text) verbatim to stdout.
    ///
    /// Not affected by the output mode.
    fn data(&mut self, content: &str);
}
