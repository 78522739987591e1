//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, ReportTheme, Table, UserInterface};

/// Terminal UI writing status to stdout and problems to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ReportTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: ReportTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_table(&mut self, table: &Table) {
        writeln!(self.out, "{}", table.render_with(&self.theme)).ok();
    }

    fn data(&mut self, content: &str) {
        write!(self.out, "{}", content).ok();
        self.out.flush().ok();
    }
}

/// Create the UI for this process.
///
/// `no_color` forces the plain theme.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let theme = if no_color {
        ReportTheme::plain()
    } else {
        ReportTheme::detect()
    };
    Box::new(TerminalUI::with_theme(mode, theme))
}
