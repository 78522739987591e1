//! Table rendering for formatted output.

use console::{measure_text_width, pad_str, Alignment};

use super::theme::ReportTheme;

/// Marker shown beside highlighted rows when colours are off.
pub const HIGHLIGHT_MARKER: &str = "!";

#[derive(Debug)]
struct Row {
    cells: Vec<String>,
    highlight: bool,
}

/// A box-drawn table with optional per-row highlighting.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        self.push(row, false);
    }

    /// Add a row drawn in the highlight style.
    pub fn add_highlighted_row<S: AsRef<str>>(&mut self, row: &[S]) {
        self.push(row, true);
    }

    fn push<S: AsRef<str>>(&mut self, row: &[S], highlight: bool) {
        let cells: Vec<String> = row.iter().map(|s| s.as_ref().to_string()).collect();

        for (i, cell) in cells.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(Row { cells, highlight });
    }

    /// Number of highlighted rows.
    pub fn highlighted_count(&self) -> usize {
        self.rows.iter().filter(|r| r.highlight).count()
    }

    /// Render the table without styling.
    pub fn render(&self) -> String {
        self.render_with(&ReportTheme::plain())
    }

    /// Render the table using `theme`.
    ///
    /// Highlighted rows are drawn in `theme.highlight_row`. A plain theme
    /// cannot show colour, so a leading marker column is added instead.
    pub fn render_with(&self, theme: &ReportTheme) -> String {
        let marker = !theme.colored && self.highlighted_count() > 0;
        let mut widths = self.column_widths.clone();
        if marker {
            widths.insert(0, measure_text_width(HIGHLIGHT_MARKER));
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(theme.border.apply_to(border(&widths, '┌', '┬', '┐')).to_string());

        let mut header = self.headers.clone();
        if marker {
            header.insert(0, String::new());
        }
        lines.push(render_row(&header, &widths, theme, &theme.header));
        lines.push(theme.border.apply_to(border(&widths, '├', '┼', '┤')).to_string());

        let normal = console::Style::new();
        for row in &self.rows {
            let mut cells = row.cells.clone();
            if marker {
                let flag = if row.highlight { HIGHLIGHT_MARKER } else { "" };
                cells.insert(0, flag.to_string());
            }
            let style = if row.highlight {
                &theme.highlight_row
            } else {
                &normal
            };
            lines.push(render_row(&cells, &widths, theme, style));
        }

        lines.push(theme.border.apply_to(border(&widths, '└', '┴', '┘')).to_string());
        lines.join("\n")
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);

    for (i, width) in widths.iter().enumerate() {
        s.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            s.push(mid);
        }
    }

    s.push(right);
    s
}

fn render_row(
    cells: &[String],
    widths: &[usize],
    theme: &ReportTheme,
    style: &console::Style,
) -> String {
    let bar = theme.border.apply_to("│").to_string();
    let mut s = bar.clone();

    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let padded = pad_str(cell, *width, Alignment::Left, None);
        s.push_str(&format!(" {} {}", style.apply_to(padded), bar));
    }

    s
}
