//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-module detail.
    Verbose,
    /// Show the report and status lines.
    #[default]
    Normal,
    /// Show the report without title, intro or summary lines.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows title, intro and summary lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows extra detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
