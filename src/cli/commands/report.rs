//! Report command implementation.
//!
//! The `modreport report` command lists every non-core module with its
//! Composer package and require line.

use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::report::{Report, Reporter, REPORT_HEADERS};
use crate::ui::{Table, UserInterface};

use super::context::{ProjectContext, ProjectOptions};
use super::dispatcher::{Command, CommandResult};

const TITLE: &str = "Installed modules and their Composer packages";

const INTRO: &str = "Core modules are excluded. Highlighted rows belong to Composer packages \
with no enabled module. Sorted by require line, then module name.";

/// The report command implementation.
pub struct ReportCommand {
    options: ProjectOptions,
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(options: ProjectOptions, args: ReportArgs) -> Self {
        Self { options, args }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::load_or_report(&self.options, ui)? {
            Ok(ctx) => ctx,
            Err(result) => return Ok(result),
        };

        let modules = ctx.modules(ui)?;
        let metadata = ctx.metadata(ui);
        let reporter = Reporter::new(
            metadata.as_ref(),
            ctx.config.origin_rules(),
            &ctx.config.package_type,
        );
        let report = reporter.report(&modules);

        if self.args.json {
            let mut json =
                serde_json::to_string_pretty(&report.rows).map_err(anyhow::Error::from)?;
            json.push('\n');
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(TITLE);

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Docroot: {}", ctx.docroot.display()));
            ui.message(&format!(
                "Composer packages indexed: {}",
                reporter.index().len()
            ));
            ui.message(&format!(
                "Package names guessed from directory names: {}",
                report.guessed_packages()
            ));
        }

        ui.message(INTRO);

        if report.is_empty() {
            ui.message("No modules found.");
            return Ok(CommandResult::success());
        }

        ui.show_table(&report_table(&report));
        ui.message(&summary(&report));

        Ok(CommandResult::success())
    }
}

/// Render report rows into a table, highlighting inactive packages.
pub fn report_table(report: &Report) -> Table {
    let mut table = Table::new(&REPORT_HEADERS);
    for row in &report.rows {
        let cells = row.cells();
        if row.highlight {
            table.add_highlighted_row(&cells);
        } else {
            table.add_row(&cells);
        }
    }
    table
}

fn summary(report: &Report) -> String {
    let modules = report.rows.len();
    format!(
        "{} {} listed, {} Composer {}, {} with no enabled module",
        modules,
        if modules == 1 { "module" } else { "modules" },
        report.package_state.len(),
        if report.package_state.len() == 1 {
            "package"
        } else {
            "packages"
        },
        report.inactive_packages(),
    )
}
