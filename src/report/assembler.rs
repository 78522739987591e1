//! Report assembly: rows, per-package enabled state, ordering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::constraint::{caret_constraint, lookup_pretty_version};
use super::natural::natural_cmp;
use super::origin::{classify, OriginRules};
use super::PackageIndex;
use crate::composer::PackageMetadata;
use crate::model::{Module, ReportRow};

/// Column headers of the report table.
pub const REPORT_HEADERS: [&str; 5] = [
    "composer require",
    "Module name",
    "Name on disk",
    "Composer package",
    "Enabled",
];

/// The assembled module report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Rows in display order.
    pub rows: Vec<ReportRow>,
    /// Package id to "any module of it is enabled".
    pub package_state: BTreeMap<String, bool>,
}

impl Report {
    /// Number of packages with no enabled module.
    pub fn inactive_packages(&self) -> usize {
        self.package_state.values().filter(|enabled| !**enabled).count()
    }

    /// Number of packages whose id was guessed from a directory name.
    pub fn guessed_packages(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.guessed)
            .filter_map(|row| row.package.as_deref())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the report for `modules`. Core modules are left out.
pub fn build_report(
    modules: &[Module],
    index: &PackageIndex,
    metadata: &dyn PackageMetadata,
    rules: &OriginRules,
) -> Report {
    let mut rows: Vec<ReportRow> = modules
        .iter()
        .filter_map(|module| build_row(module, index, metadata, rules))
        .collect();

    let mut package_state: BTreeMap<String, bool> = BTreeMap::new();
    for row in &rows {
        if let Some(package) = &row.package {
            *package_state.entry(package.clone()).or_insert(false) |= row.enabled;
        }
    }

    for row in &mut rows {
        row.highlight = row
            .package
            .as_ref()
            .is_some_and(|p| !package_state.get(p).copied().unwrap_or(false));
    }

    rows.sort_by(compare_rows);

    Report {
        rows,
        package_state,
    }
}

fn build_row(
    module: &Module,
    index: &PackageIndex,
    metadata: &dyn PackageMetadata,
    rules: &OriginRules,
) -> Option<ReportRow> {
    let origin = classify(module, index, rules);
    if origin.is_core() {
        return None;
    }

    let package = origin.package().map(str::to_string);
    let pretty_version = package
        .as_deref()
        .and_then(|p| lookup_pretty_version(metadata, p));
    let constraint = pretty_version
        .as_deref()
        .map(caret_constraint)
        .filter(|c| !c.is_empty());
    let require_line = origin.require_base().map(|base| match &constraint {
        Some(c) => format!("{} {}", base, c),
        None => base,
    });

    Some(ReportRow {
        label: module.display_name.clone(),
        machine_name: module.machine_name.clone(),
        origin: origin.label().to_string(),
        package,
        guessed: origin.is_guessed(),
        pretty_version,
        constraint,
        require_line,
        enabled: module.enabled,
        highlight: false,
    })
}

/// Require line first (rows without one last), then label.
fn compare_rows(a: &ReportRow, b: &ReportRow) -> Ordering {
    let by_require = match (&a.require_line, &b.require_line) {
        (Some(ra), Some(rb)) => natural_cmp(ra, rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_require.then_with(|| natural_cmp(&a.label, &b.label))
}
