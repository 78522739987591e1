//! Version constraint derivation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::composer::PackageMetadata;

/// Constraint used in the manifest when no version is known.
pub const ANY_VERSION: &str = "*";

// `^\d+\.\d+` also covers MAJOR.MINOR.PATCH: patch and suffixes are dropped.
static MAJOR_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)").expect("valid regex"));
static MAJOR_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)$").expect("valid regex"));

/// Turn a pretty version into a caret constraint.
///
/// - `3.6.2` and `3.6` become `^3.6`
/// - `2` becomes `^2.0`
/// - anything containing `dev` is kept literally (`dev-main`, `1.x-dev`)
/// - anything else passes through unchanged
///
/// Leading `v`/`V` characters are stripped first.
pub fn caret_constraint(pretty: &str) -> String {
    let version = pretty.trim_start_matches(['v', 'V']);

    if version.to_ascii_lowercase().contains("dev") {
        return version.to_string();
    }
    if let Some(caps) = MAJOR_MINOR.captures(version) {
        return format!("^{}.{}", &caps[1], &caps[2]);
    }
    if let Some(caps) = MAJOR_ONLY.captures(version) {
        return format!("^{}.0", &caps[1]);
    }
    version.to_string()
}

/// Constraint for a manifest line; `*` when nothing usable is known.
pub fn manifest_constraint(pretty: Option<&str>) -> String {
    match pretty.map(caret_constraint) {
        Some(c) if !c.is_empty() => c,
        _ => ANY_VERSION.to_string(),
    }
}

/// Look up a package's pretty version, treating any failure as unknown.
pub fn lookup_pretty_version(metadata: &dyn PackageMetadata, package: &str) -> Option<String> {
    match metadata.pretty_version(package) {
        Ok(version) => version.filter(|v| !v.is_empty()),
        Err(e) => {
            debug!("No version for {}: {}", package, e);
            None
        }
    }
}
