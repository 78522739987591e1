//! `composer.json` require lines for packages in use.

use std::collections::HashMap;

use super::constraint::{lookup_pretty_version, manifest_constraint};
use super::natural::natural_cmp;
use super::origin::{classify, OriginRules};
use super::PackageIndex;
use crate::composer::PackageMetadata;
use crate::model::Module;

/// Default file name for the exported manifest.
pub const DEFAULT_MANIFEST_FILENAME: &str = "composer-requires.jsonlines.txt";

/// Content type of the exported manifest.
pub const MANIFEST_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug)]
struct PackageEntry {
    constraint: String,
    any_enabled: bool,
}

/// Sorted, deduplicated `"vendor/name": "^x.y",` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    lines: Vec<String>,
}

impl Manifest {
    /// The manifest lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no package has an enabled module.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with newlines, trailing newline included.
    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

/// Build manifest lines for every package with at least one enabled module.
pub fn build_manifest(
    modules: &[Module],
    index: &PackageIndex,
    metadata: &dyn PackageMetadata,
    rules: &OriginRules,
) -> Manifest {
    let mut packages: HashMap<String, PackageEntry> = HashMap::new();

    for module in modules {
        let origin = classify(module, index, rules);
        if origin.is_core() {
            continue;
        }
        let Some(package) = origin.package() else {
            continue;
        };

        let entry = packages
            .entry(package.to_string())
            .or_insert_with(|| PackageEntry {
                constraint: manifest_constraint(
                    lookup_pretty_version(metadata, package).as_deref(),
                ),
                any_enabled: false,
            });
        entry.any_enabled |= module.enabled;
    }

    let mut lines: Vec<String> = packages
        .into_iter()
        .filter(|(_, entry)| entry.any_enabled)
        .map(|(package, entry)| format!("\"{}\": \"{}\",", package, entry.constraint))
        .collect();
    lines.sort_by(|a, b| natural_cmp(a, b));
    lines.dedup();

    Manifest { lines }
}
