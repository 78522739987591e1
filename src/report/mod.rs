//! Module report generation.
//!
//! The pipeline for one run:
//!
//! 1. [`PackageIndex::build`] maps install directories to package ids
//! 2. [`classify`] decides each module's [`Origin`](crate::model::Origin)
//! 3. [`caret_constraint`] turns Composer versions into `^x.y` constraints
//! 4. [`build_report`] assembles, flags and orders the table rows
//! 5. [`build_manifest`] emits require lines for packages in use
//!
//! [`Reporter`] ties these together for callers that hold a registry and a
//! metadata provider.
//!
//! # Example
//!
//! ```
//! use modreport::composer::Unavailable;
//! use modreport::model::Module;
//! use modreport::report::{OriginRules, Reporter};
//!
//! let metadata = Unavailable::new("no vendor directory");
//! let reporter = Reporter::new(&metadata, OriginRules::default(), "drupal-module");
//! let modules = vec![Module::new("token", "Token", "modules/contrib/token", true)];
//!
//! let report = reporter.report(&modules);
//! assert_eq!(
//!     report.rows[0].require_line.as_deref(),
//!     Some("composer require drupal/token")
//! );
//! assert_eq!(reporter.manifest(&modules).render(), "\"drupal/token\": \"*\",\n");
//! ```

pub mod assembler;
pub mod constraint;
pub mod index;
pub mod manifest;
pub mod natural;
pub mod origin;

pub use assembler::{build_report, Report, REPORT_HEADERS};
pub use constraint::{caret_constraint, lookup_pretty_version, manifest_constraint, ANY_VERSION};
pub use index::PackageIndex;
pub use manifest::{build_manifest, Manifest, DEFAULT_MANIFEST_FILENAME, MANIFEST_CONTENT_TYPE};
pub use natural::natural_cmp;
pub use origin::{classify, is_core, OriginRules};

use crate::composer::PackageMetadata;
use crate::model::Module;

/// Builds reports and manifests against one metadata provider.
///
/// The package index is built once, when the reporter is created.
pub struct Reporter<'a> {
    metadata: &'a dyn PackageMetadata,
    rules: OriginRules,
    index: PackageIndex,
}

impl<'a> Reporter<'a> {
    /// Create a reporter, indexing packages of `package_type`.
    pub fn new(metadata: &'a dyn PackageMetadata, rules: OriginRules, package_type: &str) -> Self {
        let index = PackageIndex::build(metadata, package_type);
        Self {
            metadata,
            rules,
            index,
        }
    }

    /// The package index in use.
    pub fn index(&self) -> &PackageIndex {
        &self.index
    }

    /// Assemble the module report.
    pub fn report(&self, modules: &[Module]) -> Report {
        build_report(modules, &self.index, self.metadata, &self.rules)
    }

    /// Build the manifest of packages in use.
    pub fn manifest(&self, modules: &[Module]) -> Manifest {
        build_manifest(modules, &self.index, self.metadata, &self.rules)
    }
}
