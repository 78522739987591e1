//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::{OriginRules, DEFAULT_MANIFEST_FILENAME};

/// Complete modreport configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModReportConfig {
    /// Docroot relative to the project root; auto-detected when unset.
    pub docroot: Option<PathBuf>,

    /// Path prefix of core modules, relative to the docroot.
    pub core_path: String,

    /// Marker preceding a contributed project's directory.
    pub contrib_marker: String,

    /// Marker of project-local modules.
    pub custom_marker: String,

    /// Namespace used when guessing a package id.
    pub fallback_namespace: String,

    /// Composer package type of Drupal modules.
    pub package_type: String,

    /// Composer's `installed.json`, relative to the project root.
    pub installed_json: PathBuf,

    /// Exported `core.extension.yml`, relative to the project root.
    pub extension_config: PathBuf,

    /// List modules found under `tests` directories.
    pub include_test_modules: bool,

    /// File name used by `manifest --download`.
    pub manifest_filename: String,
}

impl Default for ModReportConfig {
    fn default() -> Self {
        let rules = OriginRules::default();
        Self {
            docroot: None,
            core_path: rules.core_path,
            contrib_marker: rules.contrib_marker,
            custom_marker: rules.custom_marker,
            fallback_namespace: rules.fallback_namespace,
            package_type: "drupal-module".to_string(),
            installed_json: PathBuf::from("vendor/composer/installed.json"),
            extension_config: PathBuf::from("config/sync/core.extension.yml"),
            include_test_modules: false,
            manifest_filename: DEFAULT_MANIFEST_FILENAME.to_string(),
        }
    }
}

impl ModReportConfig {
    /// Origin classification rules from this config.
    pub fn origin_rules(&self) -> OriginRules {
        OriginRules {
            core_path: self.core_path.clone(),
            contrib_marker: self.contrib_marker.clone(),
            custom_marker: self.custom_marker.clone(),
            fallback_namespace: self.fallback_namespace.clone(),
        }
    }
}
