//! Core data types shared by the registry, the report and the CLI.

use serde::Serialize;

/// Label used for modules shipped with Drupal core.
pub const CORE_LABEL: &str = "core (drupal/core)";

/// Label used for project-local modules.
pub const CUSTOM_LABEL: &str = "custom";

/// Label used when the origin cannot be determined.
pub const UNKNOWN_LABEL: &str = "-";

/// Command prefix of every require line.
pub const REQUIRE_PREFIX: &str = "composer require";

/// An installed extension module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Machine name, unique per site (e.g. `admin_toolbar`).
    pub machine_name: String,
    /// Human readable name from the `.info.yml` file.
    pub display_name: String,
    /// Module directory relative to the docroot.
    pub path: String,
    /// Whether the module is enabled in the site configuration.
    pub enabled: bool,
}

impl Module {
    /// Create a module record.
    pub fn new(machine_name: &str, display_name: &str, path: &str, enabled: bool) -> Self {
        Self {
            machine_name: machine_name.to_string(),
            display_name: display_name.to_string(),
            path: path.to_string(),
            enabled,
        }
    }
}

/// Where a module came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Bundled with Drupal core.
    Core,
    /// Installed from a Composer package.
    ///
    /// `guessed` is set when the package id was inferred from the directory
    /// name instead of being found in Composer's metadata.
    Package { id: String, guessed: bool },
    /// Project-local code with no package manager entry.
    Custom,
    /// Origin could not be determined.
    Unknown,
}

impl Origin {
    /// Label shown in the "Composer package" column.
    pub fn label(&self) -> &str {
        match self {
            Self::Core => CORE_LABEL,
            Self::Package { id, .. } => id,
            Self::Custom => CUSTOM_LABEL,
            Self::Unknown => UNKNOWN_LABEL,
        }
    }

    /// The package id, when the label is shaped like one.
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::Package { id, .. } => as_package_id(id),
            _ => None,
        }
    }

    /// `composer require <package>` without a version, if the origin has one.
    pub fn require_base(&self) -> Option<String> {
        self.package()
            .map(|pkg| format!("{} {}", REQUIRE_PREFIX, pkg))
    }

    /// Whether the package id is a guess.
    pub fn is_guessed(&self) -> bool {
        matches!(self, Self::Package { guessed: true, .. })
    }

    /// Whether this is a core module.
    pub fn is_core(&self) -> bool {
        matches!(self, Self::Core)
    }
}

/// Return the trimmed label if it is a `vendor/name` package id.
pub fn as_package_id(label: &str) -> Option<&str> {
    let label = label.trim();
    if !label.is_empty() && label != UNKNOWN_LABEL && label != CUSTOM_LABEL && label.contains('/')
    {
        Some(label)
    } else {
        None
    }
}

/// One line of the module report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Human readable module name.
    pub label: String,
    /// Machine name (the name on disk).
    pub machine_name: String,
    /// Origin label: package id, `custom`, or `-`.
    pub origin: String,
    /// Package id, when the origin is a package.
    pub package: Option<String>,
    /// `package` was inferred from the directory name, not found in Composer.
    pub guessed: bool,
    /// Version reported by Composer.
    pub pretty_version: Option<String>,
    /// Caret constraint derived from `pretty_version`.
    pub constraint: Option<String>,
    /// `composer require vendor/name ^x.y`.
    pub require_line: Option<String>,
    /// Whether this module is enabled.
    pub enabled: bool,
    /// No module of this row's package is enabled.
    pub highlight: bool,
}

impl ReportRow {
    /// Table cells in column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.require_line
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            self.label.clone(),
            self.machine_name.clone(),
            self.origin.clone(),
            if self.enabled { "Yes" } else { "No" }.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_id_requires_slash() {
        assert_eq!(as_package_id("drupal/webform"), Some("drupal/webform"));
        assert_eq!(as_package_id("  drupal/webform "), Some("drupal/webform"));
        assert_eq!(as_package_id("webform"), None);
    }

    #[test]
    fn package_id_rejects_placeholders() {
        assert_eq!(as_package_id(""), None);
        assert_eq!(as_package_id("-"), None);
        assert_eq!(as_package_id("custom"), None);
    }

    #[test]
    fn origin_labels() {
        assert_eq!(Origin::Core.label(), "core (drupal/core)");
        assert_eq!(Origin::Custom.label(), "custom");
        assert_eq!(Origin::Unknown.label(), "-");
        let pkg = Origin::Package {
            id: "drupal/token".into(),
            guessed: false,
        };
        assert_eq!(pkg.label(), "drupal/token");
    }

    #[test]
    fn only_guessed_packages_are_guesses() {
        let guessed = Origin::Package {
            id: "drupal/bar".into(),
            guessed: true,
        };
        let indexed = Origin::Package {
            id: "vendor/foo".into(),
            guessed: false,
        };
        assert!(guessed.is_guessed());
        assert!(!indexed.is_guessed());
        assert!(!Origin::Custom.is_guessed());
    }

    #[test]
    fn only_packages_have_require_base() {
        let pkg = Origin::Package {
            id: "drupal/token".into(),
            guessed: true,
        };
        assert_eq!(
            pkg.require_base().as_deref(),
            Some("composer require drupal/token")
        );
        assert_eq!(Origin::Core.package(), None);
        assert_eq!(Origin::Core.require_base(), None);
        assert_eq!(Origin::Custom.require_base(), None);
        assert_eq!(Origin::Unknown.require_base(), None);
    }

    #[test]
    fn row_cells_use_placeholders() {
        let row = ReportRow {
            label: "My Module".into(),
            machine_name: "my_module".into(),
            origin: "custom".into(),
            package: None,
            guessed: false,
            pretty_version: None,
            constraint: None,
            require_line: None,
            enabled: false,
            highlight: false,
        };
        let cells = row.cells();
        assert_eq!(cells[0], "-");
        assert_eq!(cells[2], "my_module");
        assert_eq!(cells[4], "No");
    }
}
