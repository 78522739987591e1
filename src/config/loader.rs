//! Configuration file discovery, loading and docroot resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::ModReportConfig;
use crate::error::{ModReportError, Result};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".modreport";

/// Docroot candidates tried in order when none is configured.
const DOCROOT_CANDIDATES: &[&str] = &["web", "docroot", "."];

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .modreport/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .modreport/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as a raw YAML value, for merging.
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModReportError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModReportError::Io(e)
        }
    })?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| ModReportError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Load configuration for a project.
///
/// With `config_override`, only that file is read (it must exist).
/// Otherwise `.modreport/config.yml` and `.modreport/config.local.yml` are
/// merged over the defaults; neither is required.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ModReportConfig> {
    let (paths, report_path) = match config_override {
        Some(path) => (vec![path.to_path_buf()], path.to_path_buf()),
        None => {
            let discovered = ConfigPaths::discover(project_root);
            let paths: Vec<PathBuf> = discovered.all_existing().into_iter().cloned().collect();
            (paths, project_root.join(CONFIG_DIR).join("config.yml"))
        }
    };

    if paths.is_empty() {
        debug!("No config files found; using defaults");
        return Ok(ModReportConfig::default());
    }

    let mut values = Vec::new();
    for path in &paths {
        debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_configs(&values)).map_err(|e| ModReportError::ConfigParseError {
        path: report_path,
        message: e.to_string(),
    })
}

/// Locate the Drupal docroot.
///
/// A configured docroot must exist. Otherwise the first of `web/`,
/// `docroot/` and the project root that contains a `core` directory wins.
pub fn resolve_docroot(project_root: &Path, config: &ModReportConfig) -> Result<PathBuf> {
    if let Some(docroot) = &config.docroot {
        let path = project_root.join(docroot);
        return if path.is_dir() {
            Ok(path)
        } else {
            Err(ModReportError::DocrootNotFound { path })
        };
    }

    DOCROOT_CANDIDATES
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.join("core").is_dir())
        .map(|path| {
            debug!("Detected docroot {}", path.display());
            path
        })
        .ok_or_else(|| ModReportError::DocrootNotFound {
            path: project_root.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discover_finds_nothing_in_empty_project() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, ModReportConfig::default());
    }

    #[test]
    fn local_overrides_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "docroot: web\nfallback_namespace: acme\n");
        write_config(temp.path(), "config.local.yml", "docroot: docroot\n");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.docroot, Some(PathBuf::from("docroot")));
        assert_eq!(config.fallback_namespace, "acme");
    }

    #[test]
    fn empty_config_file_is_valid() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, ModReportConfig::default());
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "docroot: [unclosed");
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, ModReportError::ConfigParseError { .. }));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "steps: {}\n");
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn override_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ModReportError::ConfigNotFound { .. }));
    }

    #[test]
    fn override_skips_project_files() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "fallback_namespace: acme\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "package_type: custom-module\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.package_type, "custom-module");
        assert_eq!(config.fallback_namespace, "drupal");
    }

    #[test]
    fn docroot_prefers_web() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("web/core")).unwrap();
        fs::create_dir_all(temp.path().join("docroot/core")).unwrap();
        let docroot = resolve_docroot(temp.path(), &ModReportConfig::default()).unwrap();
        assert_eq!(docroot, temp.path().join("web"));
    }

    #[test]
    fn docroot_falls_back_to_project_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("core")).unwrap();
        let docroot = resolve_docroot(temp.path(), &ModReportConfig::default()).unwrap();
        assert_eq!(docroot, temp.path().join("."));
    }

    #[test]
    fn docroot_not_found() {
        let temp = TempDir::new().unwrap();
        let err = resolve_docroot(temp.path(), &ModReportConfig::default()).unwrap_err();
        assert!(matches!(err, ModReportError::DocrootNotFound { .. }));
    }

    #[test]
    fn configured_docroot_must_exist() {
        let temp = TempDir::new().unwrap();
        let config = ModReportConfig {
            docroot: Some(PathBuf::from("public")),
            ..Default::default()
        };
        assert!(resolve_docroot(temp.path(), &config).is_err());

        fs::create_dir_all(temp.path().join("public")).unwrap();
        assert_eq!(
            resolve_docroot(temp.path(), &config).unwrap(),
            temp.path().join("public")
        );
    }
}
