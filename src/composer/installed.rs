//! `vendor/composer/installed.json` reader.
//!
//! Composer 2 writes `{"packages": [...], "dev": bool, ...}`; Composer 1
//! wrote a bare array of packages. Both are accepted. Install paths in the
//! file are relative to the directory holding `installed.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{MetadataError, PackageMetadata};

/// One package entry from `installed.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "install-path", default)]
    pub install_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstalledFile {
    V2 { packages: Vec<InstalledPackage> },
    V1(Vec<InstalledPackage>),
}

/// Package metadata backed by `installed.json`.
#[derive(Debug, Clone)]
pub struct InstalledJson {
    base_dir: PathBuf,
    packages: Vec<InstalledPackage>,
    by_name: HashMap<String, usize>,
}

impl InstalledJson {
    /// Read and parse an `installed.json` file.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let content = fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, &base_dir).map_err(|message| MetadataError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse `installed.json` content; install paths resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> std::result::Result<Self, String> {
        let file: InstalledFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let packages = match file {
            InstalledFile::V2 { packages } => packages,
            InstalledFile::V1(packages) => packages,
        };
        Ok(Self::from_packages(base_dir, packages))
    }

    /// Build from already-parsed entries.
    pub fn from_packages(base_dir: &Path, packages: Vec<InstalledPackage>) -> Self {
        let by_name = packages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self {
            base_dir: base_dir.to_path_buf(),
            packages,
            by_name,
        }
    }

    /// Number of installed packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether no packages are installed.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn get(&self, package: &str) -> Result<&InstalledPackage, MetadataError> {
        self.by_name
            .get(package)
            .map(|&i| &self.packages[i])
            .ok_or_else(|| MetadataError::UnknownPackage {
                package: package.to_string(),
            })
    }
}

impl PackageMetadata for InstalledJson {
    fn packages_by_type(&self, kind: &str) -> Result<Vec<String>, MetadataError> {
        Ok(self
            .packages
            .iter()
            .filter(|p| p.kind.as_deref() == Some(kind))
            .map(|p| p.name.clone())
            .collect())
    }

    fn install_path(&self, package: &str) -> Result<Option<PathBuf>, MetadataError> {
        let entry = self.get(package)?;
        Ok(entry
            .install_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| self.base_dir.join(p)))
    }

    fn pretty_version(&self, package: &str) -> Result<Option<String>, MetadataError> {
        let entry = self.get(package)?;
        Ok(entry.version.clone().filter(|v| !v.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V2: &str = r#"{
        "packages": [
            {
                "name": "drupal/webform",
                "version": "6.2.9",
                "type": "drupal-module",
                "install-path": "../../web/modules/contrib/webform"
            },
            {
                "name": "drupal/gin",
                "version": "3.0.0-rc12",
                "type": "drupal-theme",
                "install-path": "../../web/themes/contrib/gin"
            },
            {
                "name": "symfony/yaml",
                "version": "v6.4.3",
                "type": "library",
                "install-path": "../symfony/yaml"
            }
        ],
        "dev": true,
        "dev-package-names": []
    }"#;

    const V1: &str = r#"[
        {"name": "drupal/token", "version": "1.13.0", "type": "drupal-module"}
    ]"#;

    #[test]
    fn parses_composer_2_layout() {
        let meta = InstalledJson::parse(V2, Path::new("/site/vendor/composer")).unwrap();
        assert_eq!(meta.len(), 3);
        assert_eq!(
            meta.packages_by_type("drupal-module").unwrap(),
            vec!["drupal/webform".to_string()]
        );
    }

    #[test]
    fn parses_composer_1_layout() {
        let meta = InstalledJson::parse(V1, Path::new("/site/vendor/composer")).unwrap();
        assert_eq!(
            meta.pretty_version("drupal/token").unwrap().as_deref(),
            Some("1.13.0")
        );
        assert_eq!(meta.install_path("drupal/token").unwrap(), None);
    }

    #[test]
    fn install_path_is_relative_to_composer_dir() {
        let meta = InstalledJson::parse(V2, Path::new("/site/vendor/composer")).unwrap();
        let path = meta.install_path("drupal/webform").unwrap().unwrap();
        assert_eq!(
            path,
            Path::new("/site/vendor/composer/../../web/modules/contrib/webform")
        );
        assert_eq!(path.file_name().unwrap(), "webform");
    }

    #[test]
    fn unknown_package_is_an_error() {
        let meta = InstalledJson::parse(V2, Path::new("/")).unwrap();
        assert!(matches!(
            meta.pretty_version("drupal/nope"),
            Err(MetadataError::UnknownPackage { .. })
        ));
    }

    #[test]
    fn empty_version_is_absent() {
        let json = r#"{"packages": [{"name": "drupal/x", "version": "", "type": "drupal-module"}]}"#;
        let meta = InstalledJson::parse(json, Path::new("/")).unwrap();
        assert_eq!(meta.pretty_version("drupal/x").unwrap(), None);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(InstalledJson::parse("{not json", Path::new("/")).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = InstalledJson::load(&temp.path().join("installed.json")).unwrap_err();
        assert!(matches!(err, MetadataError::Read { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("installed.json");
        fs::write(&path, V2).unwrap();
        let meta = InstalledJson::load(&path).unwrap();
        let install = meta.install_path("drupal/webform").unwrap().unwrap();
        assert!(install.starts_with(temp.path()));
    }
}
