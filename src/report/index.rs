//! Directory-name to package-id index.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::composer::PackageMetadata;

/// Maps an install directory basename (`webform`) to its package id
/// (`drupal/webform`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    entries: BTreeMap<String, String>,
}

impl PackageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from installed packages of the given Composer type.
    ///
    /// Never fails: if the package list cannot be read the index is empty,
    /// and packages whose install path cannot be read are skipped.
    pub fn build(metadata: &dyn PackageMetadata, package_type: &str) -> Self {
        let mut index = Self::new();

        let packages = match metadata.packages_by_type(package_type) {
            Ok(packages) => packages,
            Err(e) => {
                debug!("Package index unavailable: {}", e);
                return index;
            }
        };

        for package in packages {
            let install_path = match metadata.install_path(&package) {
                Ok(Some(path)) => path,
                Ok(None) => continue,
                Err(e) => {
                    debug!("No install path for {}: {}", package, e);
                    continue;
                }
            };
            if let Some(dir) = directory_basename(&install_path) {
                index.insert(dir, &package);
            }
        }

        debug!("Indexed {} {} packages", index.len(), package_type);
        index
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, dir: &str, package: &str) {
        self.entries.insert(dir.to_string(), package.to_string());
    }

    /// Package id for a directory basename.
    pub fn get(&self, dir: &str) -> Option<&str> {
        self.entries.get(dir).map(String::as_str)
    }

    /// Number of indexed directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PackageIndex {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (dir, package) in iter {
            index.insert(dir, package);
        }
        index
    }
}

/// Final path segment, unless empty or a `.`/`..` marker.
fn directory_basename(path: &Path) -> Option<&str> {
    let raw = path.to_str()?.trim_end_matches(['/', '\\']);
    let last = raw.rsplit(['/', '\\']).next()?;
    match last {
        "" | "." | ".." => None,
        dir => Some(dir),
    }
}
