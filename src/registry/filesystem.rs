//! Docroot scanner.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{load_enabled_modules, ExtensionRegistry};
use crate::error::{ModReportError, Result};
use crate::model::Module;

const INFO_SUFFIX: &str = ".info.yml";

/// Directories never descended into.
const SKIP_DIRS: &[&str] = &["node_modules", "vendor"];

#[derive(Debug, Deserialize)]
struct InfoFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Discovers modules by walking a Drupal docroot.
#[derive(Debug, Clone)]
pub struct FilesystemRegistry {
    docroot: PathBuf,
    extension_config: Option<PathBuf>,
    include_test_modules: bool,
}

impl FilesystemRegistry {
    /// Create a registry for the given docroot.
    pub fn new(docroot: &Path) -> Self {
        Self {
            docroot: docroot.to_path_buf(),
            extension_config: None,
            include_test_modules: false,
        }
    }

    /// Read enabled state from this `core.extension.yml`.
    pub fn with_extension_config(mut self, path: &Path) -> Self {
        self.extension_config = Some(path.to_path_buf());
        self
    }

    /// Also list modules that live under a `tests` directory.
    pub fn with_test_modules(mut self, include: bool) -> Self {
        self.include_test_modules = include;
        self
    }

    /// The docroot being scanned.
    pub fn docroot(&self) -> &Path {
        &self.docroot
    }

    fn enabled_modules(&self) -> HashSet<String> {
        let Some(path) = &self.extension_config else {
            warn!("No core.extension.yml configured; all modules reported as disabled");
            return HashSet::new();
        };
        match load_enabled_modules(path) {
            Ok(enabled) => enabled,
            Err(e) => {
                warn!("{:#}; all modules reported as disabled", e);
                HashSet::new()
            }
        }
    }

    fn read_module(&self, entry: &DirEntry, enabled: &HashSet<String>) -> Option<Module> {
        let file_name = entry.file_name().to_str()?;
        let machine_name = file_name.strip_suffix(INFO_SUFFIX)?;
        if machine_name.is_empty() {
            return None;
        }

        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(e) => {
                debug!("Skipping unreadable {}: {}", entry.path().display(), e);
                return None;
            }
        };
        let info: InfoFile = match serde_yaml::from_str(&content) {
            Ok(info) => info,
            Err(e) => {
                debug!("Skipping invalid {}: {}", entry.path().display(), e);
                return None;
            }
        };
        if info.kind.as_deref() != Some("module") {
            return None;
        }

        let dir = entry.path().parent()?.strip_prefix(&self.docroot).ok()?;
        if !self.include_test_modules && is_test_path(dir) {
            return None;
        }

        let display_name = info
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| machine_name.to_string());

        Some(Module {
            machine_name: machine_name.to_string(),
            display_name,
            path: to_slash_path(dir),
            enabled: enabled.contains(machine_name),
        })
    }
}

impl ExtensionRegistry for FilesystemRegistry {
    fn modules(&self) -> Result<Vec<Module>> {
        if !self.docroot.is_dir() {
            return Err(ModReportError::DocrootNotFound {
                path: self.docroot.clone(),
            });
        }

        let enabled = self.enabled_modules();
        let mut seen = HashSet::new();
        let mut modules = Vec::new();

        let walker = WalkDir::new(&self.docroot)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(module) = self.read_module(&entry, &enabled) else {
                continue;
            };
            if !seen.insert(module.machine_name.clone()) {
                debug!(
                    "Ignoring duplicate module '{}' at {}",
                    module.machine_name, module.path
                );
                continue;
            }
            modules.push(module);
        }

        debug!(
            "Discovered {} modules under {}",
            modules.len(),
            self.docroot.display()
        );
        Ok(modules)
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIP_DIRS.contains(&name.as_ref())
}

fn is_test_path(dir: &Path) -> bool {
    dir.components()
        .any(|c| matches!(c, Component::Normal(s) if s == "tests"))
}

fn to_slash_path(dir: &Path) -> String {
    dir.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
