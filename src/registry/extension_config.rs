//! Enabled-module lookup from exported `core.extension.yml`.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct CoreExtension {
    #[serde(default)]
    module: BTreeMap<String, serde_yaml::Value>,
}

/// Machine names listed under `module:` in a `core.extension.yml` file.
pub fn load_enabled_modules(path: &Path) -> anyhow::Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_enabled_modules(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse the `module:` mapping of `core.extension.yml` content.
pub fn parse_enabled_modules(content: &str) -> anyhow::Result<HashSet<String>> {
    // An empty export deserializes as null.
    let parsed: Option<CoreExtension> = serde_yaml::from_str(content)?;
    Ok(parsed
        .unwrap_or_default()
        .module
        .into_keys()
        .collect())
}
