//! Configuration loading and layering.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and docroot resolution in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use modreport::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".modreport")).unwrap();
//! fs::write(temp.path().join(".modreport/config.yml"), "fallback_namespace: acme").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.fallback_namespace, "acme");
//! ```
//!
//! # Configuration File Locations
//!
//! Merged in this order, later files winning:
//! 1. Built-in defaults
//! 2. Project config (`.modreport/config.yml`)
//! 3. Local overrides (`.modreport/config.local.yml`)
//!
//! `--config <file>` replaces steps 2 and 3 with that single file.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_value, resolve_docroot, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::ModReportConfig;
