//! Composer package metadata.
//!
//! The report only ever reads three facts from Composer: which packages of a
//! given type are installed, where each one was installed, and its pretty
//! version. [`PackageMetadata`] is the seam for those reads. Every call is
//! fallible and callers treat a failure as "no data".
//!
//! - [`InstalledJson`] reads `vendor/composer/installed.json`
//! - [`Unavailable`] stands in when that file cannot be loaded

pub mod installed;

pub use installed::{InstalledJson, InstalledPackage};

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading package metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// No metadata source is available.
    #[error("package metadata unavailable: {reason}")]
    Unavailable { reason: String },

    /// The package is not installed.
    #[error("package not installed: {package}")]
    UnknownPackage { package: String },

    /// The metadata file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file is not valid.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Read-only view of installed Composer packages.
pub trait PackageMetadata {
    /// Names of installed packages of the given Composer type.
    fn packages_by_type(&self, kind: &str) -> Result<Vec<String>, MetadataError>;

    /// Absolute install path of a package, if Composer recorded one.
    fn install_path(&self, package: &str) -> Result<Option<PathBuf>, MetadataError>;

    /// Pretty version of a package (e.g. `3.6.2`, `dev-main`).
    fn pretty_version(&self, package: &str) -> Result<Option<String>, MetadataError>;
}

/// Metadata provider used when no Composer metadata could be loaded.
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    /// Create a provider that fails every call with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> MetadataError {
        MetadataError::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

impl PackageMetadata for Unavailable {
    fn packages_by_type(&self, _kind: &str) -> Result<Vec<String>, MetadataError> {
        Err(self.error())
    }

    fn install_path(&self, _package: &str) -> Result<Option<PathBuf>, MetadataError> {
        Err(self.error())
    }

    fn pretty_version(&self, _package: &str) -> Result<Option<String>, MetadataError> {
        Err(self.error())
    }
}

/// Load `installed.json`, degrading to [`Unavailable`] on any failure.
pub fn load_or_unavailable(path: &std::path::Path) -> Box<dyn PackageMetadata> {
    match InstalledJson::load(path) {
        Ok(installed) => {
            tracing::debug!(
                "Loaded {} packages from {}",
                installed.len(),
                path.display()
            );
            Box::new(installed)
        }
        Err(e) => {
            tracing::warn!("Composer metadata unavailable, guessing package names: {}", e);
            Box::new(Unavailable::new(e.to_string()))
        }
    }
}
