//! Extension discovery.
//!
//! An [`ExtensionRegistry`] enumerates the modules installed in a site.
//!
//! - [`FilesystemRegistry`] scans a docroot for `*.info.yml` files and reads
//!   enabled state from exported configuration
//! - [`InMemoryRegistry`] serves a fixed list (library callers, tests)

pub mod extension_config;
pub mod filesystem;

pub use extension_config::load_enabled_modules;
pub use filesystem::FilesystemRegistry;

use crate::error::Result;
use crate::model::Module;

/// Source of installed modules.
pub trait ExtensionRegistry {
    /// All installed modules, each machine name at most once.
    fn modules(&self) -> Result<Vec<Module>>;
}

/// Registry over a fixed list of modules.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    modules: Vec<Module>,
}

impl InMemoryRegistry {
    /// Create a registry serving `modules`.
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

impl ExtensionRegistry for InMemoryRegistry {
    fn modules(&self) -> Result<Vec<Module>> {
        Ok(self.modules.clone())
    }
}
