//! Project loading shared by the report and manifest commands.

use std::path::{Path, PathBuf};

use crate::composer::{load_or_unavailable, PackageMetadata};
use crate::config::{load_config, resolve_docroot, ModReportConfig};
use crate::error::{ModReportError, Result};
use crate::model::Module;
use crate::registry::{ExtensionRegistry, FilesystemRegistry};
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Exit code used when no Drupal docroot can be found.
pub const EXIT_NO_DOCROOT: u8 = 2;

/// Where to find the project and how to override its config.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Project root (holds `vendor/` and `.modreport/`).
    pub project_root: PathBuf,
    /// `--config` file replacing the discovered config files.
    pub config: Option<PathBuf>,
    /// `--docroot` override.
    pub docroot: Option<PathBuf>,
}

impl ProjectOptions {
    /// Options for `project_root` with no overrides.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config: None,
            docroot: None,
        }
    }
}

/// A loaded project: configuration and resolved docroot.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_root: PathBuf,
    pub config: ModReportConfig,
    pub docroot: PathBuf,
}

impl ProjectContext {
    /// Load configuration and locate the docroot.
    pub fn load(options: &ProjectOptions) -> Result<Self> {
        let mut config = load_config(&options.project_root, options.config.as_deref())?;
        if let Some(docroot) = &options.docroot {
            config.docroot = Some(docroot.clone());
        }
        let docroot = resolve_docroot(&options.project_root, &config)?;

        Ok(Self {
            project_root: options.project_root.clone(),
            config,
            docroot,
        })
    }

    /// Load the project, reporting a missing docroot to the user.
    ///
    /// `Ok(Err(result))` carries the failure result the command should return.
    pub fn load_or_report(
        options: &ProjectOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<std::result::Result<Self, CommandResult>> {
        match Self::load(options) {
            Ok(ctx) => Ok(Ok(ctx)),
            Err(ModReportError::DocrootNotFound { path }) => {
                ui.error(&format!(
                    "No Drupal docroot found at {}. Use --docroot to set it.",
                    path.display()
                ));
                Ok(Err(CommandResult::failure(EXIT_NO_DOCROOT)))
            }
            Err(e) => Err(e),
        }
    }

    /// Absolute path of Composer's `installed.json`.
    pub fn installed_json(&self) -> PathBuf {
        self.project_root.join(&self.config.installed_json)
    }

    /// Absolute path of the exported `core.extension.yml`.
    pub fn extension_config(&self) -> PathBuf {
        self.project_root.join(&self.config.extension_config)
    }

    /// Discover installed modules.
    pub fn modules(&self, ui: &mut dyn UserInterface) -> Result<Vec<Module>> {
        let extension_config = self.extension_config();
        if !extension_config.exists() {
            ui.warning(&format!(
                "{} not found; every module is reported as disabled",
                display_relative(&extension_config, &self.project_root)
            ));
        }

        FilesystemRegistry::new(&self.docroot)
            .with_extension_config(&extension_config)
            .with_test_modules(self.config.include_test_modules)
            .modules()
    }

    /// Composer metadata, or a provider that knows nothing.
    pub fn metadata(&self, ui: &mut dyn UserInterface) -> Box<dyn PackageMetadata> {
        let installed = self.installed_json();
        if !installed.exists() {
            ui.warning(&format!(
                "{} not found; package names are guessed from directory names",
                display_relative(&installed, &self.project_root)
            ));
        }
        load_or_unavailable(&installed)
    }
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_detects_docroot() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("web/core")).unwrap();

        let ctx = ProjectContext::load(&ProjectOptions::new(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.docroot, temp.path().join("web"));
        assert_eq!(
            ctx.installed_json(),
            temp.path().join("vendor/composer/installed.json")
        );
    }

    #[test]
    fn docroot_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("public")).unwrap();
        let mut options = ProjectOptions::new(temp.path().to_path_buf());
        options.docroot = Some(PathBuf::from("public"));

        let ctx = ProjectContext::load(&options).unwrap();
        assert_eq!(ctx.docroot, temp.path().join("public"));
    }

    #[test]
    fn missing_docroot_reports_exit_code_2() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome =
            ProjectContext::load_or_report(&ProjectOptions::new(temp.path().to_path_buf()), &mut ui)
                .unwrap();
        let result = outcome.unwrap_err();
        assert_eq!(result.exit_code, EXIT_NO_DOCROOT);
        assert!(ui.has_error("No Drupal docroot found"));
    }

    #[test]
    fn missing_metadata_warns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("web/core")).unwrap();
        let ctx = ProjectContext::load(&ProjectOptions::new(temp.path().to_path_buf())).unwrap();
        let mut ui = MockUI::new();

        let meta = ctx.metadata(&mut ui);
        assert!(meta.packages_by_type("drupal-module").is_err());
        assert!(ui.has_warning("vendor/composer/installed.json not found"));
    }
}
