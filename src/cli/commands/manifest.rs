//! Manifest command implementation.
//!
//! The `modreport manifest` command prints `"vendor/name": "^x.y",` lines
//! for every Composer package with at least one enabled module. With
//! `--output` or `--download` the lines are written to a file instead.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::report::{Reporter, MANIFEST_CONTENT_TYPE};
use crate::ui::UserInterface;

use super::context::{ProjectContext, ProjectOptions};
use super::dispatcher::{Command, CommandResult};

/// The manifest command implementation.
pub struct ManifestCommand {
    options: ProjectOptions,
    args: ManifestArgs,
}

impl ManifestCommand {
    /// Create a new manifest command.
    pub fn new(options: ProjectOptions, args: ManifestArgs) -> Self {
        Self { options, args }
    }

    /// Where to write the manifest, or `None` for stdout.
    fn target(&self, ctx: &ProjectContext) -> Result<Option<PathBuf>> {
        if let Some(output) = &self.args.output {
            return Ok(Some(output.clone()));
        }
        if self.args.download {
            let cwd = std::env::current_dir()?;
            return Ok(Some(cwd.join(&ctx.config.manifest_filename)));
        }
        Ok(None)
    }
}

impl Command for ManifestCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::load_or_report(&self.options, ui)? {
            Ok(ctx) => ctx,
            Err(result) => return Ok(result),
        };

        let modules = ctx.modules(ui)?;
        let metadata = ctx.metadata(ui);
        let reporter = Reporter::new(
            metadata.as_ref(),
            ctx.config.origin_rules(),
            &ctx.config.package_type,
        );
        let manifest = reporter.manifest(&modules);
        let content = manifest.render();

        let Some(path) = self.target(&ctx)? else {
            ui.data(&content);
            return Ok(CommandResult::success());
        };

        debug!(
            path = %path.display(),
            content_type = MANIFEST_CONTENT_TYPE,
            lines = manifest.len(),
            "Writing manifest"
        );
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        ui.success(&format!(
            "Wrote {} {} to {}",
            manifest.len(),
            if manifest.len() == 1 { "line" } else { "lines" },
            path.display()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn setup_site() -> TempDir {
        let temp = TempDir::new().unwrap();
        for (dir, machine) in [
            ("web/modules/contrib/foo", "foo"),
            ("web/modules/contrib/bar", "bar"),
            ("web/modules/custom/site", "site"),
        ] {
            let path = temp.path().join(dir);
            fs::create_dir_all(&path).unwrap();
            fs::write(
                path.join(format!("{}.info.yml", machine)),
                format!("name: {}\ntype: module\n", machine),
            )
            .unwrap();
        }
        fs::create_dir_all(temp.path().join("web/core")).unwrap();

        let composer = temp.path().join("vendor/composer");
        fs::create_dir_all(&composer).unwrap();
        fs::write(
            composer.join("installed.json"),
            r#"{"packages": [{"name": "vendor/foo", "version": "1.2.3",
                "type": "drupal-module", "install-path": "../../web/modules/contrib/foo"}]}"#,
        )
        .unwrap();

        let sync = temp.path().join("config/sync");
        fs::create_dir_all(&sync).unwrap();
        fs::write(sync.join("core.extension.yml"), "module:\n  foo: 0\n  site: 0\n").unwrap();
        temp
    }

    fn command(temp: &TempDir, args: ManifestArgs) -> ManifestCommand {
        ManifestCommand::new(ProjectOptions::new(temp.path().to_path_buf()), args)
    }

    #[test]
    fn prints_enabled_packages_to_stdout() {
        let temp = setup_site();
        let mut ui = MockUI::new();

        let result = command(&temp, ManifestArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.data_output(), "\"vendor/foo\": \"^1.2\",\n");
    }

    #[test]
    fn writes_to_output_file() {
        let temp = setup_site();
        let out = temp.path().join("requires.txt");
        let mut ui = MockUI::new();

        let args = ManifestArgs {
            output: Some(out.clone()),
            download: false,
        };
        let result = command(&temp, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "\"vendor/foo\": \"^1.2\",\n"
        );
        assert!(ui.has_success("Wrote 1 line to"));
        assert!(ui.data_output().is_empty());
    }

    #[test]
    fn empty_manifest_is_a_single_newline() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("web/core")).unwrap();
        let mut ui = MockUI::new();

        command(&temp, ManifestArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.data_output(), "\n");
    }

    #[test]
    fn missing_docroot_exits_2() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, ManifestArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.data_output().is_empty());
    }
}
