//! Module origin classification.

use super::PackageIndex;
use crate::model::{Module, Origin};

/// Path markers and naming used to classify module origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRules {
    /// Prefix of modules shipped with core.
    pub core_path: String,
    /// Marker preceding the project directory of contributed modules.
    pub contrib_marker: String,
    /// Marker of project-local modules.
    pub custom_marker: String,
    /// Namespace used to guess package ids that Composer does not know.
    pub fallback_namespace: String,
}

impl Default for OriginRules {
    fn default() -> Self {
        Self {
            core_path: "core/modules/".to_string(),
            contrib_marker: "modules/contrib/".to_string(),
            custom_marker: "modules/custom/".to_string(),
            fallback_namespace: "drupal".to_string(),
        }
    }
}

/// Decide where a module came from.
///
/// Checked in order: core path prefix, contrib marker (indexed package id,
/// else `<fallback_namespace>/<project>`), custom marker, unknown.
pub fn classify(module: &Module, index: &PackageIndex, rules: &OriginRules) -> Origin {
    if is_core(module, rules) {
        return Origin::Core;
    }

    let path = normalize(&module.path);

    if let Some(project) = contrib_project(&path, &normalize(&rules.contrib_marker)) {
        return match index.get(project) {
            Some(id) => Origin::Package {
                id: id.to_string(),
                guessed: false,
            },
            None => Origin::Package {
                id: format!("{}/{}", rules.fallback_namespace, project),
                guessed: true,
            },
        };
    }

    if path.contains(&normalize(&rules.custom_marker)) {
        return Origin::Custom;
    }

    Origin::Unknown
}

/// Whether a module lives under the core module tree.
pub fn is_core(module: &Module, rules: &OriginRules) -> bool {
    normalize(&module.path).starts_with(&normalize(&rules.core_path))
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// First path segment after the contrib marker, if non-empty.
fn contrib_project<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }
    let pos = path.find(marker)?;
    let after = &path[pos + marker.len()..];
    after.split('/').next().filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(path: &str) -> Module {
        Module::new("m", "M", path, true)
    }

    fn index() -> PackageIndex {
        [("webform", "drupal/webform"), ("foo", "vendor/foo")]
            .into_iter()
            .collect()
    }

    fn classify_path(path: &str) -> Origin {
        classify(&module(path), &index(), &OriginRules::default())
    }

    #[test]
    fn core_modules_are_core() {
        assert_eq!(classify_path("core/modules/node"), Origin::Core);
        assert!(is_core(&module("core/modules/node"), &OriginRules::default()));
    }

    #[test]
    fn core_check_is_a_prefix_match() {
        assert_ne!(classify_path("web/core/modules/node"), Origin::Core);
    }

    #[test]
    fn indexed_contrib_uses_index() {
        assert_eq!(
            classify_path("modules/contrib/foo"),
            Origin::Package {
                id: "vendor/foo".into(),
                guessed: false
            }
        );
    }

    #[test]
    fn submodules_use_project_root() {
        let origin = classify_path("modules/contrib/webform/modules/webform_ui");
        assert_eq!(origin.label(), "drupal/webform");
    }

    #[test]
    fn unindexed_contrib_is_guessed() {
        assert_eq!(
            classify_path("modules/contrib/bar"),
            Origin::Package {
                id: "drupal/bar".into(),
                guessed: true
            }
        );
    }

    #[test]
    fn fallback_namespace_is_configurable() {
        let rules = OriginRules {
            fallback_namespace: "acme".into(),
            ..Default::default()
        };
        let origin = classify(&module("modules/contrib/bar"), &index(), &rules);
        assert_eq!(origin.label(), "acme/bar");
    }

    #[test]
    fn backslashes_are_normalized() {
        assert_eq!(classify_path(r"modules\contrib\foo").label(), "vendor/foo");
        assert_eq!(classify_path(r"modules\custom\site"), Origin::Custom);
    }

    #[test]
    fn custom_modules_are_custom() {
        assert_eq!(classify_path("modules/custom/site_tools"), Origin::Custom);
        assert_eq!(classify_path("profiles/acme/modules/custom/x"), Origin::Custom);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(classify_path("modules/site_tools"), Origin::Unknown);
        assert_eq!(classify_path("modules/contrib"), Origin::Unknown);
    }

    #[test]
    fn empty_project_segment_falls_through() {
        assert_eq!(classify_path("modules/contrib//x"), Origin::Unknown);
    }
}
