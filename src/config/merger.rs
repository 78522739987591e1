//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences and scalars in the overlay replace the base
//! - Null values in the overlay delete the corresponding key from the base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at every conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let merged = deep_merge(
            &yaml("fallback_namespace: drupal\npackage_type: drupal-module"),
            &yaml("fallback_namespace: acme"),
        );
        assert_eq!(merged["fallback_namespace"], "acme");
        assert_eq!(merged["package_type"], "drupal-module");
    }

    #[test]
    fn null_deletes_key() {
        let merged = deep_merge(&yaml("docroot: web\ncore_path: core/modules/"), &yaml("docroot: ~"));
        assert!(merged.get("docroot").is_none());
        assert_eq!(merged["core_path"], "core/modules/");
    }

    #[test]
    fn nested_mappings_merge() {
        let merged = deep_merge(&yaml("a:\n  b: 1\n  c: 2"), &yaml("a:\n  c: 3"));
        assert_eq!(merged["a"]["b"], 1);
        assert_eq!(merged["a"]["c"], 3);
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let merged = merge_configs(&[
            yaml("docroot: web"),
            yaml("docroot: docroot"),
            yaml("include_test_modules: true"),
        ]);
        assert_eq!(merged["docroot"], "docroot");
        assert_eq!(merged["include_test_modules"], true);
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
