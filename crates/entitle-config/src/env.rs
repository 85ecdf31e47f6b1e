use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::merge::set_path;

/// Environment variables that override config fields, and the field each
/// one sets.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("ENTITLE_LOG_LEVEL", "logging.level"),
    ("ENTITLE_LOG_FORMAT", "logging.format"),
    ("ENTITLE_OUTPUT_FORMAT", "output.format"),
    ("ENTITLE_DEFAULT_KIND", "parser.default_kind"),
];

/// Snapshot every `ENTITLE_*` variable from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("ENTITLE_"))
        .collect()
}

/// Apply the known overrides present in `env` to the merged config tree.
///
/// Empty values are ignored. Returns the number of fields overridden.
pub fn apply_env_overrides<S: BuildHasher>(
    merged: &mut toml::Value,
    env: &HashMap<String, String, S>,
) -> usize {
    let mut applied: usize = 0;
    for (var, field) in ENV_OVERRIDES {
        if let Some(value) = env.get(*var).filter(|v| !v.is_empty()) {
            set_path(merged, field, value);
            tracing::debug!(var, field, "applied environment override");
            applied = applied.saturating_add(1);
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_env_overrides() {
        let mut merged: toml::Value = toml::from_str(include_str!("defaults.toml")).unwrap();
        let env = HashMap::from([
            ("ENTITLE_LOG_LEVEL".to_owned(), "debug".to_owned()),
            ("ENTITLE_OUTPUT_FORMAT".to_owned(), String::new()),
            ("UNRELATED".to_owned(), "x".to_owned()),
        ]);

        assert_eq!(apply_env_overrides(&mut merged, &env), 1);
        assert_eq!(merged["logging"]["level"].as_str(), Some("debug"));
        assert_eq!(merged["output"]["format"].as_str(), Some("pretty"));
    }

    #[test]
    fn test_apply_env_overrides_custom_hasher() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::BuildHasherDefault;

        let mut merged: toml::Value = toml::from_str(include_str!("defaults.toml")).unwrap();
        let mut env: HashMap<String, String, BuildHasherDefault<DefaultHasher>> =
            HashMap::default();
        env.insert("ENTITLE_DEFAULT_KIND".to_owned(), "str".to_owned());

        assert_eq!(apply_env_overrides(&mut merged, &env), 1);
        assert_eq!(merged["parser"]["default_kind"].as_str(), Some("str"));
    }
}
