use serde::{Deserialize, Serialize};

/// Feature flags controlling optional pieces of the portal shell.
///
/// Parsed from `config.toml` embedded into the app at compile time. Every
/// field defaults to `false` so a missing or incomplete config file
/// disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the quick-stat cards on the dashboard.
    #[serde(default)]
    pub quick_stats: bool,
    /// Show pending-item badge counts on dashboard module cards.
    #[serde(default)]
    pub module_badges: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.quick_stats);
        assert!(!flags.module_badges);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            quick_stats = true
            "#,
        )
        .unwrap();
        assert!(config.features.quick_stats);
        assert!(!config.features.module_badges);
    }
}
