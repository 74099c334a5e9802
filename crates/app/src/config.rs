use shared_types::AppConfig;

const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse the embedded `config.toml`. A malformed file disables every
/// optional feature rather than failing the launch.
pub fn load() -> AppConfig {
    toml::from_str(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded config.toml is invalid, using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TOML).unwrap();
        assert!(config.features.quick_stats);
        assert!(config.features.module_badges);
    }

    #[test]
    fn load_never_panics() {
        let _ = load();
    }
}
