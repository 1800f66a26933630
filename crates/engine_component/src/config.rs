//! World configuration.

/// Environment variable overriding [`WorldConfig::initial_capacity`].
pub const CAPACITY_ENV: &str = "ENGINE_WORLD_CAPACITY";
/// Environment variable overriding [`WorldConfig::default_name`].
pub const DEFAULT_NAME_ENV: &str = "ENGINE_DEFAULT_NAME";
/// Environment variable overriding [`WorldConfig::replace_components`].
pub const REPLACE_COMPONENTS_ENV: &str = "ENGINE_REPLACE_COMPONENTS";

/// Configuration for a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    /// Number of game objects the world reserves space for up front.
    pub initial_capacity: usize,
    /// Name given to game objects spawned without one.
    pub default_name: String,
    /// Whether attaching a component type the game object already has
    /// replaces the old value instead of failing.
    pub replace_components: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            default_name: String::new(),
            replace_components: false,
        }
    }
}

impl WorldConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `ENGINE_*` environment variables. Unset or
    /// unparsable variables keep their default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, using the same keys and
    /// fallbacks as [`from_env`](Self::from_env).
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(capacity) = lookup(CAPACITY_ENV).and_then(|v| v.trim().parse().ok()) {
            config.initial_capacity = capacity;
        }
        if let Some(name) = lookup(DEFAULT_NAME_ENV) {
            config.default_name = name;
        }
        if let Some(replace) = lookup(REPLACE_COMPONENTS_ENV).and_then(|v| parse_bool(&v)) {
            config.replace_components = replace;
        }
        config
    }

    /// Override the initial game-object capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Override the name given to unnamed game objects.
    #[must_use]
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Allow or forbid replacing an existing component of the same type.
    #[must_use]
    pub fn with_replace_components(mut self, replace: bool) -> Self {
        self.replace_components = replace;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WorldConfig::new();
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.default_name, "");
        assert!(!config.replace_components);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = WorldConfig::from_lookup(lookup(&[
            (CAPACITY_ENV, "128"),
            (DEFAULT_NAME_ENV, "New Game Object"),
            (REPLACE_COMPONENTS_ENV, "yes"),
        ]));
        assert_eq!(config.initial_capacity, 128);
        assert_eq!(config.default_name, "New Game Object");
        assert!(config.replace_components);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = WorldConfig::from_lookup(lookup(&[
            (CAPACITY_ENV, "lots"),
            (REPLACE_COMPONENTS_ENV, "maybe"),
        ]));
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = WorldConfig::new()
            .with_initial_capacity(8)
            .with_default_name("Empty")
            .with_replace_components(true);
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.default_name, "Empty");
        assert!(config.replace_components);
    }
}
