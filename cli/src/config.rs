//! CLI configuration from environment variables.

use std::env;

/// Default line printed between rendered recipes.
pub const DEFAULT_SEPARATOR: &str = "-----------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start from the fixture recipes instead of an empty catalog.
    pub seed: bool,
    /// Line printed after each rendered recipe.
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `RECIPEBOOK_SEED`: start with the fixture recipes (default: true)
    /// - `RECIPEBOOK_SEPARATOR`: line between recipes (default: "-----------------")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("RECIPEBOOK_SEED")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.seed);

        let separator = lookup("RECIPEBOOK_SEPARATOR")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.separator);

        Self { seed, separator }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_seed_flag() {
        assert!(!config_from(&[("RECIPEBOOK_SEED", "0")]).seed);
        assert!(!config_from(&[("RECIPEBOOK_SEED", "False")]).seed);
        assert!(config_from(&[("RECIPEBOOK_SEED", "1")]).seed);
        // Unparseable values fall back to the default.
        assert!(config_from(&[("RECIPEBOOK_SEED", "maybe")]).seed);
    }

    #[test]
    fn test_separator() {
        assert_eq!(
            config_from(&[("RECIPEBOOK_SEPARATOR", "====")]).separator,
            "===="
        );
        assert_eq!(
            config_from(&[("RECIPEBOOK_SEPARATOR", "")]).separator,
            DEFAULT_SEPARATOR
        );
    }
}
