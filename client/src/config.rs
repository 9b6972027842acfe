use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_STORE_URL: &str = "http://localhost:3001";

/// Endpoints and limits of the arena
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base url of the PokeAPI-compatible catalog
    pub catalog_url: String,

    /// Base url of the json-server store holding `/team` and `/battles`
    pub store_url: String,

    /// Highest catalog id the opponent generator draws
    pub max_creature_id: u32,

    /// Members of a generated opponent roster
    pub opponent_size: usize,

    /// Creatures per catalog browsing page
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            store_url: DEFAULT_STORE_URL.to_string(),
            max_creature_id: 898,
            opponent_size: 6,
            page_size: 10,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `POKEDUEL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEDUEL_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(url) = lookup("POKEDUEL_STORE_URL") {
            config.store_url = url;
        }
        override_parsed(&lookup, "POKEDUEL_MAX_CREATURE_ID", &mut config.max_creature_id);
        override_parsed(&lookup, "POKEDUEL_OPPONENT_SIZE", &mut config.opponent_size);
        override_parsed(&lookup, "POKEDUEL_PAGE_SIZE", &mut config.page_size);

        config
    }
}

/// Replace `target` with the parsed variable; unparsable values are ignored
fn override_parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, target: &mut T) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => tracing::warn!(key, value = %raw, "Ignoring invalid configuration value"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.catalog_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.store_url, "http://localhost:3001");
        assert_eq!(config.max_creature_id, 898);
        assert_eq!(config.opponent_size, 6);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POKEDUEL_STORE_URL", "http://store:9000"),
            ("POKEDUEL_MAX_CREATURE_ID", "151"),
            ("POKEDUEL_PAGE_SIZE", " 20 "),
        ]));

        assert_eq!(config.store_url, "http://store:9000");
        assert_eq!(config.max_creature_id, 151);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_invalid_number_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[("POKEDUEL_OPPONENT_SIZE", "six")]));
        assert_eq!(config.opponent_size, 6);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig = serde_json::from_str(r#"{"max_creature_id": 386}"#).unwrap();
        assert_eq!(config.max_creature_id, 386);
        assert_eq!(config.page_size, 10);
    }
}
