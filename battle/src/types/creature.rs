//! Roster members

use pokeduel_protocol::{CatalogRecord, StatEntry, StoredCreature};

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Stable catalog identifier
pub type CreatureId = u32;

/// Artwork shown when neither official artwork nor a sprite is available
pub const PLACEHOLDER_ARTWORK: &str = "/placeholder.svg";

/// A roster member as fetched from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    /// Catalog id
    pub id: CreatureId,

    /// Catalog name (lower-case, e.g. "mr-mime")
    pub name: String,

    /// Base stats
    pub stats: BaseStats,

    /// Elemental categories, in slot order
    pub types: Vec<Type>,

    /// Artwork reference; `None` falls back to [`PLACEHOLDER_ARTWORK`]
    pub artwork: Option<String>,
}

impl Creature {
    pub fn new(id: CreatureId, name: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
            types: Vec::new(),
            artwork: None,
        }
    }

    /// Create from a catalog record
    pub fn from_protocol(record: &CatalogRecord) -> Self {
        let stats = BaseStats::from_named(
            record
                .stats
                .iter()
                .map(|s| (s.stat.name.as_str(), s.base_stat)),
        );

        Self {
            id: record.id,
            name: record.name.clone(),
            stats,
            types: record
                .type_names()
                .into_iter()
                .filter_map(Type::from_protocol)
                .collect(),
            artwork: record.artwork().map(str::to_string),
        }
    }

    /// Create from a roster store entry
    pub fn from_stored(stored: &StoredCreature) -> Self {
        Self {
            id: stored.id,
            name: stored.name.clone(),
            stats: BaseStats::from_named(stored.stats.iter().map(|s| (s.name.as_str(), s.value))),
            types: stored
                .types
                .iter()
                .filter_map(|t| Type::from_protocol(t))
                .collect(),
            artwork: stored.image.clone(),
        }
    }

    /// Convert to the roster store shape
    pub fn to_stored(&self) -> StoredCreature {
        StoredCreature {
            id: self.id,
            name: self.name.clone(),
            image: self.artwork.clone(),
            stats: self
                .stats
                .iter()
                .map(|(stat, value)| StatEntry {
                    name: stat.as_str().to_string(),
                    value,
                })
                .collect(),
            types: self.types.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    /// Name with the first letter capitalised ("pikachu" -> "Pikachu")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Name as it appears in battle logs ("PIKACHU")
    pub fn log_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Artwork reference or the placeholder
    pub fn artwork_or_placeholder(&self) -> &str {
        self.artwork.as_deref().unwrap_or(PLACEHOLDER_ARTWORK)
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeduel_protocol::parse_catalog_record;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "stats": [
            {"base_stat": 45, "stat": {"name": "hp"}},
            {"base_stat": 49, "stat": {"name": "attack"}},
            {"base_stat": 49, "stat": {"name": "defense"}},
            {"base_stat": 65, "stat": {"name": "special-attack"}},
            {"base_stat": 65, "stat": {"name": "special-defense"}},
            {"base_stat": 45, "stat": {"name": "speed"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "grass"}},
            {"slot": 2, "type": {"name": "poison"}}
        ],
        "sprites": {"front_default": "sprite.png", "other": {"official-artwork": {"front_default": null}}}
    }"#;

    #[test]
    fn test_from_protocol() {
        let record = parse_catalog_record(BULBASAUR).unwrap();
        let creature = Creature::from_protocol(&record);

        assert_eq!(creature.id, 1);
        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(creature.stats.hp, 45);
        assert_eq!(creature.stats.special_attack, 65);
        assert_eq!(creature.types, vec![Type::Grass, Type::Poison]);
        // No official artwork, falls back to the sprite
        assert_eq!(creature.artwork.as_deref(), Some("sprite.png"));
    }

    #[test]
    fn test_artwork_placeholder() {
        let creature = Creature::new(132, "ditto", BaseStats::new());
        assert_eq!(creature.artwork_or_placeholder(), PLACEHOLDER_ARTWORK);
    }

    #[test]
    fn test_stored_conversion() {
        let record = parse_catalog_record(BULBASAUR).unwrap();
        let creature = Creature::from_protocol(&record);

        let stored = creature.to_stored();
        assert_eq!(stored.stat("hp"), 45);
        assert_eq!(stored.stat("special-defense"), 65);
        assert_eq!(stored.types, vec!["grass", "poison"]);
        assert_eq!(stored.image.as_deref(), Some("sprite.png"));

        assert_eq!(Creature::from_stored(&stored), creature);
    }

    #[test]
    fn test_names() {
        let creature = Creature::new(122, "mr-mime", BaseStats::new());
        assert_eq!(creature.display_name(), "Mr-mime");
        assert_eq!(creature.log_name(), "MR-MIME");

        let unnamed = Creature::new(0, "", BaseStats::new());
        assert_eq!(unnamed.display_name(), "");
    }
}
