//! In-memory catalog for tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use pokeduel_battle::{BaseStats, Creature, CreatureId, Type};

use crate::catalog::{Catalog, CatalogEntry, CatalogPage, lookup_key};
use crate::error::ClientError;

pub struct FakeCatalog {
    creatures: BTreeMap<CreatureId, Creature>,
    available: bool,
}

impl FakeCatalog {
    /// Creatures `1..=count`, named `mon{id}`, with stats derived from the id
    pub fn numbered(count: CreatureId) -> Self {
        let creatures = (1..=count)
            .map(|id| {
                let mut stats = BaseStats::new();
                stats.hp = 40 + id % 50;
                stats.attack = 10 + id % 30;
                stats.defense = 10;
                stats.speed = 1 + id % 20;
                let mut creature = Creature::new(id, format!("mon{id}"), stats);
                creature.types = vec![Type::Normal];
                (id, creature)
            })
            .collect();

        Self {
            creatures,
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            creatures: BTreeMap::new(),
            available: false,
        }
    }

    pub fn without(mut self, id: CreatureId) -> Self {
        self.creatures.remove(&id);
        self
    }

    pub fn with(mut self, creature: Creature) -> Self {
        self.creatures.insert(creature.id, creature);
        self
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn get_creature(&self, id_or_name: &str) -> Result<Creature, ClientError> {
        if !self.available {
            return Err(ClientError::CatalogUnavailable("catalog offline".to_string()));
        }

        let key = lookup_key(id_or_name);
        let found = match key.parse::<CreatureId>() {
            Ok(id) => self.creatures.get(&id),
            Err(_) => self.creatures.values().find(|c| c.name == key),
        };
        found.cloned().ok_or(ClientError::NotFound(key))
    }

    async fn list_creatures(&self, offset: usize, limit: usize) -> Result<CatalogPage, ClientError> {
        if !self.available {
            return Err(ClientError::CatalogUnavailable("catalog offline".to_string()));
        }

        Ok(CatalogPage {
            items: self
                .creatures
                .values()
                .skip(offset)
                .take(limit)
                .map(|c| CatalogEntry {
                    id: Some(c.id),
                    name: c.name.clone(),
                })
                .collect(),
            total_count: self.creatures.len(),
        })
    }
}
