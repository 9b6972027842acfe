//! Creature catalog payloads
//!
//! The catalog speaks the PokeAPI v2 shape. Only the fields the team builder
//! reads are modelled; everything else in the payload is ignored.

mod tests;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A `{ name, url }` reference as used throughout the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of the `stats` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// One entry of the `types` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Artwork references of a catalog record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A single creature as returned by `GET /pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl CatalogRecord {
    /// Base value of a stat by its catalog name (`"hp"`, `"special-attack"`, ...)
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Best available artwork: official artwork, then the default sprite
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

/// A page of `GET /pokemon?offset=..&limit=..`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Parse a single catalog record from its JSON body
pub fn parse_catalog_record(body: &str) -> Result<CatalogRecord, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    let record: CatalogRecord = serde_json::from_str(body)?;
    if record.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }

    Ok(record)
}

/// Parse a listing page from its JSON body
pub fn parse_catalog_listing(body: &str) -> Result<CatalogListing, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    Ok(serde_json::from_str(body)?)
}

/// Extract the numeric id from a resource url like
/// `https://pokeapi.co/api/v2/pokemon/25/`
pub fn id_from_resource_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
