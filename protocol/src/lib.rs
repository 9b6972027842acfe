use thiserror::Error;

pub mod catalog;
pub mod store;

pub use catalog::{
    CatalogListing, CatalogRecord, NamedResource, Sprites, StatSlot, TypeSlot,
    id_from_resource_url, parse_catalog_listing, parse_catalog_record,
};
pub use store::{BattleRecord, LogEntry, LogKind, StatEntry, StoredCreature, Winner};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty payload")]
    EmptyPayload,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
