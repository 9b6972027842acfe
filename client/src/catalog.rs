//! Creature catalog lookups

use async_trait::async_trait;
use pokeduel_battle::{Creature, CreatureId};
use pokeduel_protocol::{id_from_resource_url, parse_catalog_listing, parse_catalog_record};
use reqwest::StatusCode;

use crate::error::ClientError;

/// One row of a catalog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// `None` when the resource url carries no numeric id
    pub id: Option<CreatureId>,
    pub name: String,
}

/// A slice of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub items: Vec<CatalogEntry>,
    /// Size of the whole catalog
    pub total_count: usize,
}

impl CatalogPage {
    /// Number of pages of `limit` entries covering the whole catalog
    pub fn total_pages(&self, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(limit)
    }
}

/// Read-only creature catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look a creature up by numeric id or by name
    async fn get_creature(&self, id_or_name: &str) -> Result<Creature, ClientError>;

    async fn list_creatures(&self, offset: usize, limit: usize) -> Result<CatalogPage, ClientError>;
}

/// Normalised lookup key; catalog names are lower-case
pub fn lookup_key(id_or_name: &str) -> String {
    id_or_name.trim().to_lowercase()
}

/// Catalog backed by a PokeAPI-compatible HTTP service
#[derive(Debug, Clone)]
pub struct PokeApiCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, url: &str, subject: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::CatalogUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(subject.to_string())),
            status if !status.is_success() => Err(ClientError::CatalogUnavailable(format!(
                "{url} returned {status}"
            ))),
            _ => response
                .text()
                .await
                .map_err(|e| ClientError::CatalogUnavailable(e.to_string())),
        }
    }
}

#[async_trait]
impl Catalog for PokeApiCatalog {
    async fn get_creature(&self, id_or_name: &str) -> Result<Creature, ClientError> {
        let key = lookup_key(id_or_name);
        if key.is_empty() {
            return Err(ClientError::NotFound(id_or_name.to_string()));
        }

        let url = format!("{}/pokemon/{key}", self.base_url);
        let body = self.fetch(&url, &key).await?;
        let record = parse_catalog_record(&body)?;

        tracing::debug!(id = record.id, name = %record.name, "Fetched creature");
        Ok(Creature::from_protocol(&record))
    }

    async fn list_creatures(&self, offset: usize, limit: usize) -> Result<CatalogPage, ClientError> {
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        let body = self.fetch(&url, "listing").await?;
        let listing = parse_catalog_listing(&body)?;

        Ok(CatalogPage {
            items: listing
                .results
                .into_iter()
                .map(|r| CatalogEntry {
                    id: id_from_resource_url(&r.url),
                    name: r.name,
                })
                .collect(),
            total_count: listing.count as usize,
        })
    }
}
