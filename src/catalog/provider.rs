use std::fmt;

use async_trait::async_trait;
use chrono::Utc;

use super::reviews;
use super::types::{
    Credits, Feed, Keyword, MediaDetail, MediaSummary, MediaType, Paginated, Review, Video,
};

/// Errors that can occur while talking to the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog misconfigured (missing API key, bad URL). Fatal at startup.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The catalog answered with a non-success status.
    Api { status: u16, message: String },
    /// Failed to parse the catalog's response.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "config error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only access to the movie/TV metadata catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns the name of the catalog backend.
    fn name(&self) -> &str;

    /// One page of a curated or trending feed.
    async fn list(
        &self,
        media_type: MediaType,
        feed: Feed,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError>;

    /// One page of titles tagged with a genre, most popular first.
    async fn by_genre(
        &self,
        media_type: MediaType,
        genre_id: u64,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError>;

    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError>;

    async fn details(&self, media_type: MediaType, id: u64) -> Result<MediaDetail, CatalogError>;

    async fn credits(&self, media_type: MediaType, id: u64) -> Result<Credits, CatalogError>;

    async fn keywords(&self, media_type: MediaType, id: u64) -> Result<Vec<Keyword>, CatalogError>;

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Paginated<MediaSummary>, CatalogError>;

    async fn videos(&self, media_type: MediaType, id: u64) -> Result<Vec<Video>, CatalogError>;

    /// User reviews. The catalog has none, so every backend serves the
    /// synthetic set seeded by the media id.
    async fn reviews(&self, id: u64) -> Result<Vec<Review>, CatalogError> {
        Ok(reviews::synthetic_reviews(id, Utc::now().date_naive()))
    }
}
