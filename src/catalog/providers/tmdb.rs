//! TMDB (The Movie Database) v3 REST backend.
//!
//! Every request is a `GET` authenticated with the `api_key` query parameter.
//! List endpoints answer with the `{results, page, total_pages, total_results}`
//! envelope; detail endpoints answer with a flat record.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::catalog::types::{
    Credits, Feed, Keyword, KeywordsResponse, MediaDetail, MediaSummary, MediaType, Paginated,
    Video, VideosResponse,
};
use crate::catalog::{Catalog, CatalogError};
use crate::core::config::ResolvedConfig;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Error body TMDB sends alongside non-success statuses.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    status_message: Option<String>,
}

/// Path for a feed, relative to the API base.
fn feed_endpoint(media_type: MediaType, feed: Feed) -> String {
    match feed {
        Feed::Category(category) => format!("/{}/{}", media_type, category.as_str()),
        Feed::Trending => format!("/trending/{}/week", media_type),
    }
}

pub struct TmdbCatalog {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbCatalog {
    /// Creates a new TMDB catalog client.
    ///
    /// # Arguments
    /// * `api_key` - TMDB v3 API key
    /// * `base_url` - Optional custom base URL (defaults to TMDB's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds the client from resolved config. A missing or blank key is a
    /// configuration error; it is reported here once rather than per request.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                CatalogError::Config(
                    "TMDB API key is not configured (set TMDB_API_KEY or [tmdb] api_key)"
                        .to_string(),
                )
            })?;
        Ok(Self::new(
            api_key.to_string(),
            Some(config.tmdb_base_url.clone()),
        ))
    }

    /// Sends a GET to `endpoint` and decodes the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("TMDB request: {} {:?}", endpoint, params);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        debug!("TMDB response status for {}: {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| {
                    format!(
                        "API Error: {} {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("")
                    )
                    .trim_end()
                    .to_string()
                });
            warn!("TMDB error for {}: {} - {}", endpoint, status.as_u16(), message);
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("TMDB payload for {} did not parse: {}", endpoint, e);
            CatalogError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl Catalog for TmdbCatalog {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn list(
        &self,
        media_type: MediaType,
        feed: Feed,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.get(&feed_endpoint(media_type, feed), &[("page", page.to_string())])
            .await
    }

    async fn by_genre(
        &self,
        media_type: MediaType,
        genre_id: u64,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.get(
            &format!("/discover/{media_type}"),
            &[
                ("with_genres", genre_id.to_string()),
                ("page", page.to_string()),
                ("sort_by", "popularity.desc".to_string()),
            ],
        )
        .await
    }

    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.get(
            &format!("/search/{media_type}"),
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn details(&self, media_type: MediaType, id: u64) -> Result<MediaDetail, CatalogError> {
        self.get(&format!("/{media_type}/{id}"), &[]).await
    }

    async fn credits(&self, media_type: MediaType, id: u64) -> Result<Credits, CatalogError> {
        self.get(&format!("/{media_type}/{id}/credits"), &[]).await
    }

    async fn keywords(&self, media_type: MediaType, id: u64) -> Result<Vec<Keyword>, CatalogError> {
        let response: KeywordsResponse =
            self.get(&format!("/{media_type}/{id}/keywords"), &[]).await?;
        Ok(response.into_keywords())
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.get(&format!("/{media_type}/{id}/recommendations"), &[])
            .await
    }

    async fn videos(&self, media_type: MediaType, id: u64) -> Result<Vec<Video>, CatalogError> {
        let response: VideosResponse = self.get(&format!("/{media_type}/{id}/videos"), &[]).await?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ListCategory;
    use crate::core::config::{FilmiryConfig, resolve};

    #[test]
    fn test_feed_endpoints() {
        assert_eq!(
            feed_endpoint(MediaType::Movie, Feed::Category(ListCategory::NowPlaying)),
            "/movie/now_playing"
        );
        assert_eq!(
            feed_endpoint(MediaType::Tv, Feed::Category(ListCategory::OnTheAir)),
            "/tv/on_the_air"
        );
        assert_eq!(feed_endpoint(MediaType::Tv, Feed::Trending), "/trending/tv/week");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let catalog = TmdbCatalog::new("k".into(), Some("http://localhost:9999/3/".into()));
        assert_eq!(catalog.base_url, "http://localhost:9999/3");
        assert_eq!(catalog.name(), "tmdb");
    }

    #[test]
    fn test_from_config_rejects_missing_key() {
        let mut resolved = resolve(&FilmiryConfig::default(), None);
        resolved.tmdb_api_key = None;
        assert!(matches!(
            TmdbCatalog::from_config(&resolved),
            Err(CatalogError::Config(_))
        ));

        resolved.tmdb_api_key = Some("   ".to_string());
        assert!(matches!(
            TmdbCatalog::from_config(&resolved),
            Err(CatalogError::Config(_))
        ));

        resolved.tmdb_api_key = Some("abc123".to_string());
        let catalog = TmdbCatalog::from_config(&resolved).unwrap();
        assert_eq!(catalog.api_key, "abc123");
    }
}
