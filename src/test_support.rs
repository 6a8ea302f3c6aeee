//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::catalog::reviews::synthetic_reviews;
use crate::catalog::{
    Catalog, CatalogError, Credits, Feed, ImageUrls, Keyword, MediaDetail, MediaSummary,
    MediaType, Paginated, Review, Video,
};
use crate::core::metadata::SiteInfo;
use crate::core::route::Location;
use crate::shell::App;

/// Request kinds, as recorded in [`StubCatalog::calls`].
pub const LIST: &str = "list";
pub const GENRE: &str = "genre";
pub const SEARCH: &str = "search";
pub const DETAILS: &str = "details";
pub const CREDITS: &str = "credits";
pub const KEYWORDS: &str = "keywords";
pub const RECOMMENDATIONS: &str = "recommendations";
pub const VIDEOS: &str = "videos";
pub const REVIEWS: &str = "reviews";

/// Yields before answering a slow request.
const SLOW_YIELDS: usize = 8;

/// An in-memory catalog with scripted answers. Records every request as
/// `"{kind} {args}"` so tests can assert on what was (or wasn't) fetched.
pub struct StubCatalog {
    pub list_results: Vec<MediaSummary>,
    pub total_pages: u32,
    pub movie_results: Vec<MediaSummary>,
    pub tv_results: Vec<MediaSummary>,
    pub detail: MediaDetail,
    pub credits: Credits,
    pub keywords: Vec<Keyword>,
    pub recommendations: Vec<MediaSummary>,
    pub videos: Vec<Video>,
    /// Request kinds that fail with a 500.
    pub failing: Vec<&'static str>,
    /// Request kinds that yield a few times before answering.
    pub slow: Vec<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self {
            list_results: summaries(20, "Item"),
            total_pages: 5,
            movie_results: Vec::new(),
            tv_results: Vec::new(),
            detail: MediaDetail {
                id: 42,
                title: Some("Stub Movie".to_string()),
                release_date: Some("2001-02-03".to_string()),
                overview: Some("A stub overview.".to_string()),
                vote_average: 7.3,
                ..Default::default()
            },
            credits: Credits::default(),
            keywords: Vec::new(),
            recommendations: Vec::new(),
            videos: Vec::new(),
            failing: Vec::new(),
            slow: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of recorded requests of one kind.
    pub fn count(&self, kind: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(' ').next() == Some(kind))
            .count()
    }

    async fn answer<T>(&self, kind: &'static str, args: String, value: T) -> Result<T, CatalogError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(format!("{kind} {args}"));
        }
        if self.slow.contains(&kind) {
            for _ in 0..SLOW_YIELDS {
                tokio::task::yield_now().await;
            }
        }
        if self.failing.contains(&kind) {
            return Err(CatalogError::Api {
                status: 500,
                message: format!("{kind} unavailable"),
            });
        }
        Ok(value)
    }

    fn page(&self, results: Vec<MediaSummary>, page: u32) -> Paginated<MediaSummary> {
        let total_results = results.len() as u64 * u64::from(self.total_pages.max(1));
        Paginated {
            results,
            page,
            total_pages: self.total_pages,
            total_results,
        }
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list(
        &self,
        media_type: MediaType,
        feed: Feed,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let feed = match feed {
            Feed::Category(category) => category.as_str(),
            Feed::Trending => "trending",
        };
        let value = self.page(self.list_results.clone(), page);
        self.answer(LIST, format!("{media_type} {feed} {page}"), value).await
    }

    async fn by_genre(
        &self,
        media_type: MediaType,
        genre_id: u64,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let value = self.page(self.list_results.clone(), page);
        self.answer(GENRE, format!("{media_type} {genre_id} {page}"), value).await
    }

    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let results = match media_type {
            MediaType::Movie => self.movie_results.clone(),
            MediaType::Tv => self.tv_results.clone(),
        };
        let total_results = results.len() as u64;
        let value = Paginated {
            results,
            page,
            total_pages: 1,
            total_results,
        };
        self.answer(SEARCH, format!("{media_type} {query} {page}"), value).await
    }

    async fn details(&self, media_type: MediaType, id: u64) -> Result<MediaDetail, CatalogError> {
        let mut detail = self.detail.clone();
        detail.id = id;
        self.answer(DETAILS, format!("{media_type} {id}"), detail).await
    }

    async fn credits(&self, media_type: MediaType, id: u64) -> Result<Credits, CatalogError> {
        self.answer(CREDITS, format!("{media_type} {id}"), self.credits.clone()).await
    }

    async fn keywords(&self, media_type: MediaType, id: u64) -> Result<Vec<Keyword>, CatalogError> {
        self.answer(KEYWORDS, format!("{media_type} {id}"), self.keywords.clone()).await
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let value = self.page(self.recommendations.clone(), 1);
        self.answer(RECOMMENDATIONS, format!("{media_type} {id}"), value).await
    }

    async fn videos(&self, media_type: MediaType, id: u64) -> Result<Vec<Video>, CatalogError> {
        self.answer(VIDEOS, format!("{media_type} {id}"), self.videos.clone()).await
    }

    async fn reviews(&self, id: u64) -> Result<Vec<Review>, CatalogError> {
        let reviews = synthetic_reviews(id, reference_date());
        self.answer(REVIEWS, id.to_string(), reviews).await
    }
}

/// Fixed "today" for deterministic review dates.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

/// `n` summaries with ids `1..=n`, titled `"{prefix} {id}"`.
pub fn summaries(n: u64, prefix: &str) -> Vec<MediaSummary> {
    (1..=n)
        .map(|id| MediaSummary {
            id,
            title: Some(format!("{prefix} {id}")),
            release_date: Some("2020-01-01".to_string()),
            vote_average: 6.5,
            poster_path: Some(format!("/poster{id}.jpg")),
            backdrop_path: Some(format!("/backdrop{id}.jpg")),
            ..Default::default()
        })
        .collect()
}

pub fn test_site() -> SiteInfo {
    SiteInfo {
        name: "Filmiry".to_string(),
        origin: "https://filmiry.test".to_string(),
    }
}

/// Creates a test App at `href` backed by `catalog`. Nothing is dispatched.
pub fn test_app(catalog: Arc<StubCatalog>, href: &str) -> App {
    App::new(catalog, test_site(), ImageUrls::default(), Location::parse(href))
}
