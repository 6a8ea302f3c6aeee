//! # Document Metadata
//!
//! Title, description, canonical URL and one JSON-LD payload per navigation.
//! Generic pages describe the site (`WebSite` + `SearchAction`); detail pages
//! describe the title (`Movie` / `TVSeries`).

use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::{Credits, ImageUrls, MediaDetail, MediaType};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;

/// Longest overview excerpt used as a meta description.
const DESCRIPTION_LIMIT: usize = 160;
/// Cast members listed as `actor` in structured data.
const SCHEMA_ACTORS: usize = 5;

/// Site identity used to build metadata.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub name: String,
    pub origin: String,
}

impl SiteInfo {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            name: config.site_name.clone(),
            origin: config.origin.clone(),
        }
    }

    /// Rewrites an absolute link to this site as a root-relative one, so
    /// `https://site/about` is followed like `/about`. Other links are
    /// returned unchanged.
    pub fn local_href(&self, href: &str) -> String {
        match href.strip_prefix(self.origin.as_str()) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            Some(rest) if rest.starts_with('?') => format!("/{rest}"),
            _ => href.to_string(),
        }
    }

    fn canonical(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn default_title(&self) -> String {
        format!("{} - Movie & TV Show Discovery", self.name)
    }

    fn default_description(&self) -> String {
        format!(
            "Explore millions of movies and TV shows. Get ratings, reviews, and recommendations on {}.",
            self.name
        )
    }

    fn website_schema(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "url": self.origin,
            "name": self.name,
            "potentialAction": {
                "@type": "SearchAction",
                "target": format!("{}/search?query={{search_term_string}}", self.origin),
                "query-input": "required name=search_term_string",
            },
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub structured_data: Value,
}

impl PageMetadata {
    /// Site-wide defaults for `path`.
    pub fn site_default(site: &SiteInfo, path: &str) -> Self {
        Self {
            title: site.default_title(),
            description: site.default_description(),
            canonical: site.canonical(path),
            structured_data: site.website_schema(),
        }
    }

    /// Generic metadata for a non-detail route. Pages with a heading get it
    /// in the title; the description and schema stay site-wide.
    pub fn for_route(site: &SiteInfo, route: &Route, path: &str) -> Self {
        let mut metadata = Self::site_default(site, path);
        if let Some(heading) = route.heading() {
            metadata.title = format!("{} - {}", heading, site.name);
        }
        metadata
    }

    /// Metadata for a detail page built from fetched details and credits.
    pub fn for_media(
        site: &SiteInfo,
        path: &str,
        media_type: MediaType,
        details: &MediaDetail,
        credits: &Credits,
        images: &ImageUrls,
    ) -> Self {
        let name = details.display_title();
        let title = match details.release_year() {
            Some(year) => format!("{} ({}) - {}", name, year, site.name),
            None => format!("{} - {}", name, site.name),
        };
        let description = match details.overview() {
            Some(overview) => {
                let excerpt: String = overview.chars().take(DESCRIPTION_LIMIT).collect();
                format!("{excerpt}...")
            }
            None => format!("Details about {name}."),
        };

        let mut schema = json!({
            "@context": "https://schema.org",
            "@type": media_type.schema_type(),
            "name": name,
            "description": details.overview(),
            "image": images.poster(details.poster_path.as_deref(), None),
            "datePublished": details.release(),
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": format!("{:.1}", details.vote_average),
                "bestRating": "10",
                "ratingCount": details.vote_count,
            },
        });
        if let Some(director) = credits.directors().next() {
            schema["director"] = json!({ "@type": "Person", "name": director.name });
        }
        let actors: Vec<Value> = credits
            .cast
            .iter()
            .take(SCHEMA_ACTORS)
            .map(|a| json!({ "@type": "Person", "name": a.name }))
            .collect();
        if !actors.is_empty() {
            schema["actor"] = Value::Array(actors);
        }

        Self {
            title,
            description,
            canonical: site.canonical(path),
            structured_data: schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{CastMember, CrewMember};

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Filmiry".to_string(),
            origin: "https://filmiry.test".to_string(),
        }
    }

    fn fight_club() -> MediaDetail {
        MediaDetail {
            id: 550,
            title: Some("Fight Club".to_string()),
            overview: Some("x".repeat(200)),
            release_date: Some("1999-10-15".to_string()),
            vote_average: 8.433,
            vote_count: 26280,
            poster_path: Some("/poster.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_site_default_uses_website_schema() {
        let metadata = PageMetadata::site_default(&site(), "/");
        assert_eq!(metadata.title, "Filmiry - Movie & TV Show Discovery");
        assert_eq!(metadata.canonical, "https://filmiry.test/");
        assert_eq!(metadata.structured_data["@type"], "WebSite");
        assert_eq!(
            metadata.structured_data["potentialAction"]["target"],
            "https://filmiry.test/search?query={search_term_string}"
        );
    }

    #[test]
    fn test_route_heading_feeds_title() {
        let route = Route::resolve("/movie/top_rated");
        let metadata = PageMetadata::for_route(&site(), &route, "/movie/top_rated");
        assert_eq!(metadata.title, "Top Rated Movies - Filmiry");
        assert_eq!(metadata.structured_data["@type"], "WebSite");
        assert_eq!(
            PageMetadata::for_route(&site(), &Route::Home, "/").title,
            "Filmiry - Movie & TV Show Discovery"
        );
    }

    #[test]
    fn test_media_metadata() {
        let credits = Credits {
            cast: (0..8)
                .map(|i| CastMember {
                    id: i,
                    name: format!("Actor {i}"),
                    character: String::new(),
                    profile_path: None,
                })
                .collect(),
            crew: vec![CrewMember {
                id: 7467,
                name: "David Fincher".to_string(),
                job: "Director".to_string(),
                department: "Directing".to_string(),
            }],
        };
        let metadata = PageMetadata::for_media(
            &site(),
            "/movie/550",
            MediaType::Movie,
            &fight_club(),
            &credits,
            &ImageUrls::default(),
        );

        assert_eq!(metadata.title, "Fight Club (1999) - Filmiry");
        assert_eq!(metadata.description.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(metadata.description.ends_with("..."));
        assert_eq!(metadata.canonical, "https://filmiry.test/movie/550");

        let schema = &metadata.structured_data;
        assert_eq!(schema["@type"], "Movie");
        assert_eq!(schema["aggregateRating"]["ratingValue"], "8.4");
        assert_eq!(schema["aggregateRating"]["ratingCount"], 26280);
        assert_eq!(schema["director"]["name"], "David Fincher");
        assert_eq!(schema["actor"].as_array().map(Vec::len), Some(SCHEMA_ACTORS));
    }

    #[test]
    fn test_media_metadata_without_overview_or_people() {
        let details = MediaDetail {
            id: 1,
            name: Some("Quiet Show".to_string()),
            ..Default::default()
        };
        let metadata = PageMetadata::for_media(
            &site(),
            "/tv/1",
            MediaType::Tv,
            &details,
            &Credits::default(),
            &ImageUrls::default(),
        );
        assert_eq!(metadata.title, "Quiet Show - Filmiry");
        assert_eq!(metadata.description, "Details about Quiet Show.");
        assert_eq!(metadata.structured_data["@type"], "TVSeries");
        assert!(metadata.structured_data.get("director").is_none());
        assert!(metadata.structured_data.get("actor").is_none());
    }

    #[test]
    fn test_local_href_strips_own_origin_only() {
        let site = site();
        assert_eq!(site.local_href("https://filmiry.test/about"), "/about");
        assert_eq!(site.local_href("https://filmiry.test"), "/");
        assert_eq!(site.local_href("https://filmiry.test?page=2"), "/?page=2");
        assert_eq!(site.local_href("/tv/popular"), "/tv/popular");
        assert_eq!(
            site.local_href("https://filmiry.test.evil.example/x"),
            "https://filmiry.test.evil.example/x"
        );
        assert_eq!(
            site.local_href("https://www.themoviedb.org/movie/603"),
            "https://www.themoviedb.org/movie/603"
        );
    }
}
