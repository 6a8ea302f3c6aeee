//! # Routes
//!
//! Maps an address (`path` + `?query`) to exactly one [`Route`].
//!
//! Matching is ordered, first match wins:
//!
//! ```text
//! 1. static table         /  /search  /about  /contact  /terms  /privacy  /disclaimer
//! 2. detail               /{movie|tv}/{id}
//! 3. list                 /{movie|tv}/{category}        (category must exist for the media type)
//! 4. genre                /{movie|tv}/genre/{id}/{name}
//! 5. anything else        NotFound
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::catalog::{ListCategory, MediaType};

/// Which navigation element is highlighted for a route.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Home,
    Movies,
    Tv,
    About,
    Search,
    Contact,
    Legal,
}

impl NavKey {
    pub fn as_str(self) -> &'static str {
        match self {
            NavKey::Home => "home",
            NavKey::Movies => "movies",
            NavKey::Tv => "tv",
            NavKey::About => "about",
            NavKey::Search => "search",
            NavKey::Contact => "contact",
            NavKey::Legal => "legal",
        }
    }
}

impl From<MediaType> for NavKey {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Movie => NavKey::Movies,
            MediaType::Tv => NavKey::Tv,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Home,
    Search,
    About,
    Contact,
    Terms,
    Privacy,
    Disclaimer,
    Detail {
        media_type: MediaType,
        id: u64,
    },
    List {
        media_type: MediaType,
        category: ListCategory,
    },
    Genre {
        media_type: MediaType,
        genre_id: u64,
        name: String,
    },
    NotFound,
}

fn match_static(path: &str) -> Option<Route> {
    let route = match path {
        "/" => Route::Home,
        "/search" => Route::Search,
        "/about" => Route::About,
        "/contact" => Route::Contact,
        "/terms" => Route::Terms,
        "/privacy" => Route::Privacy,
        "/disclaimer" => Route::Disclaimer,
        _ => return None,
    };
    Some(route)
}

/// Parses a non-empty run of ASCII digits.
fn numeric_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl Route {
    /// Resolves a path (no query string) to a route.
    pub fn resolve(path: &str) -> Route {
        if let Some(route) = match_static(path) {
            return route;
        }

        let Some(rest) = path.strip_prefix('/') else {
            return Route::NotFound;
        };
        let mut parts = rest.splitn(4, '/');
        let Some(media_type) = parts.next().and_then(MediaType::from_segment) else {
            return Route::NotFound;
        };
        let second = parts.next();
        let third = parts.next();
        let fourth = parts.next();

        match (second, third, fourth) {
            (Some(segment), None, None) => {
                if let Some(id) = numeric_id(segment) {
                    return Route::Detail { media_type, id };
                }
                match ListCategory::from_segment(segment) {
                    Some(category) if category.supports(media_type) => {
                        Route::List { media_type, category }
                    }
                    _ => Route::NotFound,
                }
            }
            (Some("genre"), Some(id), Some(name)) if !name.is_empty() => {
                let Some(genre_id) = numeric_id(id) else {
                    return Route::NotFound;
                };
                let name = urlencoding::decode(name)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| name.to_string());
                Route::Genre {
                    media_type,
                    genre_id,
                    name,
                }
            }
            _ => Route::NotFound,
        }
    }

    /// Highlight key, `None` for not-found.
    pub fn nav_key(&self) -> Option<NavKey> {
        match self {
            Route::Home => Some(NavKey::Home),
            Route::Search => Some(NavKey::Search),
            Route::About => Some(NavKey::About),
            Route::Contact => Some(NavKey::Contact),
            Route::Terms | Route::Privacy | Route::Disclaimer => Some(NavKey::Legal),
            Route::Detail { media_type, .. }
            | Route::List { media_type, .. }
            | Route::Genre { media_type, .. } => Some((*media_type).into()),
            Route::NotFound => None,
        }
    }

    /// Canonical path for the route. Not-found has no path of its own.
    pub fn path(&self) -> Option<String> {
        let path = match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Terms => "/terms".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Disclaimer => "/disclaimer".to_string(),
            Route::Detail { media_type, id } => format!("/{media_type}/{id}"),
            Route::List {
                media_type,
                category,
            } => format!("/{media_type}/{}", category.as_str()),
            Route::Genre {
                media_type,
                genre_id,
                name,
            } => format!(
                "/{media_type}/genre/{genre_id}/{}",
                urlencoding::encode(name)
            ),
            Route::NotFound => return None,
        };
        Some(path)
    }

    /// Location of another page of a paginated route.
    pub fn page_location(&self, page: u32) -> Option<Location> {
        match self {
            Route::List { .. } | Route::Genre { .. } => self
                .path()
                .map(|path| Location::new(path, format!("?page={page}"))),
            _ => None,
        }
    }

    /// Human title used in headings and document titles.
    pub fn heading(&self) -> Option<String> {
        let heading = match self {
            Route::Home | Route::Detail { .. } => return None,
            Route::Search => "Search".to_string(),
            Route::About => "About Filmiry".to_string(),
            Route::Contact => "Contact Us".to_string(),
            Route::Terms => "Terms of Service".to_string(),
            Route::Privacy => "Privacy Policy".to_string(),
            Route::Disclaimer => "Disclaimer".to_string(),
            Route::List {
                media_type,
                category,
            } => format!("{} {}", category.label(), media_type.plural_label()),
            Route::Genre {
                media_type, name, ..
            } => format!("{} {}", name, media_type.plural_label()),
            Route::NotFound => "Page Not Found".to_string(),
        };
        Some(heading)
    }
}

/// An address bar value: a path plus a query string that is either empty or
/// starts with `?`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        let path: String = path.into();
        let search: String = search.into();
        let search = if search.is_empty() || search == "?" {
            String::new()
        } else if search.starts_with('?') {
            search
        } else {
            format!("?{search}")
        };
        let path = if path.is_empty() { "/".to_string() } else { path };
        Self { path, search }
    }

    /// Splits an href like `/tv/popular?page=2#top` into path and query.
    /// Fragments are dropped.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, format!("?{query}")),
            None => Self::new(href, ""),
        }
    }

    /// The search page for a query.
    pub fn search_for(query: &str) -> Self {
        Self::new("/search", format!("?query={}", urlencoding::encode(query)))
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.search.trim_start_matches('?');
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// 1-based page from `?page=`. Anything that is not a positive integer
    /// falls back to 1.
    pub fn page(&self) -> u32 {
        self.query_param("page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.search)
    }
}

/// Everything a loader needs about the current navigation. Built fresh on
/// every dispatch.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub location: Location,
    pub route: Route,
    /// Trimmed `?query=`, empty when absent.
    pub query: String,
    pub page: u32,
}

impl PageRequest {
    pub fn from_location(location: &Location) -> Self {
        Self {
            route: Route::resolve(&location.path),
            query: location
                .query_param("query")
                .map(|q| q.trim().to_string())
                .unwrap_or_default(),
            page: location.page(),
            location: location.clone(),
        }
    }
}
