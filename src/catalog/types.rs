use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two kinds of media the catalog serves. Doubles as the first path
/// segment of every media route (`/movie/...`, `/tv/...`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "movie" => Some(MediaType::Movie),
            "tv" => Some(MediaType::Tv),
            _ => None,
        }
    }

    /// Plural label used in page headings ("Popular Movies", "Drama TV Shows").
    pub fn plural_label(self) -> &'static str {
        match self {
            MediaType::Movie => "Movies",
            MediaType::Tv => "TV Shows",
        }
    }

    /// schema.org type for structured data.
    pub fn schema_type(self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Tv => "TVSeries",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curated list endpoints. Some only exist for one media type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
    AiringToday,
    OnTheAir,
}

impl ListCategory {
    pub const ALL: [ListCategory; 6] = [
        ListCategory::Popular,
        ListCategory::TopRated,
        ListCategory::Upcoming,
        ListCategory::NowPlaying,
        ListCategory::AiringToday,
        ListCategory::OnTheAir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListCategory::Popular => "popular",
            ListCategory::TopRated => "top_rated",
            ListCategory::Upcoming => "upcoming",
            ListCategory::NowPlaying => "now_playing",
            ListCategory::AiringToday => "airing_today",
            ListCategory::OnTheAir => "on_the_air",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == segment)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListCategory::Popular => "Popular",
            ListCategory::TopRated => "Top Rated",
            ListCategory::Upcoming => "Upcoming",
            ListCategory::NowPlaying => "Now Playing",
            ListCategory::AiringToday => "Airing Today",
            ListCategory::OnTheAir => "On TV",
        }
    }

    /// Whether the catalog exposes this list for the given media type.
    pub fn supports(self, media_type: MediaType) -> bool {
        match self {
            ListCategory::Popular | ListCategory::TopRated => true,
            ListCategory::Upcoming | ListCategory::NowPlaying => media_type == MediaType::Movie,
            ListCategory::AiringToday | ListCategory::OnTheAir => media_type == MediaType::Tv,
        }
    }
}

/// Which paginated feed to pull for a media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Category(ListCategory),
    /// Weekly trending.
    Trending,
}

fn first_page() -> u32 {
    1
}

/// Envelope returned by every list-style endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Empty strings show up in catalog payloads where a value is unknown.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// A list entry. Movies carry `title`/`release_date`, TV shows carry
/// `name`/`first_air_date`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MediaSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

impl MediaSummary {
    pub fn display_title(&self) -> &str {
        present(&self.title)
            .or_else(|| present(&self.name))
            .unwrap_or("Untitled")
    }

    pub fn release(&self) -> Option<&str> {
        present(&self.release_date).or_else(|| present(&self.first_air_date))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Network {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Creator {
    pub id: u64,
    pub name: String,
}

/// Full record for a single movie or TV show.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MediaDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    // Movie only
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    // TV only
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
}

impl MediaDetail {
    pub fn display_title(&self) -> &str {
        present(&self.title)
            .or_else(|| present(&self.name))
            .unwrap_or("Untitled")
    }

    pub fn release(&self) -> Option<&str> {
        present(&self.release_date).or_else(|| present(&self.first_air_date))
    }

    pub fn overview(&self) -> Option<&str> {
        present(&self.overview)
    }

    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }

    /// Movie runtime, or the first listed episode runtime for TV.
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime
            .or_else(|| self.episode_run_time.first().copied())
            .filter(|m| *m > 0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    pub fn directors(&self) -> impl Iterator<Item = &CrewMember> {
        self.crew.iter().filter(|c| c.job == "Director")
    }

    /// Writing department, capped at two names.
    pub fn writers(&self) -> impl Iterator<Item = &CrewMember> {
        self.crew
            .iter()
            .filter(|c| c.department == "Writing")
            .take(2)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

/// Movie keywords come back under `keywords`, TV keywords under `results`.
#[derive(Deserialize, Debug, Default)]
pub struct KeywordsResponse {
    #[serde(default)]
    pub keywords: Option<Vec<Keyword>>,
    #[serde(default)]
    pub results: Option<Vec<Keyword>>,
}

impl KeywordsResponse {
    pub fn into_keywords(self) -> Vec<Keyword> {
        self.keywords.or(self.results).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// First YouTube trailer, if any.
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
}

/// A fabricated user review. See [`crate::catalog::reviews`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub avatar_url: String,
    /// 1..=5 stars
    pub rating: u8,
    pub created_at: NaiveDate,
    /// Paragraphs separated by `\n`.
    pub content: String,
}
