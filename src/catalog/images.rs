/// Builds image URLs for catalog asset paths.
///
/// Asset paths come back from the catalog as `/abc123.jpg` and are served
/// from `{base}/{size}{path}`. Missing paths map to a sized placeholder.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const POSTER_PLACEHOLDER: &str = "https://placehold.co/300x450/1a1f2e/667eea?text=No+Image";
const BACKDROP_PLACEHOLDER: &str = "https://placehold.co/1280x720/1a1f2e/667eea?text=No+Image";
const PROFILE_PLACEHOLDER: &str = "https://placehold.co/140x175/eee/ccc?text=No+Image";

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn sized(&self, path: Option<&str>, size: &str, placeholder: &str) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(p) => format!("{}/{}{}", self.base_url, size, p),
            None => placeholder.to_string(),
        }
    }

    /// Poster image, `w500` unless a size is given.
    pub fn poster(&self, path: Option<&str>, size: Option<&str>) -> String {
        self.sized(path, size.unwrap_or("w500"), POSTER_PLACEHOLDER)
    }

    /// Backdrop image, `w1280` unless a size is given.
    pub fn backdrop(&self, path: Option<&str>, size: Option<&str>) -> String {
        self.sized(path, size.unwrap_or("w1280"), BACKDROP_PLACEHOLDER)
    }

    pub fn profile(&self, path: Option<&str>) -> String {
        self.sized(path, "w185", PROFILE_PLACEHOLDER)
    }
}
