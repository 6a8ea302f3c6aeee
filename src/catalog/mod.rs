pub mod images;
pub mod provider;
pub mod providers;
pub mod reviews;
pub mod types;

pub use images::ImageUrls;
pub use provider::{Catalog, CatalogError};
pub use providers::TmdbCatalog;
pub use types::{
    Credits, Feed, Keyword, ListCategory, MediaDetail, MediaSummary, MediaType, Paginated, Review,
    Video,
};
