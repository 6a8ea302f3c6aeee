pub mod tmdb;

pub use tmdb::TmdbCatalog;
