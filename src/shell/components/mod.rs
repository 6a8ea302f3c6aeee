pub mod feedback;
pub mod media_card;
pub mod pagination;
pub mod rating;

pub use feedback::{EmptyState, ErrorBlock, Skeleton, Spinner};
pub use media_card::{MediaCard, render_cards};
pub use pagination::PaginationControls;
pub use rating::{RatingCircle, StarRating};
