use std::fmt::Write;

use crate::catalog::{ImageUrls, MediaSummary, MediaType};
use crate::shell::component::Component;
use crate::shell::components::rating::RatingCircle;
use crate::shell::format::{escape, format_date};

/// Poster card linking to a title's detail page. Carries `data-id` and
/// `data-media-type` so a click maps to `Action::OpenCard`.
pub struct MediaCard<'a> {
    pub item: &'a MediaSummary,
    pub media_type: MediaType,
    pub images: &'a ImageUrls,
}

impl Component for MediaCard<'_> {
    fn render(&self, out: &mut String) {
        let title = escape(self.item.display_title());
        let _ = write!(
            out,
            concat!(
                r#"<div class="movie-card" data-id="{id}" data-media-type="{media}" aria-label="View details for {title}">"#,
                r#"<div class="movie-poster"><img src="{poster}" alt="{title}" loading="lazy"></div>"#,
                r#"<div class="movie-card-content">"#
            ),
            id = self.item.id,
            media = self.media_type,
            title = title,
            poster = escape(&self.images.poster(self.item.poster_path.as_deref(), None)),
        );
        RatingCircle {
            vote_average: self.item.vote_average,
            size: 40,
        }
        .render(out);
        let _ = write!(
            out,
            r#"<h3 class="movie-title">{}</h3><p class="movie-date">{}</p></div></div>"#,
            title,
            format_date(self.item.release()),
        );
    }
}

/// Renders a card for each item.
pub fn render_cards(out: &mut String, items: &[MediaSummary], media_type: MediaType, images: &ImageUrls) {
    for item in items {
        MediaCard {
            item,
            media_type,
            images,
        }
        .render(out);
    }
}
