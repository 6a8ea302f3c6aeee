//! Home page: a hero with a random popular backdrop, four independent rows
//! and a banner ad.

use std::fmt::Write;

use futures::future::join_all;
use log::{debug, warn};
use rand::Rng;

use super::PageContext;
use crate::catalog::{Feed, ListCategory, MediaSummary, MediaType};
use crate::shell::component::Component;
use crate::shell::components::{ErrorBlock, Skeleton, render_cards};
use crate::shell::document::Region;
use crate::shell::format::escape;

pub const HERO_REGION: &str = "hero";
pub const BANNER_REGION: &str = "banner-ad";

/// The hero backdrop is picked from this many popular movies.
const HERO_CANDIDATES: usize = 10;
/// Cards shown per row.
const ROW_LIMIT: usize = 20;
const ROW_SKELETON_CARDS: usize = 10;

struct HomeRow {
    title: &'static str,
    media_type: MediaType,
    feed: Feed,
}

static ROWS: [HomeRow; 4] = [
    HomeRow {
        title: "Trending Movies",
        media_type: MediaType::Movie,
        feed: Feed::Trending,
    },
    HomeRow {
        title: "Trending TV Shows",
        media_type: MediaType::Tv,
        feed: Feed::Trending,
    },
    HomeRow {
        title: "Popular Movies",
        media_type: MediaType::Movie,
        feed: Feed::Category(ListCategory::Popular),
    },
    HomeRow {
        title: "Popular TV Shows",
        media_type: MediaType::Tv,
        feed: Feed::Category(ListCategory::Popular),
    },
];

impl HomeRow {
    /// `Trending TV Shows` → `row-trending-tv-shows`
    fn region_id(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("row-{slug}")
    }

    fn render(&self, track: &str) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            concat!(
                r#"<div class="movie-row"><div class="row-header">"#,
                r#"<h3 class="row-title">{title}</h3>"#,
                r#"<a href="/{media}/popular" class="see-all-link">See all</a></div>"#,
                r#"<div class="row-carousel-container"><div class="row-carousel-wrapper">"#,
                r#"<div class="row-carousel-track">{track}</div>"#,
                "</div></div></div>"
            ),
            title = self.title,
            media = self.media_type,
            track = track,
        );
        out
    }
}

fn hero_html(backdrop: Option<&str>) -> String {
    let style = match backdrop {
        Some(url) => format!("background-image: url({})", escape(url)),
        None => "background-color: var(--dark-bg)".to_string(),
    };
    format!(
        concat!(
            r#"<section class="hero" id="hero-section" style="{}">"#,
            r#"<div class="hero-content"><div class="container">"#,
            r#"<h1 class="hero-title">Welcome.</h1>"#,
            r#"<h2 class="hero-subtitle">Millions of movies &amp; TV shows to discover. Explore now.</h2>"#,
            r#"<form class="hero-search-form" id="hero-search-form" action="/search">"#,
            r#"<input type="text" class="hero-search-input" name="query" placeholder="Search for a movie or TV show...">"#,
            r#"<button type="submit" class="hero-search-btn">Search</button>"#,
            "</form></div></div></section>"
        ),
        style
    )
}

/// Picks the hero item among the first few results.
pub fn pick_hero<'a, R: Rng + ?Sized>(
    results: &'a [MediaSummary],
    rng: &mut R,
) -> Option<&'a MediaSummary> {
    let candidates = &results[..results.len().min(HERO_CANDIDATES)];
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len()))
}

async fn load_hero(ctx: &PageContext<'_>) {
    let backdrop = match ctx
        .catalog
        .list(MediaType::Movie, Feed::Category(ListCategory::Popular), 1)
        .await
    {
        Ok(result) => {
            let pick = pick_hero(&result.results, &mut rand::rng());
            pick.map(|m| ctx.images.backdrop(m.backdrop_path.as_deref(), Some("original")))
        }
        Err(e) => {
            warn!("Failed to load hero background: {}", e);
            None
        }
    };
    ctx.replace(HERO_REGION, hero_html(backdrop.as_deref()));
}

async fn load_row(ctx: &PageContext<'_>, row: &HomeRow) {
    let track = match ctx.catalog.list(row.media_type, row.feed, 1).await {
        Ok(result) if result.results.is_empty() => {
            r#"<p class="empty-state">No items to display.</p>"#.to_string()
        }
        Ok(result) => {
            let mut out = String::new();
            let shown = &result.results[..result.results.len().min(ROW_LIMIT)];
            render_cards(&mut out, shown, row.media_type, ctx.images);
            out
        }
        Err(e) => {
            warn!("Failed to load row '{}': {}", row.title, e);
            ErrorBlock {
                message: "Could not load this category.",
            }
            .to_html()
        }
    };
    if !ctx.replace(&row.region_id(), row.render(&track)) {
        debug!("Row '{}' finished after navigation moved on", row.title);
    }
}

pub async fn load(ctx: &PageContext<'_>) {
    let skeleton = Skeleton {
        count: ROW_SKELETON_CARDS,
    }
    .to_html();

    let mut regions = vec![Region::new(
        HERO_REGION,
        r#"<section class="hero" id="hero-section"></section>"#,
    )];
    regions.extend(
        ROWS.iter()
            .map(|row| Region::new(row.region_id(), row.render(&skeleton))),
    );
    regions.push(Region::new(
        BANNER_REGION,
        r#"<div class="ad-slot-container container"><div class="ad-slot ad-slot--banner"><p>Ad Slot - 728x90</p></div></div>"#,
    ));
    ctx.mount(regions);

    futures::join!(
        load_hero(ctx),
        join_all(ROWS.iter().map(|row| load_row(ctx, row)))
    );
}
