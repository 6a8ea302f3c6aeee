//! List and genre pages: one page of results in a grid, with pagination.

use std::fmt::Write;

use log::warn;

use super::PageContext;
use crate::catalog::{
    CatalogError, Feed, ImageUrls, ListCategory, MediaSummary, MediaType, Paginated,
};
use crate::shell::component::Component;
use crate::shell::components::{
    EmptyState, ErrorBlock, MediaCard, PaginationControls, Skeleton,
};
use crate::shell::document::Region;
use crate::shell::format::{escape, format_count};

pub const GRID_REGION: &str = "grid";

/// Cards in the loading skeleton.
const SKELETON_CARDS: usize = 20;
/// On page 1 the grid ad follows this many cards.
const AD_AFTER: usize = 8;

fn wrap(inner: &str) -> String {
    format!(r#"<div class="container page-container"><div class="grid-page">{inner}</div></div>"#)
}

fn placeholder(title: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<h2 class="section-title">{}</h2><div class="movies-grid">"#, escape(title));
    Skeleton {
        count: SKELETON_CARDS,
    }
    .render(&mut out);
    out.push_str("</div>");
    wrap(&out)
}

fn error(title: &str, message: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<h2 class="section-title">{}</h2>"#, escape(title));
    ErrorBlock { message }.render(&mut out);
    wrap(&out)
}

/// Grid page body for a fetched page of results.
pub fn render_grid(
    title: &str,
    result: &Paginated<MediaSummary>,
    media_type: MediaType,
    images: &ImageUrls,
) -> String {
    let mut out = String::new();

    if result.results.is_empty() {
        let _ = write!(out, r#"<h2 class="section-title">{}</h2>"#, escape(title));
        EmptyState {
            title: "No items found.",
            description: None,
        }
        .render(&mut out);
        return wrap(&out);
    }

    let _ = write!(
        out,
        concat!(
            r#"<div class="section-header"><h2 class="section-title">{}</h2>"#,
            r#"<div class="page-info">{} items</div></div>"#,
            r#"<div class="movies-grid">"#
        ),
        escape(title),
        format_count(result.total_results)
    );
    for (index, item) in result.results.iter().enumerate() {
        MediaCard {
            item,
            media_type,
            images,
        }
        .render(&mut out);
        if result.page == 1 && index + 1 == AD_AFTER {
            out.push_str(r#"<div class="ad-slot ad-slot--grid-item"><p>Ad Slot - 180x270</p></div>"#);
        }
    }
    out.push_str(r#"</div><div class="pagination" id="grid-pagination">"#);
    if result.total_pages > 1 {
        PaginationControls {
            current: result.page,
            total: result.total_pages,
        }
        .render(&mut out);
    }
    out.push_str("</div>");
    wrap(&out)
}

async fn load_page<F>(
    ctx: &PageContext<'_>,
    title: &str,
    media_type: MediaType,
    error_message: &str,
    fetch: F,
) where
    F: Future<Output = Result<Paginated<MediaSummary>, CatalogError>>,
{
    ctx.mount(vec![Region::new(GRID_REGION, placeholder(title))]);

    let html = match fetch.await {
        Ok(result) => render_grid(title, &result, media_type, ctx.images),
        Err(e) => {
            warn!("Failed to load '{}': {}", title, e);
            error(title, error_message)
        }
    };
    ctx.replace(GRID_REGION, html);
}

pub async fn load_list(
    ctx: &PageContext<'_>,
    title: &str,
    media_type: MediaType,
    category: ListCategory,
    page: u32,
) {
    let fetch = ctx.catalog.list(media_type, Feed::Category(category), page);
    load_page(ctx, title, media_type, "Could not load this page.", fetch).await;
}

pub async fn load_genre(
    ctx: &PageContext<'_>,
    title: &str,
    media_type: MediaType,
    genre_id: u64,
    page: u32,
) {
    let fetch = ctx.catalog.by_genre(media_type, genre_id, page);
    load_page(ctx, title, media_type, "Could not load this genre page.", fetch).await;
}
