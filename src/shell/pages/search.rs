//! Search page: movie and TV results side by side.

use std::fmt::Write;

use log::{info, warn};

use super::PageContext;
use crate::catalog::{ImageUrls, MediaSummary, MediaType, Paginated};
use crate::shell::component::Component;
use crate::shell::components::{EmptyState, ErrorBlock, Skeleton, render_cards};
use crate::shell::document::Region;
use crate::shell::format::{escape, format_count};

pub const RESULTS_REGION: &str = "search-results";

fn wrap(inner: &str) -> String {
    format!(
        r#"<div class="container page-container"><div id="search-results-container">{inner}</div></div>"#
    )
}

fn prompt() -> String {
    wrap(
        &EmptyState {
            title: "Search for movies and TV shows",
            description: Some("Find your next favorite from our vast library."),
        }
        .to_html(),
    )
}

fn placeholder(query: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<h2 class="section-title">Searching for "{}"...</h2><div class="movies-grid">"#,
        escape(query)
    );
    Skeleton { count: 20 }.render(&mut out);
    out.push_str("</div>");
    wrap(&out)
}

fn render_section(
    out: &mut String,
    result: &Paginated<MediaSummary>,
    media_type: MediaType,
    images: &ImageUrls,
) {
    if result.results.is_empty() {
        return;
    }
    let _ = write!(
        out,
        r#"<div class="search-results-section"><h3 class="row-title">{} ({})</h3><div class="movies-grid">"#,
        media_type.plural_label(),
        format_count(result.total_results)
    );
    render_cards(out, &result.results, media_type, images);
    out.push_str("</div></div>");
}

/// Renders the prompt for a blank query without touching the catalog;
/// otherwise searches movies and TV concurrently.
pub async fn load(ctx: &PageContext<'_>, query: &str, page: u32) {
    if query.is_empty() {
        ctx.mount(vec![Region::new(RESULTS_REGION, prompt())]);
        return;
    }

    ctx.mount(vec![Region::new(RESULTS_REGION, placeholder(query))]);
    info!("Searching for '{}' (page {})", query, page);

    let result = futures::try_join!(
        ctx.catalog.search(MediaType::Movie, query, page),
        ctx.catalog.search(MediaType::Tv, query, page),
    );

    let html = match result {
        Ok((movies, shows)) => {
            let mut out = String::new();
            let _ = write!(
                out,
                r#"<h2 class="section-title">Search Results for "{}"</h2>"#,
                escape(query)
            );
            render_section(&mut out, &movies, MediaType::Movie, ctx.images);
            render_section(&mut out, &shows, MediaType::Tv, ctx.images);
            if movies.results.is_empty() && shows.results.is_empty() {
                let description =
                    format!("We couldn't find any movies or TV shows matching \"{query}\".");
                EmptyState {
                    title: "No results found.",
                    description: Some(&description),
                }
                .render(&mut out);
            }
            wrap(&out)
        }
        Err(e) => {
            warn!("Search for '{}' failed: {}", query, e);
            wrap(&ErrorBlock {
                message: "Search failed. Please try again.",
            }
            .to_html())
        }
    };
    ctx.replace(RESULTS_REGION, html);
}
