//! Detail page for a single movie or TV show.
//!
//! Six requests run concurrently (details, credits, keywords,
//! recommendations, videos, reviews). Any failure replaces the whole page
//! with one error block. Empty cast, review and recommendation sections are
//! left out rather than rendered empty.

use std::fmt::Write;

use log::{info, warn};

use super::PageContext;
use crate::catalog::types::find_trailer;
use crate::catalog::{
    Credits, ImageUrls, Keyword, MediaDetail, MediaSummary, MediaType, Paginated, Review, Video,
};
use crate::shell::component::Component;
use crate::shell::components::{ErrorBlock, RatingCircle, Spinner, StarRating, render_cards};
use crate::shell::document::Region;
use crate::shell::format::{
    escape, format_currency, format_date, format_naive_date, format_runtime, language_name,
};

pub const DETAIL_REGION: &str = "detail";

const TOP_CAST: usize = 10;
const RECOMMENDATIONS: usize = 10;

/// Everything fetched for a detail page.
pub struct DetailData {
    pub details: MediaDetail,
    pub credits: Credits,
    pub keywords: Vec<Keyword>,
    pub recommendations: Paginated<MediaSummary>,
    pub videos: Vec<Video>,
    pub reviews: Vec<Review>,
}

fn crew_member(out: &mut String, name: &str, role: &str) {
    let _ = write!(
        out,
        r#"<div class="crew-member"><strong>{}</strong><span>{}</span></div>"#,
        escape(name),
        role
    );
}

fn render_hero(out: &mut String, data: &DetailData, images: &ImageUrls) {
    let details = &data.details;
    let title = escape(details.display_title());
    let year = details
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let genres = details
        .genres
        .iter()
        .map(|g| escape(&g.name))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = write!(
        out,
        concat!(
            r#"<div class="detail-hero-wrapper"><div class="detail-hero" style="background-image: url({backdrop})">"#,
            r#"<div class="detail-hero-overlay"><div class="container"><div class="detail-hero-content">"#,
            r#"<div class="detail-hero-poster"><img src="{poster}" alt="{title}"></div>"#,
            r#"<div class="detail-hero-info">"#,
            r#"<h2 class="title">{title} <span>({year})</span></h2>"#,
            r#"<div class="detail-hero-meta"><span>{date}</span>"#
        ),
        backdrop = escape(&images.backdrop(details.backdrop_path.as_deref(), None)),
        poster = escape(&images.poster(details.poster_path.as_deref(), Some("w300"))),
        title = title,
        year = year,
        date = format_date(details.release()),
    );
    if !genres.is_empty() {
        let _ = write!(out, "<span>&bull;</span><span>{genres}</span>");
    }
    if let Some(minutes) = details.runtime_minutes() {
        let _ = write!(out, "<span>&bull;</span><span>{}</span>", format_runtime(minutes));
    }
    out.push_str(r#"</div><div class="detail-actions"><div class="action-item">"#);
    RatingCircle {
        vote_average: details.vote_average,
        size: 60,
    }
    .render(out);
    out.push_str(r#"<span class="action-label">User Score</span></div>"#);
    if let Some(trailer) = find_trailer(&data.videos) {
        let _ = write!(
            out,
            concat!(
                r#"<div class="action-item">"#,
                r#"<button class="action-btn" id="play-trailer-btn" data-video-key="{}" aria-label="Play Trailer">&#9654;</button>"#,
                r#"<span class="action-label">Play Trailer</span></div>"#
            ),
            escape(&trailer.key)
        );
    }
    let _ = write!(
        out,
        concat!(
            "</div>",
            r#"<p class="detail-tagline">{}</p>"#,
            r#"<div class="detail-overview"><h3>Overview</h3><p>{}</p></div>"#,
            r#"<div class="detail-crew">"#
        ),
        escape(details.tagline.as_deref().unwrap_or_default()),
        escape(details.overview().unwrap_or_default()),
    );
    for creator in &details.created_by {
        crew_member(out, &creator.name, "Creator");
    }
    for director in data.credits.directors() {
        crew_member(out, &director.name, "Director");
    }
    for writer in data.credits.writers() {
        crew_member(out, &writer.name, "Writer");
    }
    out.push_str("</div></div></div></div></div></div></div>");
}

fn render_cast(out: &mut String, credits: &Credits, images: &ImageUrls) {
    if credits.cast.is_empty() {
        return;
    }
    out.push_str(concat!(
        r#"<section class="detail-section cast-section">"#,
        r#"<h3 class="detail-section-title">Top Billed Cast</h3><div class="cast-grid">"#
    ));
    for person in credits.cast.iter().take(TOP_CAST) {
        let name = escape(&person.name);
        let _ = write!(
            out,
            concat!(
                r#"<div class="cast-card"><img src="{}" alt="{}" loading="lazy">"#,
                r#"<div class="cast-card-info"><p class="name">{}</p><p class="character">{}</p></div></div>"#
            ),
            escape(&images.profile(person.profile_path.as_deref())),
            name,
            name,
            escape(&person.character),
        );
    }
    out.push_str("</div></section>");
}

fn render_reviews(out: &mut String, reviews: &[Review]) {
    if reviews.is_empty() {
        return;
    }
    out.push_str(concat!(
        r#"<section class="detail-section reviews-section">"#,
        r#"<h3 class="detail-section-title">User Reviews</h3>"#,
        r#"<p class="synthetic-note">Sample reviews generated for demonstration. Not written by real users.</p>"#,
        r#"<div class="reviews-list">"#
    ));
    for review in reviews {
        let author = escape(&review.author);
        let _ = write!(
            out,
            concat!(
                r#"<div class="review-card" data-synthetic="true"><div class="review-header">"#,
                r#"<img src="{}" alt="{}" class="review-avatar">"#,
                r#"<div class="review-user-info"><span class="review-author">{}</span><div class="review-meta">"#
            ),
            escape(&review.avatar_url),
            author,
            author,
        );
        StarRating {
            rating: review.rating,
            max_stars: 5,
        }
        .render(out);
        let _ = write!(
            out,
            r#"<span class="review-date">{}</span></div></div></div><div class="review-content">"#,
            format_naive_date(review.created_at)
        );
        for paragraph in review.content.split('\n') {
            let _ = write!(out, "<p>{}</p>", escape(paragraph));
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div></section>");
}

fn render_recommendations(
    out: &mut String,
    recommendations: &Paginated<MediaSummary>,
    media_type: MediaType,
    images: &ImageUrls,
) {
    if recommendations.results.is_empty() {
        return;
    }
    let shown = &recommendations.results[..recommendations.results.len().min(RECOMMENDATIONS)];
    out.push_str(concat!(
        r#"<section class="detail-section recommendations-section">"#,
        r#"<h3 class="detail-section-title">Recommendations</h3>"#,
        r#"<div class="row-carousel-wrapper"><div class="row-carousel-track">"#
    ));
    render_cards(out, shown, media_type, images);
    out.push_str("</div></div></section>");
}

fn info_block(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        r#"<div class="sidebar-info-block"><strong>{}</strong><span>{}</span></div>"#,
        label,
        escape(value)
    );
}

fn render_sidebar(out: &mut String, data: &DetailData, media_type: MediaType) {
    let details = &data.details;
    out.push_str(r#"<div class="ad-slot ad-slot--sidebar"><p>Ad Slot - 300x600</p></div>"#);
    info_block(out, "Status", details.status.as_deref().unwrap_or("-"));
    info_block(
        out,
        "Original Language",
        &language_name(details.original_language.as_deref()),
    );
    match media_type {
        MediaType::Movie => {
            info_block(out, "Budget", &format_currency(details.budget));
            info_block(out, "Revenue", &format_currency(details.revenue));
        }
        MediaType::Tv => {
            let networks = details
                .networks
                .iter()
                .map(|n| n.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            info_block(out, "Network", if networks.is_empty() { "-" } else { networks.as_str() });
            info_block(out, "Type", details.series_type.as_deref().unwrap_or("-"));
        }
    }
    out.push_str(r#"<div class="sidebar-info-block"><strong>Keywords</strong><div class="keyword-list">"#);
    if data.keywords.is_empty() {
        out.push_str("<span>No keywords have been added.</span>");
    }
    for keyword in &data.keywords {
        let name = escape(&keyword.name);
        let _ = write!(
            out,
            r##"<a href="#" class="keyword-tag" data-keyword="{name}">{name}</a>"##
        );
    }
    out.push_str("</div></div>");
}

/// Full detail page markup.
pub fn render_detail(data: &DetailData, media_type: MediaType, images: &ImageUrls) -> String {
    let mut out = String::new();
    render_hero(&mut out, data, images);
    out.push_str(r#"<div class="container detail-main-content"><div class="detail-main-column">"#);
    render_cast(&mut out, &data.credits, images);
    render_reviews(&mut out, &data.reviews);
    render_recommendations(&mut out, &data.recommendations, media_type, images);
    out.push_str(r#"</div><div class="detail-sidebar-column">"#);
    render_sidebar(&mut out, data, media_type);
    out.push_str("</div></div>");
    out
}

pub async fn load(ctx: &PageContext<'_>, media_type: MediaType, id: u64) {
    ctx.mount(vec![Region::new(
        DETAIL_REGION,
        Spinner {
            text: "Loading details...",
        }
        .to_html(),
    )]);
    info!("Loading {} {}", media_type, id);

    let catalog = ctx.catalog;
    let result = futures::try_join!(
        catalog.details(media_type, id),
        catalog.credits(media_type, id),
        catalog.keywords(media_type, id),
        catalog.recommendations(media_type, id),
        catalog.videos(media_type, id),
        catalog.reviews(id),
    );

    let html = match result {
        Ok((details, credits, keywords, recommendations, videos, reviews)) => {
            let data = DetailData {
                details,
                credits,
                keywords,
                recommendations,
                videos,
                reviews,
            };
            render_detail(&data, media_type, ctx.images)
        }
        Err(e) => {
            warn!("Failed to load {} {}: {}", media_type, id, e);
            ErrorBlock {
                message: "Could not load details for this item.",
            }
            .to_html()
        }
    };
    ctx.replace(DETAIL_REGION, html);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{CastMember, CrewMember, Genre, Network};
    use chrono::NaiveDate;

    fn movie() -> DetailData {
        DetailData {
            details: MediaDetail {
                id: 27205,
                title: Some("Inception".to_string()),
                overview: Some("A thief who steals corporate secrets.".to_string()),
                tagline: Some("Your mind is the scene of the crime.".to_string()),
                release_date: Some("2010-07-15".to_string()),
                runtime: Some(148),
                vote_average: 8.4,
                genres: vec![
                    Genre { id: 28, name: "Action".to_string() },
                    Genre { id: 878, name: "Science Fiction".to_string() },
                ],
                status: Some("Released".to_string()),
                original_language: Some("en".to_string()),
                budget: Some(160_000_000),
                revenue: None,
                ..Default::default()
            },
            credits: Credits {
                cast: vec![CastMember {
                    id: 6193,
                    name: "Leonardo DiCaprio".to_string(),
                    character: "Cobb".to_string(),
                    profile_path: None,
                }],
                crew: vec![CrewMember {
                    id: 525,
                    name: "Christopher Nolan".to_string(),
                    job: "Director".to_string(),
                    department: "Directing".to_string(),
                }],
            },
            keywords: vec![Keyword { id: 1, name: "dream".to_string() }],
            recommendations: Paginated {
                results: vec![],
                page: 1,
                total_pages: 0,
                total_results: 0,
            },
            videos: vec![],
            reviews: vec![Review {
                author: "Jane Doe".to_string(),
                avatar_url: "https://placehold.co/50x50?text=JD".to_string(),
                rating: 4,
                created_at: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                content: "First.\nSecond.".to_string(),
            }],
        }
    }

    #[test]
    fn test_hero_meta() {
        let html = render_detail(&movie(), MediaType::Movie, &ImageUrls::default());
        assert!(html.contains("Inception <span>(2010)</span>"));
        assert!(html.contains("Jul 15, 2010"));
        assert!(html.contains("<span>Action, Science Fiction</span>"));
        assert!(html.contains("<span>2h 28m</span>"));
        assert!(html.contains("<strong>Christopher Nolan</strong><span>Director</span>"));
    }

    #[test]
    fn test_no_trailer_no_play_button() {
        let mut data = movie();
        let html = render_detail(&data, MediaType::Movie, &ImageUrls::default());
        assert!(!html.contains("play-trailer-btn"));

        data.videos = vec![Video {
            key: "YoHD9XEInc0".to_string(),
            name: "Official Trailer".to_string(),
            site: "YouTube".to_string(),
            kind: "Trailer".to_string(),
        }];
        let html = render_detail(&data, MediaType::Movie, &ImageUrls::default());
        assert!(html.contains(r#"data-video-key="YoHD9XEInc0""#));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut data = movie();
        data.credits.cast.clear();
        data.reviews.clear();
        let html = render_detail(&data, MediaType::Movie, &ImageUrls::default());
        assert!(!html.contains("cast-section"));
        assert!(!html.contains("reviews-section"));
        assert!(!html.contains("recommendations-section"));
        assert!(html.contains("detail-sidebar-column"));
    }

    #[test]
    fn test_reviews_are_labelled_synthetic() {
        let html = render_detail(&movie(), MediaType::Movie, &ImageUrls::default());
        assert!(html.contains("synthetic-note"));
        assert!(html.contains("<p>First.</p><p>Second.</p>"));
        assert!(html.contains("Mar 2, 2024"));
    }

    #[test]
    fn test_movie_sidebar_money() {
        let html = render_detail(&movie(), MediaType::Movie, &ImageUrls::default());
        assert!(html.contains("<strong>Budget</strong><span>$160,000,000.00</span>"));
        assert!(html.contains("<strong>Revenue</strong><span>-</span>"));
        assert!(html.contains("<strong>Original Language</strong><span>English</span>"));
        assert!(html.contains(r#"data-keyword="dream""#));
    }

    #[test]
    fn test_tv_sidebar_network_and_type() {
        let mut data = movie();
        data.details.networks = vec![Network { id: 49, name: "HBO".to_string() }];
        data.details.series_type = Some("Scripted".to_string());
        let html = render_detail(&data, MediaType::Tv, &ImageUrls::default());
        assert!(html.contains("<strong>Network</strong><span>HBO</span>"));
        assert!(html.contains("<strong>Type</strong><span>Scripted</span>"));
        assert!(!html.contains("Budget"));
    }
}
