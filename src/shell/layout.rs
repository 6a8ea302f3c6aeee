//! Page frame around the content mount: head, header navigation, footer and
//! search overlay.
//!
//! Every element that can be highlighted carries `data-tab`; exactly the one
//! matching the document's active nav key gets the `active` class.

use std::fmt::Write;

use chrono::{Datelike, Utc};

use crate::core::metadata::{PageMetadata, SiteInfo};
use crate::core::route::NavKey;
use crate::core::state::ChromeState;
use crate::shell::document::Document;
use crate::shell::format::escape;

fn active(tab: NavKey, current: Option<NavKey>) -> &'static str {
    if current == Some(tab) { " active" } else { "" }
}

/// JSON-LD must not close its own `<script>` element.
fn json_ld(metadata: &PageMetadata) -> String {
    metadata.structured_data.to_string().replace("</", "<\\/")
}

fn render_head(out: &mut String, site: &SiteInfo, metadata: &PageMetadata) {
    let _ = write!(
        out,
        concat!(
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            r#"<link rel="canonical" href="{canonical}">"#,
            r#"<meta property="og:site_name" content="{site}">"#,
            r#"<script type="application/ld+json">{schema}</script>"#,
            "</head>"
        ),
        title = escape(&metadata.title),
        description = escape(&metadata.description),
        canonical = escape(&metadata.canonical),
        site = escape(&site.name),
        schema = json_ld(metadata),
    );
}

fn render_header(out: &mut String, site: &SiteInfo, nav: Option<NavKey>, chrome: &ChromeState) {
    let hidden = if chrome.header_hidden { " header--hidden" } else { "" };
    let open = if chrome.mobile_menu_open { " nav--open" } else { "" };
    let _ = write!(
        out,
        concat!(
            r#"<header class="header{hidden}"><div class="container"><div class="header-content">"#,
            r#"<a href="/" class="logo">{site}</a><div class="header-right">"#,
            r#"<nav class="main-nav{open}" id="main-nav"><ul class="nav-links">"#,
            r#"<li><a href="/" class="nav-link{home}" data-tab="home">Home</a></li>"#,
            r##"<li class="nav-item-dropdown"><a href="#" class="nav-link{movies}" data-tab="movies">Movies</a>"##,
            r#"<ul class="dropdown-menu">"#,
            r#"<li><a href="/movie/popular">Popular</a></li>"#,
            r#"<li><a href="/movie/now_playing">Now Playing</a></li>"#,
            r#"<li><a href="/movie/upcoming">Upcoming</a></li>"#,
            r#"<li><a href="/movie/top_rated">Top Rated</a></li>"#,
            "</ul></li>",
            r##"<li class="nav-item-dropdown"><a href="#" class="nav-link{tv}" data-tab="tv">TV Shows</a>"##,
            r#"<ul class="dropdown-menu">"#,
            r#"<li><a href="/tv/popular">Popular</a></li>"#,
            r#"<li><a href="/tv/airing_today">Airing Today</a></li>"#,
            r#"<li><a href="/tv/on_the_air">On TV</a></li>"#,
            r#"<li><a href="/tv/top_rated">Top Rated</a></li>"#,
            "</ul></li>",
            r#"<li><a href="/about" class="nav-link{about}" data-tab="about">About</a></li>"#,
            r#"<li><button id="open-search-btn" class="header-action-btn nav-link{search}" data-tab="search" aria-label="Open Search">Search</button></li>"#,
            "</ul></nav>",
            r#"<button id="mobile-menu-toggle" class="mobile-menu-toggle" aria-label="Open menu">Menu</button>"#,
            "</div></div></div></header>"
        ),
        hidden = hidden,
        open = open,
        site = escape(&site.name),
        home = active(NavKey::Home, nav),
        movies = active(NavKey::Movies, nav),
        tv = active(NavKey::Tv, nav),
        about = active(NavKey::About, nav),
        search = active(NavKey::Search, nav),
    );
}

fn render_footer(out: &mut String, site: &SiteInfo, nav: Option<NavKey>) {
    let _ = write!(
        out,
        concat!(
            r#"<footer class="footer"><div class="container"><div class="footer-content">"#,
            r#"<div class="footer-column"><h4 class="footer-title">The Basics</h4><ul class="footer-links">"#,
            r#"<li><a href="/about" class="footer-link">About {site}</a></li>"#,
            r#"<li><a href="/contact" class="footer-link nav-link{contact}" data-tab="contact">Contact Us</a></li>"#,
            "</ul></div>",
            r#"<div class="footer-column"><h4 class="footer-title nav-link{legal}" data-tab="legal">Legal</h4><ul class="footer-links">"#,
            r#"<li><a href="/terms" class="footer-link">Terms of Service</a></li>"#,
            r#"<li><a href="/privacy" class="footer-link">Privacy Policy</a></li>"#,
            r#"<li><a href="/disclaimer" class="footer-link">Disclaimer</a></li>"#,
            "</ul></div></div>",
            r#"<div class="footer-copyright">&copy; {year} {site}. This product uses the TMDB API but is not endorsed or certified by TMDB.</div>"#,
            "</div></footer>"
        ),
        site = escape(&site.name),
        contact = active(NavKey::Contact, nav),
        legal = active(NavKey::Legal, nav),
        year = Utc::now().year(),
    );
}

fn render_search_overlay(out: &mut String, chrome: &ChromeState) {
    let open = if chrome.search_overlay_open { " active" } else { "" };
    let _ = write!(
        out,
        concat!(
            r#"<div class="search-overlay{}" id="search-overlay">"#,
            r#"<button class="search-overlay-close" id="search-overlay-close-btn" aria-label="Close Search">&times;</button>"#,
            r#"<div class="search-overlay-content"><form id="search-overlay-form" action="/search">"#,
            r#"<input type="search" id="search-overlay-input" name="query" placeholder="Search for a movie or TV show..." autocomplete="off">"#,
            "</form></div></div>"
        ),
        open
    );
}

/// Renders the whole page for the document's current state.
pub fn render_page(site: &SiteInfo, document: &Document, chrome: &ChromeState) -> String {
    let metadata = document
        .metadata()
        .unwrap_or_else(|| PageMetadata::site_default(site, "/"));
    let nav = document.active_nav();

    let mut out = String::from(r#"<!DOCTYPE html><html lang="en">"#);
    render_head(&mut out, site, &metadata);
    out.push_str("<body>");
    render_header(&mut out, site, nav, chrome);
    out.push_str(r#"<main id="main-content">"#);
    out.push_str(&document.content_html());
    out.push_str("</main>");
    render_footer(&mut out, site, nav);
    render_search_overlay(&mut out, chrome);
    out.push_str("</body></html>");
    out
}
