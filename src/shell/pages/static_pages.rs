//! About, contact, legal and not-found pages. No catalog requests.

use pulldown_cmark::{Options, Parser, html};

use super::PageContext;
use crate::core::route::Route;
use crate::shell::document::Region;
use crate::shell::format::escape;

const ABOUT: &str = include_str!("../../../content/about.md");
const TERMS: &str = include_str!("../../../content/terms.md");
const PRIVACY: &str = include_str!("../../../content/privacy.md");
const DISCLAIMER: &str = include_str!("../../../content/disclaimer.md");

pub const PAGE_REGION: &str = "page";

/// Renders Markdown page copy to HTML.
pub fn render_markdown(content: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);

    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(content, opts));
    out
}

fn prose_page(heading: &str, markdown: &str) -> String {
    format!(
        r#"<div class="container page-container"><div class="legal-page-content"><h2>{}</h2>{}</div></div>"#,
        escape(heading),
        render_markdown(markdown)
    )
}

/// The contact form. Once sent, the submit button is disabled and says so;
/// nothing is delivered anywhere.
pub fn contact_page(sent: bool) -> String {
    let button = if sent {
        r#"<button type="submit" class="form-submit-btn" disabled>Message Sent!</button>"#
    } else {
        r#"<button type="submit" class="form-submit-btn">Send Message</button>"#
    };
    format!(
        concat!(
            r#"<div class="container contact-page-wrapper"><div class="contact-section">"#,
            r#"<h2>Contact Us</h2>"#,
            r#"<form id="contact-form" class="professional-contact-form">"#,
            r#"<div class="form-group"><input type="text" id="contact-name" class="form-input" placeholder="Full Name" required></div>"#,
            r#"<div class="form-group"><input type="email" id="contact-email" class="form-input" placeholder="Email Address" required></div>"#,
            r#"<div class="form-group"><textarea id="contact-message" class="form-textarea" rows="5" placeholder="Your Message..." required></textarea></div>"#,
            "{button}",
            "</form></div></div>"
        ),
        button = button
    )
}

pub fn not_found_page() -> String {
    concat!(
        r#"<div class="not-found-section"><h2 class="not-found-title">Page Not Found</h2>"#,
        "<p>We couldn't find the page you're looking for.</p>",
        r#"<a href="/" class="btn-large">Back to Home</a></div>"#
    )
    .to_string()
}

/// Markup for a route that needs no data. `None` for catalog-backed routes.
pub fn render(route: &Route) -> Option<String> {
    let heading = route.heading().unwrap_or_default();
    let html = match route {
        Route::About => prose_page(&heading, ABOUT),
        Route::Contact => contact_page(false),
        Route::Terms => prose_page(&heading, TERMS),
        Route::Privacy => prose_page(&heading, PRIVACY),
        Route::Disclaimer => prose_page(&heading, DISCLAIMER),
        Route::NotFound => not_found_page(),
        _ => return None,
    };
    Some(html)
}

/// Mounts a static page in one step.
pub fn load(ctx: &PageContext<'_>, route: &Route) {
    if let Some(html) = render(route) {
        ctx.mount(vec![Region::new(PAGE_REGION, html)]);
    }
}
