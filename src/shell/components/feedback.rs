//! Placeholder and status blocks: spinner, skeleton cards, errors, empty states.

use std::fmt::Write;

use crate::shell::component::Component;
use crate::shell::format::escape;

/// Inline spinner with a caption.
pub struct Spinner<'a> {
    pub text: &'a str,
}

impl Component for Spinner<'_> {
    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<div class="loading"><div class="spinner"></div> {}</div>"#,
            escape(self.text)
        );
    }
}

/// Grey card outlines shown while a grid or row loads.
pub struct Skeleton {
    pub count: usize,
}

impl Component for Skeleton {
    fn render(&self, out: &mut String) {
        for _ in 0..self.count {
            out.push_str(concat!(
                r#"<div class="movie-card skeleton-card">"#,
                r#"<div class="skeleton skeleton-poster"></div>"#,
                r#"<div class="skeleton-content">"#,
                r#"<div class="skeleton skeleton-line skeleton-title"></div>"#,
                r#"<div class="skeleton skeleton-line skeleton-text"></div>"#,
                "</div></div>"
            ));
        }
    }
}

pub struct ErrorBlock<'a> {
    pub message: &'a str,
}

impl Component for ErrorBlock<'_> {
    fn render(&self, out: &mut String) {
        let _ = write!(out, r#"<div class="error"><p>{}</p></div>"#, escape(self.message));
    }
}

pub struct EmptyState<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

impl Component for EmptyState<'_> {
    fn render(&self, out: &mut String) {
        let _ = write!(out, r#"<div class="empty-state"><h3>{}</h3>"#, escape(self.title));
        if let Some(description) = self.description {
            let _ = write!(out, "<p>{}</p>", escape(description));
        }
        out.push_str("</div>");
    }
}
