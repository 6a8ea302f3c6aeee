use std::f64::consts::PI;
use std::fmt::Write;

use crate::shell::component::Component;

/// Circular user-score gauge (0–100%). A zero score renders `NR`.
pub struct RatingCircle {
    /// Catalog vote average on a 0–10 scale.
    pub vote_average: f64,
    /// Edge length in pixels.
    pub size: u32,
}

impl RatingCircle {
    pub fn percentage(&self) -> u32 {
        if self.vote_average.is_finite() && self.vote_average > 0.0 {
            (self.vote_average * 10.0).round().min(100.0) as u32
        } else {
            0
        }
    }

    /// Bar and track colours by score band.
    fn colours(percentage: u32) -> (&'static str, &'static str) {
        match percentage {
            70.. => ("var(--tmdb-green)", "#204529"),
            40..=69 => ("var(--tmdb-yellow)", "#423d0f"),
            1..=39 => ("var(--tmdb-red)", "#571435"),
            0 => ("transparent", "#666"),
        }
    }
}

impl Component for RatingCircle {
    fn render(&self, out: &mut String) {
        let percentage = self.percentage();
        let size = f64::from(self.size);
        let stroke = (size * 0.1).round().max(2.0);
        let radius = size / 2.0 - stroke / 2.0;
        let circumference = 2.0 * PI * radius;
        let center = size / 2.0;
        let offset = circumference * (1.0 - f64::from(percentage) / 100.0);
        let font_size = size * 0.3;
        let (colour, track) = Self::colours(percentage);

        let _ = write!(
            out,
            concat!(
                r#"<div class="rating-circle" style="width: {size}px; height: {size}px;">"#,
                r#"<svg class="rating-progress-svg" viewBox="0 0 {size} {size}">"#,
                r#"<circle class="rating-progress-bg" cx="{c}" cy="{c}" r="{r:.2}" stroke="{track}" stroke-width="{sw}" />"#,
                r#"<circle class="rating-progress-bar" cx="{c}" cy="{c}" r="{r:.2}" stroke="{colour}" stroke-width="{sw}" "#,
                r#"stroke-dasharray="{circ:.2}" stroke-dashoffset="{off:.2}" />"#,
                "</svg>",
                r#"<div class="rating-circle-inner" style="font-size: {fs:.1}px;">"#
            ),
            size = self.size,
            c = center,
            r = radius,
            track = track,
            sw = stroke,
            colour = colour,
            circ = circumference,
            off = offset,
            fs = font_size,
        );
        if percentage > 0 {
            let _ = write!(out, "{percentage}<sup>%</sup>");
        } else {
            out.push_str("NR");
        }
        out.push_str("</div></div>");
    }
}

/// Row of five stars, filled up to the rounded rating.
pub struct StarRating {
    pub rating: u8,
    pub max_stars: u8,
}

impl Component for StarRating {
    fn render(&self, out: &mut String) {
        out.push_str(r#"<div class="star-rating">"#);
        for i in 1..=self.max_stars {
            let filled = if i <= self.rating { " star--filled" } else { "" };
            let _ = write!(
                out,
                concat!(
                    r#"<svg class="star-icon{}" width="16" height="16" viewBox="0 0 24 24">"#,
                    r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon>"#,
                    "</svg>"
                ),
                filled
            );
        }
        out.push_str("</div>");
    }
}
