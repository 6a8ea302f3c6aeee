//! # Synthetic Reviews
//!
//! The catalog exposes no user reviews, so the detail page shows a fabricated
//! set instead. Everything here is placeholder content and is labelled as such
//! wherever it is rendered.
//!
//! Generation is seeded by the media id: the same title always gets the same
//! authors, ratings and text for a given reference date.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::types::Review;

const FIRST_NAMES: &[&str] = &[
    "Avery", "Blake", "Casey", "Dana", "Elliot", "Frankie", "Harper", "Jordan", "Kai", "Logan",
    "Morgan", "Noel", "Parker", "Quinn", "Riley", "Sage", "Taylor", "Wren",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barnes", "Castillo", "Dalton", "Ellis", "Fischer", "Graves", "Holloway", "Ibarra",
    "Jensen", "Keller", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Reyes", "Sato",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum",
];

/// How far back review dates may reach.
const MAX_AGE_DAYS: u64 = 730;

fn pick<'a>(rng: &mut ChaCha8Rng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn sentence(rng: &mut ChaCha8Rng) -> String {
    let len = rng.random_range(6..=14);
    let mut words: Vec<String> = (0..len).map(|_| pick(rng, WORDS).to_string()).collect();
    if let Some(first) = words.first_mut() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            *first = c.to_uppercase().chain(chars).collect();
        }
    }
    format!("{}.", words.join(" "))
}

fn paragraph(rng: &mut ChaCha8Rng) -> String {
    let count = rng.random_range(3..=5);
    (0..count).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

/// Generates 3–8 placeholder reviews for `media_id`, dated within the two
/// years before `today`.
pub fn synthetic_reviews(media_id: u64, today: NaiveDate) -> Vec<Review> {
    let mut rng = ChaCha8Rng::seed_from_u64(media_id);
    let count = rng.random_range(3..=8);

    (0..count)
        .map(|_| {
            let first = pick(&mut rng, FIRST_NAMES);
            let last = pick(&mut rng, LAST_NAMES);
            let author = format!("{first} {last}");
            let avatar_url = format!(
                "https://placehold.co/64x64/1a1f2e/667eea?text={}{}",
                &first[..1],
                &last[..1]
            );
            let rating = rng.random_range(1..=5u8);
            let age = rng.random_range(1..=MAX_AGE_DAYS);
            let created_at = today.checked_sub_days(Days::new(age)).unwrap_or(today);
            let paragraphs = rng.random_range(1..=3);
            let content = (0..paragraphs)
                .map(|_| paragraph(&mut rng))
                .collect::<Vec<_>>()
                .join("\n");

            Review {
                author,
                avatar_url,
                rating,
                created_at,
                content,
            }
        })
        .collect()
}
