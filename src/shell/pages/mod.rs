//! # Page Loaders
//!
//! One loader per route family. Every loader follows the same three phases:
//!
//! ```text
//! 1. mount placeholders       (spinner / skeleton regions)
//! 2. fetch concurrently       (try_join! / join_all)
//! 3. replace regions          (content, or an inline error block)
//! ```
//!
//! Catalog errors stop at the loader: they are logged and rendered as an
//! error block, never returned. All writes go through the navigation's
//! [`MountHandle`], so a loader that finishes after the user has moved on
//! writes nothing.

pub mod detail;
pub mod grid;
pub mod home;
pub mod search;
pub mod static_pages;

use crate::catalog::{Catalog, ImageUrls};
use crate::shell::document::{Document, MountHandle, Region};

/// What a loader needs for one navigation.
pub struct PageContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub document: &'a Document,
    pub images: &'a ImageUrls,
    pub handle: MountHandle,
}

impl PageContext<'_> {
    pub fn mount(&self, regions: Vec<Region>) -> bool {
        self.document.mount(self.handle, regions)
    }

    pub fn replace(&self, id: &str, html: String) -> bool {
        self.document.replace_region(self.handle, id, html)
    }
}
