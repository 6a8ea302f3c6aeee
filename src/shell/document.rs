//! # Document
//!
//! The headless page the shell renders into: one content mount, the active
//! navigation highlight, and the metadata head.
//!
//! ```text
//! Document
//! ├── generation: u64              // bumped by every begin()
//! ├── regions: Vec<Region>         // the content mount, in display order
//! ├── active_nav: Option<NavKey>
//! ├── metadata: Option<PageMetadata>
//! └── opened: Vec<String>          // external URLs opened so far
//! ```
//!
//! Every navigation calls [`Document::begin`] and gets a [`MountHandle`]
//! tagged with the new generation. Writes through an older handle are
//! dropped, so a slow loader from a superseded navigation can never paint
//! over the current page.

use std::cell::RefCell;

use log::debug;
use serde::Serialize;

use crate::core::metadata::PageMetadata;
use crate::core::route::NavKey;

/// A replaceable block of the content mount.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub html: String,
}

impl Region {
    pub fn new(id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: html.into(),
        }
    }
}

/// Write capability for one navigation's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountHandle {
    generation: u64,
}

impl MountHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct DocumentState {
    generation: u64,
    regions: Vec<Region>,
    active_nav: Option<NavKey>,
    metadata: Option<PageMetadata>,
    opened: Vec<String>,
}

/// Serializable view of the document, used by the JSON output format.
#[derive(Serialize, Debug, Clone)]
pub struct DocumentSnapshot {
    pub generation: u64,
    pub active_nav: Option<NavKey>,
    pub metadata: Option<PageMetadata>,
    pub regions: Vec<Region>,
}

#[derive(Debug, Default)]
pub struct Document {
    state: RefCell<DocumentState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a navigation: clears the mount and invalidates every earlier
    /// handle.
    pub fn begin(&self) -> MountHandle {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.regions.clear();
        MountHandle {
            generation: state.generation,
        }
    }

    pub fn is_current(&self, handle: MountHandle) -> bool {
        self.state.borrow().generation == handle.generation
    }

    /// Handle for the page already on screen, for in-place re-renders that
    /// do not start a navigation.
    pub fn current_handle(&self) -> MountHandle {
        MountHandle {
            generation: self.state.borrow().generation,
        }
    }

    /// Replaces the whole mount. Returns `false` if the handle is stale.
    pub fn mount(&self, handle: MountHandle, regions: Vec<Region>) -> bool {
        let mut state = self.state.borrow_mut();
        if state.generation != handle.generation {
            debug!(
                "Dropping stale mount (generation {} < {})",
                handle.generation, state.generation
            );
            return false;
        }
        state.regions = regions;
        true
    }

    /// Replaces one region's markup. Returns `false` when the handle is stale
    /// or the region no longer exists.
    pub fn replace_region(&self, handle: MountHandle, id: &str, html: String) -> bool {
        let mut state = self.state.borrow_mut();
        if state.generation != handle.generation {
            debug!(
                "Dropping stale write to region '{}' (generation {} < {})",
                id, handle.generation, state.generation
            );
            return false;
        }
        match state.regions.iter_mut().find(|r| r.id == id) {
            Some(region) => {
                region.html = html;
                true
            }
            None => {
                debug!("Dropping write to missing region '{}'", id);
                false
            }
        }
    }

    pub fn region(&self, id: &str) -> Option<String> {
        self.state
            .borrow()
            .regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.html.clone())
    }

    pub fn region_ids(&self) -> Vec<String> {
        self.state.borrow().regions.iter().map(|r| r.id.clone()).collect()
    }

    /// The content mount as one HTML string.
    pub fn content_html(&self) -> String {
        self.state
            .borrow()
            .regions
            .iter()
            .map(|r| r.html.as_str())
            .collect()
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    pub fn set_active_nav(&self, nav: Option<NavKey>) {
        self.state.borrow_mut().active_nav = nav;
    }

    pub fn active_nav(&self) -> Option<NavKey> {
        self.state.borrow().active_nav
    }

    pub fn apply_metadata(&self, metadata: PageMetadata) {
        self.state.borrow_mut().metadata = Some(metadata);
    }

    pub fn metadata(&self) -> Option<PageMetadata> {
        self.state.borrow().metadata.clone()
    }

    /// Records a URL opened outside the app.
    pub fn open_external(&self, url: String) {
        debug!("Opening external URL: {}", url);
        self.state.borrow_mut().opened.push(url);
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.state.borrow().opened.clone()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let state = self.state.borrow();
        DocumentSnapshot {
            generation: state.generation,
            active_nav: state.active_nav,
            metadata: state.metadata.clone(),
            regions: state.regions.clone(),
        }
    }
}
