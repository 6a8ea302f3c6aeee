//! # Chrome State
//!
//! Presentation state the user changes by interacting: whether the header is
//! scrolled away, whether the mobile menu or search overlay is open, and
//! whether the contact form was sent. The nav highlight is not here; it is
//! derived from the route and lives on the document.
//!
//! ```text
//! ChromeState
//! ├── header_hidden: bool           // hides on scroll down, shows on scroll up
//! ├── last_scroll_top: f64          // previous scroll offset
//! ├── mobile_menu_open: bool
//! ├── search_overlay_open: bool
//! └── contact_sent: bool            // reset by every navigation
//! ```
//!
//! State changes only happen through `update(state, route, action)` in
//! action.rs and `on_navigate` on dispatch.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChromeState {
    pub header_hidden: bool,
    last_scroll_top: f64,
    pub mobile_menu_open: bool,
    pub search_overlay_open: bool,
    pub contact_sent: bool,
}

impl ChromeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-page state when a new page is dispatched.
    pub fn on_navigate(&mut self) {
        self.contact_sent = false;
    }

    /// Header hides while scrolling down past its own height and reappears
    /// on any upward scroll.
    pub fn on_scroll(&mut self, offset: f64, header_height: f64) {
        self.header_hidden = offset > self.last_scroll_top && offset > header_height;
        self.last_scroll_top = offset.max(0.0);
    }

    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
    }
}
