//! # Actions
//!
//! Everything the user can do on a page becomes an `Action`.
//! Clicking a card? That's `Action::OpenCard { .. }`.
//! Submitting the search box? That's `Action::SubmitSearch(text)`.
//!
//! The `update()` function takes the chrome state, the current route and an
//! action, mutates the state and returns an `Effect` for the shell to run.
//! No I/O here.
//!
//! ```text
//! State + Route + Action  →  update()  →  State' + Effect
//! ```

use crate::catalog::MediaType;
use crate::core::route::{Location, Route};
use crate::core::state::ChromeState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An anchor was clicked. Only same-origin paths are intercepted.
    FollowLink(String),
    OpenCard { media_type: MediaType, id: u64 },
    /// A keyword tag was clicked; searches for its text.
    SearchKeyword(String),
    /// Search overlay or hero form submitted.
    SubmitSearch(String),
    /// A pagination button was clicked.
    SelectPage(u32),
    /// Play button on the detail hero, carrying the YouTube video key.
    PlayTrailer(String),
    ToggleMobileMenu,
    OpenSearchOverlay,
    CloseSearchOverlay,
    Scrolled { offset: f64, header_height: f64 },
    /// The contact form was submitted. Only acknowledged, never delivered.
    SubmitContact,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigate(Location),
    /// Open a URL outside the app (new tab).
    OpenExternal(String),
}

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub fn update(state: &mut ChromeState, route: &Route, action: Action) -> Effect {
    match action {
        Action::FollowLink(href) => {
            if href.is_empty() || href == "#" || !href.starts_with('/') || href.starts_with("//")
            {
                return Effect::None;
            }
            state.close_menus();
            Effect::Navigate(Location::parse(&href))
        }
        Action::OpenCard { media_type, id } => Effect::Navigate(Location::new(
            Route::Detail { media_type, id }
                .path()
                .unwrap_or_else(|| "/".to_string()),
            "",
        )),
        Action::SearchKeyword(text) | Action::SubmitSearch(text) => {
            let query = text.trim();
            if query.is_empty() {
                return Effect::None;
            }
            state.search_overlay_open = false;
            Effect::Navigate(Location::search_for(query))
        }
        Action::SelectPage(page) => {
            if page == 0 {
                return Effect::None;
            }
            route
                .page_location(page)
                .map(Effect::Navigate)
                .unwrap_or(Effect::None)
        }
        Action::PlayTrailer(key) => {
            if key.is_empty() {
                return Effect::None;
            }
            Effect::OpenExternal(format!("{YOUTUBE_WATCH_URL}{key}"))
        }
        Action::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
            Effect::None
        }
        Action::OpenSearchOverlay => {
            state.search_overlay_open = true;
            Effect::None
        }
        Action::CloseSearchOverlay => {
            state.search_overlay_open = false;
            Effect::None
        }
        Action::Scrolled {
            offset,
            header_height,
        } => {
            state.on_scroll(offset, header_height);
            Effect::None
        }
        Action::SubmitContact => {
            if *route == Route::Contact {
                state.contact_sent = true;
            }
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_link_navigates_and_closes_menu() {
        let mut state = ChromeState::new();
        state.mobile_menu_open = true;
        let effect = update(&mut state, &Route::Home, Action::FollowLink("/tv/popular?page=2".into()));
        assert_eq!(effect, Effect::Navigate(Location::new("/tv/popular", "?page=2")));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_follow_link_ignores_placeholder_and_external() {
        let mut state = ChromeState::new();
        for href in ["#", "", "https://www.themoviedb.org", "//cdn.example/x", "mailto:a@b.c"] {
            assert_eq!(
                update(&mut state, &Route::Home, Action::FollowLink(href.into())),
                Effect::None,
                "href {href:?}"
            );
        }
    }

    #[test]
    fn test_open_card_goes_to_detail() {
        let mut state = ChromeState::new();
        let effect = update(
            &mut state,
            &Route::Home,
            Action::OpenCard {
                media_type: MediaType::Tv,
                id: 1399,
            },
        );
        assert_eq!(effect, Effect::Navigate(Location::new("/tv/1399", "")));
    }

    #[test]
    fn test_search_submit_trims_and_closes_overlay() {
        let mut state = ChromeState::new();
        update(&mut state, &Route::Home, Action::OpenSearchOverlay);
        assert!(state.search_overlay_open);

        let effect = update(&mut state, &Route::Home, Action::SubmitSearch("  dune ".into()));
        assert_eq!(effect, Effect::Navigate(Location::new("/search", "?query=dune")));
        assert!(!state.search_overlay_open);

        assert_eq!(
            update(&mut state, &Route::Home, Action::SubmitSearch("   ".into())),
            Effect::None
        );
    }

    #[test]
    fn test_keyword_searches_its_text() {
        let mut state = ChromeState::new();
        let effect = update(
            &mut state,
            &Route::resolve("/movie/550"),
            Action::SearchKeyword("dual identity".into()),
        );
        assert_eq!(
            effect,
            Effect::Navigate(Location::new("/search", "?query=dual%20identity"))
        );
    }

    #[test]
    fn test_select_page_keeps_route() {
        let mut state = ChromeState::new();
        let genre = Route::resolve("/movie/genre/28/Action");
        assert_eq!(
            update(&mut state, &genre, Action::SelectPage(3)),
            Effect::Navigate(Location::new("/movie/genre/28/Action", "?page=3"))
        );
        assert_eq!(update(&mut state, &genre, Action::SelectPage(0)), Effect::None);
        assert_eq!(update(&mut state, &Route::Home, Action::SelectPage(2)), Effect::None);
    }

    #[test]
    fn test_play_trailer_opens_youtube() {
        let mut state = ChromeState::new();
        assert_eq!(
            update(&mut state, &Route::Home, Action::PlayTrailer("SUXWAEX2jlg".into())),
            Effect::OpenExternal("https://www.youtube.com/watch?v=SUXWAEX2jlg".into())
        );
        assert_eq!(
            update(&mut state, &Route::Home, Action::PlayTrailer(String::new())),
            Effect::None
        );
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut state = ChromeState::new();
        update(&mut state, &Route::Home, Action::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        update(&mut state, &Route::Home, Action::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_scroll_routes_to_header_state() {
        let mut state = ChromeState::new();
        update(
            &mut state,
            &Route::Home,
            Action::Scrolled {
                offset: 500.0,
                header_height: 70.0,
            },
        );
        assert!(state.header_hidden);
    }

    #[test]
    fn test_contact_submit_only_on_contact_page() {
        let mut state = ChromeState::new();
        assert_eq!(update(&mut state, &Route::About, Action::SubmitContact), Effect::None);
        assert!(!state.contact_sent);

        assert_eq!(update(&mut state, &Route::Contact, Action::SubmitContact), Effect::None);
        assert!(state.contact_sent);
    }
}
