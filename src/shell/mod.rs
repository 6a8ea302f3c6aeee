//! # Shell
//!
//! The headless browser adapter. Owns the document, the history stack and the
//! chrome state, and drives them with the pure pieces from `core`:
//!
//! ```text
//! navigate(location) ──► history.push ──► dispatch()
//!                                           │
//!                   ┌───────────────────────┘
//!                   ▼
//!   begin() → metadata → nav highlight → loader (placeholder → fetch → content)
//! ```
//!
//! Actions go through `core::action::update`; the resulting `Effect` is
//! executed here.

pub mod component;
pub mod components;
pub mod document;
pub mod format;
pub mod history;
pub mod layout;
pub mod pages;

use std::cell::RefCell;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::OutputFormat;
use crate::catalog::{Catalog, CatalogError, ImageUrls, TmdbCatalog};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::metadata::{PageMetadata, SiteInfo};
use crate::core::route::{Location, PageRequest, Route};
use crate::core::state::ChromeState;
use document::{Document, DocumentSnapshot};
use history::History;
use pages::{PageContext, detail, grid, home, search, static_pages};

/// What the JSON output format prints.
#[derive(Serialize, Debug)]
pub struct PageSnapshot {
    pub location: Location,
    pub route: Route,
    pub document: DocumentSnapshot,
}

pub struct App {
    catalog: Arc<dyn Catalog>,
    site: SiteInfo,
    images: ImageUrls,
    document: Document,
    history: RefCell<History>,
    chrome: RefCell<ChromeState>,
}

impl App {
    /// Creates the app at `initial` without dispatching. Call
    /// [`App::dispatch`] to render the first page.
    pub fn new(
        catalog: Arc<dyn Catalog>,
        site: SiteInfo,
        images: ImageUrls,
        initial: Location,
    ) -> Self {
        Self {
            catalog,
            site,
            images,
            document: Document::new(),
            history: RefCell::new(History::new(initial)),
            chrome: RefCell::new(ChromeState::new()),
        }
    }

    pub fn location(&self) -> Location {
        self.history.borrow().current().clone()
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.history.borrow().current().path)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn chrome(&self) -> ChromeState {
        self.chrome.borrow().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    /// Pushes `location` and re-dispatches. Navigating to the current
    /// location does nothing.
    pub async fn navigate(&self, location: Location) {
        let pushed = self.history.borrow_mut().push(location.clone());
        if !pushed {
            debug!("Already at {}, ignoring navigation", location);
            return;
        }
        self.dispatch().await;
    }

    /// Moves back one history entry and re-dispatches.
    pub async fn back(&self) -> bool {
        let moved = self.history.borrow_mut().back().is_some();
        if moved {
            self.dispatch().await;
        }
        moved
    }

    pub async fn forward(&self) -> bool {
        let moved = self.history.borrow_mut().forward().is_some();
        if moved {
            self.dispatch().await;
        }
        moved
    }

    /// Renders the current location: metadata first, then the nav
    /// highlight, then exactly one loader.
    pub async fn dispatch(&self) {
        let location = self.location();
        let request = PageRequest::from_location(&location);
        let handle = self.document.begin();
        info!("Dispatching {} to {:?}", location, request.route);

        let metadata = self.metadata_for(&request).await;
        if !self.document.is_current(handle) {
            debug!("Navigation to {} superseded before render", location);
            return;
        }
        self.document.apply_metadata(metadata);
        self.chrome.borrow_mut().on_navigate();
        self.document.set_active_nav(request.route.nav_key());

        let ctx = PageContext {
            catalog: self.catalog.as_ref(),
            document: &self.document,
            images: &self.images,
            handle,
        };
        let heading = request.route.heading().unwrap_or_default();
        match &request.route {
            Route::Home => home::load(&ctx).await,
            Route::Search => search::load(&ctx, &request.query, request.page).await,
            Route::Detail { media_type, id } => detail::load(&ctx, *media_type, *id).await,
            Route::List {
                media_type,
                category,
            } => grid::load_list(&ctx, &heading, *media_type, *category, request.page).await,
            Route::Genre {
                media_type,
                genre_id,
                ..
            } => grid::load_genre(&ctx, &heading, *media_type, *genre_id, request.page).await,
            route => static_pages::load(&ctx, route),
        }
    }

    /// Detail pages describe the title when details and credits can be
    /// fetched; everything else gets the generic metadata.
    async fn metadata_for(&self, request: &PageRequest) -> PageMetadata {
        let path = &request.location.path;
        if let Route::Detail { media_type, id } = request.route {
            let fetched = futures::try_join!(
                self.catalog.details(media_type, id),
                self.catalog.credits(media_type, id),
            );
            match fetched {
                Ok((details, credits)) => {
                    return PageMetadata::for_media(
                        &self.site,
                        path,
                        media_type,
                        &details,
                        &credits,
                        &self.images,
                    );
                }
                Err(e) => debug!("Using default metadata for {}: {}", path, e),
            }
        }
        PageMetadata::for_route(&self.site, &request.route, path)
    }

    /// Applies a user action and executes its effect.
    pub async fn handle(&self, action: Action) -> Effect {
        let route = self.route();
        let action = match action {
            Action::FollowLink(href) => Action::FollowLink(self.site.local_href(&href)),
            other => other,
        };
        let contact_submit = matches!(action, Action::SubmitContact);
        let effect = update(&mut self.chrome.borrow_mut(), &route, action);

        if contact_submit && self.chrome.borrow().contact_sent {
            self.document.replace_region(
                self.document.current_handle(),
                static_pages::PAGE_REGION,
                static_pages::contact_page(true),
            );
        }
        match &effect {
            Effect::Navigate(location) => self.navigate(location.clone()).await,
            Effect::OpenExternal(url) => self.document.open_external(url.clone()),
            Effect::None => {}
        }
        effect
    }

    pub fn render_page(&self) -> String {
        layout::render_page(&self.site, &self.document, &self.chrome.borrow())
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            location: self.location(),
            route: self.route(),
            document: self.document.snapshot(),
        }
    }
}

/// Builds the TMDB catalog. Fails when no API key is configured.
pub fn build_catalog(config: &ResolvedConfig) -> Result<Arc<dyn Catalog>, CatalogError> {
    let catalog = TmdbCatalog::from_config(config)?;
    info!("Using catalog backend: {}", catalog.name());
    Ok(Arc::new(catalog))
}

/// Renders `location` once and returns the output in the requested format.
pub async fn run(
    config: &ResolvedConfig,
    location: &str,
    format: OutputFormat,
) -> Result<String, CatalogError> {
    let catalog = build_catalog(config)?;
    let app = App::new(
        catalog,
        SiteInfo::from_config(config),
        ImageUrls::new(config.image_base_url.as_str()),
        Location::parse(location),
    );
    app.dispatch().await;

    match format {
        OutputFormat::Html => Ok(app.render_page()),
        OutputFormat::Json => serde_json::to_string_pretty(&app.snapshot())
            .map_err(|e| CatalogError::Parse(e.to_string())),
    }
}
