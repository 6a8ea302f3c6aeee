//! # Core Application Logic
//!
//! This module contains Filmiry's routing and page-state logic.
//! It knows nothing about how pages are drawn or where they are mounted.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (path → page)  │
//!                    │  • ChromeState          │
//!                    │  • Action / update()    │
//!                    │  • Pagination window    │
//!                    │  • Page metadata        │
//!                    │                         │
//!                    │  No I/O. No HTML.       │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │   Shell    │                          │  Catalog   │
//!     │ (document, │                          │  (TMDB)    │
//!     │  loaders)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: `Route`, `Location`, `PageRequest`, nav keys
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`state`]: `ChromeState`, the explicit navigation/header state
//! - [`pagination`]: Windowed page-number sequence
//! - [`metadata`]: Title, description, canonical URL and JSON-LD
//! - [`config`]: Config file + env resolution

pub mod action;
pub mod config;
pub mod metadata;
pub mod pagination;
pub mod route;
pub mod state;
