//! Filmiry library exports for the binary and for testing

use clap::ValueEnum;

pub mod catalog;
pub mod core;
pub mod shell;

#[cfg(test)]
pub mod test_support;

/// What the binary prints for a rendered location.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// The full page: head, navigation, content and footer.
    #[default]
    Html,
    /// Route, active navigation, metadata and content regions as JSON.
    Json,
}
