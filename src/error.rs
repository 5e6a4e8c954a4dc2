//! Error types shared by the dashboard library and binaries.

use thiserror::Error;

/// Errors raised while resolving a navigation selection or rendering a page.
///
/// A missing image asset is not an error: it renders as an inline warning block.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown layout: {0} (expected `single_page` or `sidebar`)")]
    UnknownLayout(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
