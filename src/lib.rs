//! Airbnb Pricing vs Sentiment Dashboard
//!
//! Presentation layer over the results of an offline analysis of Rhode Island
//! Airbnb listings: VADER sentiment scores from guest reviews joined with
//! listing prices and attributes. The analysis itself is not part of this
//! crate; its images and findings are shown as finished artifacts.
//!
//! - `navigation/`: layouts and the sidebar section options
//! - `dashboard/`: page model, section content, guarded image display, generator
//! - `formatters/`: markdown, HTML and JSON output
//! - `export`: static export of every navigation state
//! - `api_server` (feature `api`): axum server with askama pages

pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod formatters;
pub mod navigation;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dashboard::{show_image, AssetResolver, Block, DashboardGenerator, Page};
pub use error::DashboardError;
pub use navigation::{Layout, Section};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
