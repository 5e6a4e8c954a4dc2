//! Dashboard Module
//!
//! Builds the pricing-vs-sentiment dashboard as a page of blocks.
//!
//! ## Sections
//! 1. Overview - objective of the analysis
//! 2. About the Data - listings, reviews, engineered variables
//! 3. Methodology - cleaning, VADER scoring, aggregation
//! 4. Results & Visuals - insight cards and the four analysis images
//! 5. Business Impact
//! 6. Key Takeaways

pub mod assets;
pub mod generator;
pub mod sections;
pub mod types;

pub use assets::{show_image, AssetResolver, AssetSpec, ALL_ASSETS};
pub use generator::{DashboardGenerator, LinkStyle};
pub use types::{Block, ImagePanel, NavItem, Page};
