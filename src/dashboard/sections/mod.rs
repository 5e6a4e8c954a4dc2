//! Dashboard section content.
//!
//! Each module returns the blocks for one part of the dashboard. The prose is
//! fixed: it narrates results computed offline.

pub mod masthead;
pub mod s1_overview;
pub mod s2_data;
pub mod s3_methodology;
pub mod s4_results;
pub mod s5_impact;
pub mod s6_takeaways;
pub mod footer;
