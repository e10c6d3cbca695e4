//! Output module for UpSet plot results
//!
//! This module provides:
//! - `UpsetOutput`: A single structure containing sets, intersections, series and layouts
//! - `OutputCollector`: A builder pattern for assembling it
//!
//! # Example
//!
//! ```ignore
//! use upsetplot::output::OutputCollector;
//!
//! let collector = OutputCollector::new()
//!     .with_sets(&names, &sets, &palette)
//!     .with_intersections(&records, &names, &palette, &style, true)?
//!     .with_layouts(&layout_style);
//!
//! collector.write_to_prefix("results/sample")?;
//! ```

pub mod collector;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use collector::OutputCollector;
pub use types::{IntersectionSummary, SetSummary, UpsetOutput};
