//! Intersection engine for UpSet plots.
//!
//! Enumerates set combinations (singletons, pairs and contiguous chains
//! anchored at each pair), deduplicates them by combination key and orders
//! them by intersection size.

pub mod enumerate;
pub mod intersect;
pub mod record;

pub use enumerate::{enumerate, enumerate_with, sort_records, SingletonMode};
pub use intersect::{exclusive_elements, intersect};
pub use record::{CombinationKey, IntersectionRecord};
