//! Output data structures for UpSet plot results
//!
//! Everything a caller needs to draw the plot: per-set and
//! per-intersection summaries, the two series and both panel layouts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::plotting::{Color, DecoratedRecord, Layout, PlotData};

/// Top-level output structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpsetOutput {
    /// Tool version
    pub version: String,

    /// Timestamp of generation (ISO 8601 format)
    pub timestamp: String,

    /// Input sets in index order
    pub sets: Vec<SetSummary>,

    /// Intersections in plot order (largest first)
    pub intersections: Vec<IntersectionSummary>,

    /// Bar and point series, index-aligned with `intersections`
    pub plot: PlotData,

    /// Layout of the bar panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_layout: Option<Layout>,

    /// Layout of the membership panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_layout: Option<Layout>,
}

/// One input set
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetSummary {
    pub index: usize,
    pub name: String,
    /// Number of elements as given (repeats included)
    pub size: usize,
    /// Palette color; absent when the palette is shorter than the set list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// One plotted intersection
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionSummary {
    /// Combination key, e.g. "012"; `.`-joined ("1.12") past ten sets
    pub set: String,

    /// Member set indices, ascending
    pub set_indices: Vec<usize>,

    /// Member set names, aligned with `set_indices`
    pub set_names: Vec<String>,

    /// Member set colors, aligned with `set_indices`
    pub colors: Vec<Color>,

    /// Intersection cardinality
    pub size: usize,

    /// Shared elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl IntersectionSummary {
    /// Summarize a decorated record from a collection of `num_sets` sets,
    /// optionally keeping its elements.
    pub fn from_decorated<T: ToString>(
        item: &DecoratedRecord<'_, T>,
        num_sets: usize,
        include_elements: bool,
    ) -> Self {
        let record = item.record;
        Self {
            set: record.key.display(num_sets),
            set_indices: record.set_indices().to_vec(),
            set_names: item.set_names.clone(),
            colors: item.colors.clone(),
            size: record.size(),
            names: include_elements
                .then(|| record.elements.iter().map(|e| e.to_string()).collect()),
        }
    }
}
