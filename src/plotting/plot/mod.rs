//! Plot series descriptors handed to the charting backend.

mod scatter;

pub use scatter::ScatterPlot;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Mode {
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers+lines")]
    MarkersLines,
}

/// Backend trace type. Only scatter traces are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    #[default]
    Scatter,
}

/// The two index-aligned series of an UpSet plot.
///
/// `bars[i]` and `points[i]` describe the `i`-th intersection in size order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlotData {
    /// Vertical ticks whose length is the intersection size
    pub bars: Vec<ScatterPlot<f64>>,
    /// Connected markers naming the participating sets
    pub points: Vec<ScatterPlot<String>>,
}

impl PlotData {
    /// Number of intersections plotted.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(serde_json::to_string(&Mode::LinesMarkers).unwrap(), "\"lines+markers\"");
        assert_eq!(serde_json::to_string(&Mode::MarkersLines).unwrap(), "\"markers+lines\"");
        assert_eq!(serde_json::to_string(&TraceType::Scatter).unwrap(), "\"scatter\"");
        assert_eq!(serde_json::to_string(&Mode::Markers).unwrap(), "\"markers\"");
    }
}
