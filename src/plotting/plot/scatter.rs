//! Scatter series descriptor.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Mode, TraceType};
use crate::plotting::style::{Color, LineStyle, Marker, MarkerStyle};

/// A scatter series: points, optionally joined by a line.
///
/// `Y` is numeric for bar ticks and the set name for membership points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScatterPlot<Y> {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<Y>,
    /// Drawing mode
    pub mode: Mode,
    /// Trace type
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    /// Line style
    pub line: LineStyle,
    /// Marker style
    pub marker: MarkerStyle,
    /// Hover value (intersection cardinality on bars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<usize>,
    /// Which fields the hover label shows
    pub hoverinfo: String,
}

impl<Y> ScatterPlot<Y> {
    /// Create a new marker-only scatter series from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<Y>) -> Self {
        ScatterPlot {
            x,
            y,
            mode: Mode::Markers,
            trace_type: TraceType::Scatter,
            line: LineStyle::default(),
            marker: MarkerStyle::default(),
            text: None,
            hoverinfo: "text".to_string(),
        }
    }

    /// Set the drawing mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set line and marker to the same color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.marker = self.marker.color(c.clone());
        self.line.color = c;
        self
    }

    /// Set individual marker colors for each point.
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.marker = self.marker.colors(colors);
        self
    }

    /// Set the line color only.
    pub fn line_color(mut self, color: impl Into<Color>) -> Self {
        self.line.color = color.into();
        self
    }

    /// Set the line width.
    pub fn line_width(mut self, width: f64) -> Self {
        self.line.width = Some(width);
        self
    }

    /// Set the marker type.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = self.marker.symbol(marker);
        self
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.marker = self.marker.size(size);
        self
    }

    /// Set the hover value.
    pub fn text(mut self, value: usize) -> Self {
        self.text = Some(value);
        self
    }
}
