//! Marker styles for bar caps and set-membership points.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Marker symbols understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// Horizontal tick, used to cap bars
    LineEw,
}

/// Either one color for the whole series or one color per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(Color),
    PerPoint(Vec<Color>),
}

impl Default for MarkerColor {
    fn default() -> Self {
        MarkerColor::Single(Color::default())
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarkerStyle {
    /// Marker size (diameter in pixels)
    pub size: f64,
    /// Marker color(s)
    pub color: MarkerColor,
    /// Marker shape; backend default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Marker>,
}

impl MarkerStyle {
    /// Set the marker shape.
    pub fn symbol(mut self, marker: Marker) -> Self {
        self.symbol = Some(marker);
        self
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Use one color for every point.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = MarkerColor::Single(color.into());
        self
    }

    /// Use one color per point.
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.color = MarkerColor::PerPoint(colors);
        self
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            size: 6.0,
            color: MarkerColor::default(),
            symbol: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_names() {
        assert_eq!(serde_json::to_string(&Marker::LineEw).unwrap(), "\"line-ew\"");
    }

    #[test]
    fn test_marker_color_shapes() {
        let single = MarkerStyle::default().size(10.0).color("#1f77b4").symbol(Marker::LineEw);
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            serde_json::json!({"size": 10.0, "color": "#1f77b4", "symbol": "line-ew"})
        );

        let per_point = MarkerStyle::default()
            .size(10.0)
            .colors(vec![Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255)]);
        assert_eq!(
            serde_json::to_value(&per_point).unwrap(),
            serde_json::json!({"size": 10.0, "color": ["#000000", "#ffffff"]})
        );
    }
}
