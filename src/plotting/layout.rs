//! Layout records for the bar and point panels.
//!
//! Static backend configuration: the only inputs are the number of
//! intersections (to pad the x range) and the margins/font from
//! [`LayoutStyle`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Font {
    pub size: f64,
}

/// One axis of a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Axis {
    pub showgrid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    pub showticklabels: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

/// Panel margins in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Margin {
    pub t: f64,
    pub b: f64,
    pub l: f64,
    pub r: f64,
}

/// Layout of one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Layout {
    pub autosize: bool,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
    pub showlegend: bool,
}

/// Margins and fonts shared by both panels.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Room for set names on the y axis
    #[serde(default = "default_left_margin")]
    pub left_margin: f64,
    #[serde(default = "default_right_margin")]
    pub right_margin: f64,
    /// Top margin of the bar panel and bottom margin of the point panel
    #[serde(default = "default_outer_margin")]
    pub outer_margin: f64,
}

fn default_font_size() -> f64 { 12.0 }
fn default_left_margin() -> f64 { 100.0 }
fn default_right_margin() -> f64 { 10.0 }
fn default_outer_margin() -> f64 { 10.0 }

impl Default for LayoutStyle {
    fn default() -> Self {
        LayoutStyle {
            font_size: default_font_size(),
            left_margin: default_left_margin(),
            right_margin: default_right_margin(),
            outer_margin: default_outer_margin(),
        }
    }
}

fn hidden_x_axis(count: usize) -> Axis {
    Axis {
        showgrid: false,
        zeroline: Some(false),
        showticklabels: false,
        range: Some([-1.0, count as f64 + 1.0]),
        tickfont: None,
    }
}

fn labelled_y_axis(style: &LayoutStyle) -> Axis {
    Axis {
        showgrid: true,
        zeroline: None,
        showticklabels: true,
        range: None,
        tickfont: Some(Font {
            size: style.font_size,
        }),
    }
}

/// Layout for the bar panel with `bar_count` bars.
pub fn bar_layout(bar_count: usize, style: &LayoutStyle) -> Layout {
    Layout {
        autosize: true,
        xaxis: hidden_x_axis(bar_count),
        yaxis: labelled_y_axis(style),
        margin: Margin {
            t: style.outer_margin,
            b: 0.0,
            l: style.left_margin,
            r: style.right_margin,
        },
        showlegend: false,
    }
}

/// Layout for the membership panel with `point_count` point columns.
pub fn point_layout(point_count: usize, style: &LayoutStyle) -> Layout {
    Layout {
        autosize: true,
        xaxis: hidden_x_axis(point_count),
        yaxis: labelled_y_axis(style),
        margin: Margin {
            t: 0.0,
            b: style.outer_margin,
            l: style.left_margin,
            r: style.right_margin,
        },
        showlegend: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_layout() {
        let layout = bar_layout(5, &LayoutStyle::default());
        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "autosize": true,
                "xaxis": {
                    "showgrid": false,
                    "zeroline": false,
                    "showticklabels": false,
                    "range": [-1.0, 6.0]
                },
                "yaxis": {
                    "showgrid": true,
                    "showticklabels": true,
                    "tickfont": {"size": 12.0}
                },
                "margin": {"t": 10.0, "b": 0.0, "l": 100.0, "r": 10.0},
                "showlegend": false
            })
        );
    }

    #[test]
    fn test_point_layout_margins() {
        let style = LayoutStyle {
            left_margin: 160.0,
            ..Default::default()
        };
        let layout = point_layout(3, &style);
        assert_eq!(layout.margin, Margin { t: 0.0, b: 10.0, l: 160.0, r: 10.0 });
        assert_eq!(layout.xaxis.range, Some([-1.0, 4.0]));
        assert!(!layout.showlegend);
    }

    #[test]
    fn test_style_defaults_from_empty_json() {
        let style: LayoutStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, LayoutStyle::default());
    }
}
