//! Line styling options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Style configuration for the connecting line of a series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels; backend default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}
