//! Color definitions and utilities.

use std::borrow::Cow;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// Represents a color for plotting elements.
///
/// Serializes to the string form a Plotly backend accepts (`#rrggbb`,
/// `rgba(...)` or a CSS name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "gray")
    Named(String),
}

impl Color {
    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color::Rgba(r, g, b, a as f64 / 255.0))
        } else {
            None
        }
    }

    /// Parse the `rgba(r,g,b,a)` form written by `to_plot_string`.
    fn from_rgba_string(s: &str) -> Option<Self> {
        let inner = s.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return None;
        };
        let alpha: f64 = a.parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        Some(Color::Rgba(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?, alpha))
    }

    /// Convert the color to the string used in plot data.
    pub fn to_plot_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name),
        }
    }

    /// Color of multi-set bars and connector lines.
    pub const NEUTRAL_GRAY: Color = Color::Rgb(0x77, 0x77, 0x77);
}

impl Default for Color {
    fn default() -> Self {
        Color::NEUTRAL_GRAY
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plot_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if let Some(color) = Color::from_rgba_string(s) {
            return color;
        }
        if s.starts_with('#') || s.chars().all(|c| c.is_ascii_hexdigit()) && s.len() >= 6 {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_plot_string()
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Hex (#rrggbb), rgba(...) or CSS color name"
        })
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "black" => "#000000".to_string(),
        "white" => "#ffffff".to_string(),
        "red" => "#ff0000".to_string(),
        "green" => "#008000".to_string(),
        "blue" => "#0000ff".to_string(),
        "orange" => "#ffa500".to_string(),
        "purple" => "#800080".to_string(),
        "gray" | "grey" => "#808080".to_string(),
        "lightgray" | "lightgrey" => "#d3d3d3".to_string(),
        "darkgray" | "darkgrey" => "#404040".to_string(),

        // Default: return as-is (might be a valid CSS color)
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#1f77b4"), Some(Color::Rgb(0x1f, 0x77, 0xb4)));
        assert_eq!(Color::from_hex("222AA1"), Some(Color::Rgb(0x22, 0x2a, 0xa1)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_plot_string() {
        assert_eq!(Color::NEUTRAL_GRAY.to_plot_string(), "#777777");
        assert_eq!(Color::from("#222AA1").to_plot_string(), "#222aa1");
        assert_eq!(Color::from("Gray").to_plot_string(), "#808080");
        assert_eq!(Color::from("papayawhip").to_plot_string(), "papayawhip");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::Rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");

        let parsed: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_rgba_serde_round_trip() {
        let translucent = Color::from_hex("#ff000080").unwrap();
        let json = serde_json::to_string(&translucent).unwrap();
        assert!(json.starts_with("\"rgba(255,0,0,"));
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, translucent);

        assert_eq!(Color::from("rgba(1, 2, 3, 0.5)"), Color::Rgba(1, 2, 3, 0.5));
        assert_eq!(
            Color::from("rgba(1,2,3)"),
            Color::Named("rgba(1,2,3)".to_string())
        );
    }
}
