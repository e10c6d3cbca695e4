//! Configuration for UpSet plot generation.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::{Color, LayoutStyle, Palette, SeriesStyle};
use crate::upset::SingletonMode;

/// Plot generation configuration
#[derive(Deserialize, Debug, Clone)]
pub struct UpsetConfig {
    /// Hex colors overriding the default 30-color palette
    #[serde(default)]
    pub palette: Option<Vec<String>>,
    /// Color of multi-set bars and connector lines
    #[serde(default = "default_neutral_color")]
    pub neutral_color: String,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    /// Whether singleton bars count every element or only exclusive ones
    #[serde(default)]
    pub singletons: SingletonMode,
    /// Write element lists for each intersection into the output
    #[serde(default = "default_include_elements")]
    pub include_elements: bool,
    #[serde(default)]
    pub layout: LayoutStyle,
}

fn default_neutral_color() -> String { "#777777".to_string() }
fn default_bar_width() -> f64 { 10.0 }
fn default_marker_size() -> f64 { 10.0 }
fn default_include_elements() -> bool { true }

impl Default for UpsetConfig {
    fn default() -> Self {
        UpsetConfig {
            palette: None,
            neutral_color: default_neutral_color(),
            bar_width: default_bar_width(),
            marker_size: default_marker_size(),
            singletons: SingletonMode::default(),
            include_elements: default_include_elements(),
            layout: LayoutStyle::default(),
        }
    }
}

impl UpsetConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: UpsetConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&str>) -> std::io::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Palette for `set_count` sets.
    ///
    /// A palette shorter than the set count is accepted here; the missing
    /// colors surface as errors when the affected sets are plotted.
    pub fn palette(&self, set_count: usize) -> PlotResult<Palette> {
        let palette = match &self.palette {
            Some(hex) => Palette::from_hex(hex)?,
            None => Palette::default(),
        };
        if palette.len() < set_count {
            warn!(
                "Palette has {} colors but {} sets were given",
                palette.len(),
                set_count
            );
        }
        Ok(palette)
    }

    /// Series constants; the neutral color must be hex, like the palette.
    pub fn series_style(&self) -> PlotResult<SeriesStyle> {
        let neutral = Color::from_hex(&self.neutral_color).ok_or_else(|| {
            PlotError::InvalidConfig(format!(
                "neutral_color '{}' is not a hex color",
                self.neutral_color
            ))
        })?;
        Ok(SeriesStyle {
            neutral,
            bar_width: self.bar_width,
            marker_size: self.marker_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: UpsetConfig = serde_json::from_str("{}").unwrap();
        assert!(config.palette.is_none());
        assert_eq!(config.singletons, SingletonMode::Full);
        assert!(config.include_elements);
        assert_eq!(config.series_style().unwrap(), SeriesStyle::default());
        assert_eq!(config.layout, LayoutStyle::default());
    }

    #[test]
    fn test_overrides() {
        let json = r##"{
            "palette": ["#000000", "#ffffff"],
            "neutral_color": "#333333",
            "bar_width": 4,
            "singletons": "exclusive",
            "layout": {"left_margin": 200}
        }"##;
        let config: UpsetConfig = serde_json::from_str(json).unwrap();

        let palette = config.palette(2).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(config.singletons, SingletonMode::Exclusive);
        let style = config.series_style().unwrap();
        assert_eq!(style.neutral, Color::Rgb(0x33, 0x33, 0x33));
        assert_eq!(style.bar_width, 4.0);
        assert_eq!(config.layout.left_margin, 200.0);
        assert_eq!(config.layout.font_size, 12.0);
    }

    #[test]
    fn test_bad_palette_rejected() {
        let config: UpsetConfig = serde_json::from_str(r#"{"palette": ["teal"]}"#).unwrap();
        assert!(config.palette(1).is_err());
    }

    #[test]
    fn test_bad_neutral_color_rejected() {
        for bad in ["teal", "#12345", "#gggggg"] {
            let json = format!(r#"{{"neutral_color": "{}"}}"#, bad);
            let config: UpsetConfig = serde_json::from_str(&json).unwrap();
            match config.series_style() {
                Err(PlotError::InvalidConfig(msg)) => assert!(msg.contains(bad)),
                other => panic!("expected InvalidConfig for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_unknown_singleton_mode_rejected() {
        assert!(serde_json::from_str::<UpsetConfig>(r#"{"singletons": "some"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(UpsetConfig::load("/nonexistent/upset-config.json").is_err());
        assert!(UpsetConfig::load_or_default(None).is_ok());
    }
}
