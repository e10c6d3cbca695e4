//! Per-set color palette.

use super::color::Color;
use crate::plotting::error::{PlotError, PlotResult};

/// Default set colors, indexed by set.
pub const DEFAULT_PALETTE: [&str; 30] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#6fbd22",
    "#bcbd22", "#17becf", "#222AA1", "#7DC922", "#03F14A", "#2F0248", "#D31E70", "#370E0F",
    "#101A21", "#FF9585", "#BE93F6", "#1CF4A5", "#DACC14", "#BB012F", "#62AD27", "#49947F",
    "#A817D1", "#159326", "#652CBF", "#1922A7", "#2FC186", "#6A0570",
];

/// Read-only ordered colors, looked up by set index.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> PlotResult<Self> {
        if colors.is_empty() {
            return Err(PlotError::InvalidConfig("palette has no colors".to_string()));
        }
        Ok(Palette { colors })
    }

    /// Build a palette from hex strings, rejecting anything that is not hex.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> PlotResult<Self> {
        let colors = hex
            .iter()
            .map(|h| {
                Color::from_hex(h.as_ref()).ok_or_else(|| {
                    PlotError::InvalidConfig(format!("'{}' is not a hex color", h.as_ref()))
                })
            })
            .collect::<PlotResult<Vec<Color>>>()?;
        Palette::new(colors)
    }

    /// Color for set `index`.
    pub fn get(&self, index: usize) -> PlotResult<&Color> {
        self.colors.get(index).ok_or(PlotError::PaletteOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_PALETTE.iter().filter_map(|h| Color::from_hex(h)).collect(),
        }
    }
}
