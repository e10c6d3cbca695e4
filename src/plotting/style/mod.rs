//! Styling module for plot series.
//!
//! Colors, the per-set palette, line styles and marker styles. Every type
//! here serializes to the attribute shape a Plotly scatter trace expects.

pub mod color;
pub mod line_style;
pub mod marker;
pub mod palette;

pub use color::Color;
pub use line_style::LineStyle;
pub use marker::{Marker, MarkerColor, MarkerStyle};
pub use palette::{Palette, DEFAULT_PALETTE};
