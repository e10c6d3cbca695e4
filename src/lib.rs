//! UpSet plot data generation.
//!
//! Enumerates intersections among a collection of named sets and maps them
//! onto bar and connector-point series for a Plotly-compatible backend.

pub mod config;
pub mod input;
pub mod output;
pub mod plotting;
pub mod upset;
pub mod utils;
