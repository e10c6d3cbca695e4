//! Output collector for assembling UpSet plot results
//!
//! The `OutputCollector` provides a builder pattern for collecting set
//! summaries, intersections, plot series and layouts into one output file.

use std::fs::File;

use log::info;

use crate::plotting::error::PlotResult;
use crate::plotting::{
    bar_layout, decorate_all, point_layout, to_plot_series, LayoutStyle, Palette, SeriesStyle,
};
use crate::upset::IntersectionRecord;

use super::types::{IntersectionSummary, SetSummary, UpsetOutput};

/// Builder for collecting results into a unified structure
pub struct OutputCollector {
    output: UpsetOutput,
}

impl OutputCollector {
    /// Create a new output collector with version and timestamp
    pub fn new() -> Self {
        Self {
            output: UpsetOutput {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: crate::utils::time::utc_now_iso8601(),
                ..Default::default()
            },
        }
    }

    /// Set the input set summaries
    pub fn with_sets<S: AsRef<str>, T>(
        mut self,
        names: &[S],
        sets: &[Vec<T>],
        palette: &Palette,
    ) -> Self {
        self.output.sets = names
            .iter()
            .zip(sets)
            .enumerate()
            .map(|(index, (name, elements))| SetSummary {
                index,
                name: name.as_ref().to_string(),
                size: elements.len(),
                color: palette.get(index).ok().cloned(),
            })
            .collect();
        self
    }

    /// Decorate sorted records once and store both the intersection
    /// summaries and the plot series built from them
    pub fn with_intersections<T: ToString, S: AsRef<str>>(
        mut self,
        records: &[IntersectionRecord<T>],
        names: &[S],
        palette: &Palette,
        style: &SeriesStyle,
        include_elements: bool,
    ) -> PlotResult<Self> {
        let decorated = decorate_all(records, palette, names)?;
        self.output.intersections = decorated
            .iter()
            .map(|item| IntersectionSummary::from_decorated(item, names.len(), include_elements))
            .collect();
        self.output.plot = to_plot_series(&decorated, style);
        info!("Collected {} intersections", self.output.intersections.len());
        Ok(self)
    }

    /// Set both panel layouts, sized to the collected intersections
    pub fn with_layouts(mut self, style: &LayoutStyle) -> Self {
        let count = self.output.intersections.len();
        self.output.bar_layout = Some(bar_layout(count, style));
        self.output.point_layout = Some(point_layout(count, style));
        self
    }

    /// Build and return the final output
    pub fn build(self) -> UpsetOutput {
        self.output
    }

    /// Get a reference to the current output (for inspection)
    pub fn output(&self) -> &UpsetOutput {
        &self.output
    }

    /// Write JSON to the specified path
    ///
    /// The path should be the full filename (e.g., "sample.upset.json")
    pub fn write_json(&self, path: &str) -> std::io::Result<()> {
        self.output.write_json(path)
    }

    /// Write JSON using the output prefix
    ///
    /// Creates "{prefix}.upset.json"
    pub fn write_to_prefix(&self, prefix: &str) -> std::io::Result<()> {
        let path = format!("{}.upset.json", prefix);
        self.write_json(&path)
    }
}

impl Default for OutputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl UpsetOutput {
    /// Write this output to a JSON file
    pub fn write_json(&self, path: &str) -> std::io::Result<()> {
        if super::schema::should_validate() {
            let value = serde_json::to_value(self)
                .map_err(std::io::Error::other)?;
            if let Err(msg) = super::schema::validate(&value) {
                log::warn!("Schema validation failed for {}: {}", path, msg);
                if cfg!(debug_assertions) {
                    return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, msg));
                }
            }
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)
            .map_err(std::io::Error::other)?;
        info!("Wrote {}", path);
        Ok(())
    }

    /// Load output from a JSON file
    pub fn load_json(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let output: Self = serde_json::from_reader(file)?;
        Ok(output)
    }
}
