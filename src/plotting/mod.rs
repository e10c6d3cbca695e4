//! Plot data generation.
//! Turns sorted intersection records into Plotly-style scatter series and
//! panel layouts. Nothing here renders.

pub mod error;
pub mod layout;
pub mod mapper;
pub mod plot;
pub mod style;

pub use error::{PlotError, PlotResult};
pub use layout::{bar_layout, point_layout, Layout, LayoutStyle};
pub use mapper::{decorate, decorate_all, to_plot_series, DecoratedRecord, SeriesStyle};
pub use plot::{Mode, PlotData, ScatterPlot, TraceType};
pub use style::{Color, LineStyle, Marker, MarkerColor, MarkerStyle, Palette};
