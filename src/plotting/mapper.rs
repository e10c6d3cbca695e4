//! Maps intersection records onto bar and point series.

use log::debug;

use super::error::{PlotError, PlotResult};
use super::plot::{Mode, PlotData, ScatterPlot};
use super::style::{Color, Marker, Palette};
use crate::upset::IntersectionRecord;

/// Visual constants shared by every series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    /// Color of multi-set bars and of connector lines
    pub neutral: Color,
    /// Bar line width in pixels
    pub bar_width: f64,
    /// Marker size for bar caps and membership points
    pub marker_size: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        SeriesStyle {
            neutral: Color::NEUTRAL_GRAY,
            bar_width: 10.0,
            marker_size: 10.0,
        }
    }
}

/// A record with its set names and colors resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedRecord<'a, T> {
    pub record: &'a IntersectionRecord<T>,
    /// One display name per member set
    pub set_names: Vec<String>,
    /// One palette color per member set
    pub colors: Vec<Color>,
}

/// Resolve display names and palette colors for each member set of `record`.
///
/// Pure: the record is not modified, so decorating twice is harmless.
pub fn decorate<'a, T, S: AsRef<str>>(
    record: &'a IntersectionRecord<T>,
    palette: &Palette,
    set_names: &[S],
) -> PlotResult<DecoratedRecord<'a, T>> {
    let indices = record.set_indices();
    let mut names = Vec::with_capacity(indices.len());
    let mut colors = Vec::with_capacity(indices.len());

    for &index in indices {
        let name = set_names.get(index).ok_or(PlotError::UnknownSet {
            index,
            count: set_names.len(),
        })?;
        names.push(name.as_ref().to_string());
        colors.push(palette.get(index)?.clone());
    }

    Ok(DecoratedRecord {
        record,
        set_names: names,
        colors,
    })
}

/// Decorate every record once, preserving order.
pub fn decorate_all<'a, T, S: AsRef<str>>(
    records: &'a [IntersectionRecord<T>],
    palette: &Palette,
    set_names: &[S],
) -> PlotResult<Vec<DecoratedRecord<'a, T>>> {
    records
        .iter()
        .map(|record| decorate(record, palette, set_names))
        .collect()
}

/// Bar and point series for already sorted, decorated records.
///
/// Position `i` in `decorated` becomes x = `i` in both series.
pub fn to_plot_series<T>(
    decorated: &[DecoratedRecord<'_, T>],
    style: &SeriesStyle,
) -> PlotData {
    let mut data = PlotData {
        bars: Vec::with_capacity(decorated.len()),
        points: Vec::with_capacity(decorated.len()),
    };

    for (i, item) in decorated.iter().enumerate() {
        let x = i as f64;
        let size = item.record.size();

        let bar_color = match item.colors.as_slice() {
            [single] => single.clone(),
            _ => style.neutral.clone(),
        };
        data.bars.push(
            ScatterPlot::new(vec![x, x], vec![0.0, size as f64])
                .mode(Mode::MarkersLines)
                .color(bar_color)
                .line_width(style.bar_width)
                .marker(Marker::LineEw)
                .size(style.marker_size)
                .text(size),
        );

        let mode = if item.set_names.len() > 1 {
            Mode::LinesMarkers
        } else {
            Mode::Markers
        };
        data.points.push(
            ScatterPlot::new(vec![x; item.set_names.len()], item.set_names.clone())
                .mode(mode)
                .size(style.marker_size)
                .colors(item.colors.clone())
                .line_color(style.neutral.clone()),
        );
    }

    debug!("Mapped {} intersections to plot series", data.len());
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::MarkerColor;
    use crate::upset::{enumerate, CombinationKey};

    fn names() -> Vec<String> {
        vec!["Alpha".to_string(), "Beta".to_string()]
    }

    #[test]
    fn test_decorate_resolves_names_and_colors() {
        let record = IntersectionRecord::from_legacy("01", vec!["b", "c"], "0-1-").unwrap();
        let palette = Palette::default();
        let decorated = decorate(&record, &palette, &names()).unwrap();

        assert_eq!(decorated.set_names, vec!["Alpha", "Beta"]);
        assert_eq!(
            decorated.colors,
            vec![palette.get(0).unwrap().clone(), palette.get(1).unwrap().clone()]
        );
        assert_eq!(decorated.set_names.len(), record.set_indices().len());
    }

    #[test]
    fn test_decorate_twice_is_identical() {
        let record = IntersectionRecord::new(CombinationKey::pair(0, 1), vec![1, 2]);
        let palette = Palette::default();
        let first = decorate(&record, &palette, &names()).unwrap();
        let second = decorate(&record, &palette, &names()).unwrap();
        assert_eq!(first, second);
        assert_eq!(record.set_indices(), &[0, 1]);
    }

    #[test]
    fn test_decorate_palette_out_of_range() {
        let record = IntersectionRecord::new(CombinationKey::singleton(2), vec!["x"]);
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let set_names = vec!["A", "B", "C"];
        match decorate(&record, &palette, &set_names) {
            Err(PlotError::PaletteOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected PaletteOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_decorate_unknown_set() {
        let record = IntersectionRecord::new(CombinationKey::pair(0, 3), vec!["x"]);
        assert!(matches!(
            decorate(&record, &Palette::default(), &names()),
            Err(PlotError::UnknownSet { index: 3, count: 2 })
        ));
    }

    #[test]
    fn test_single_set_series() {
        let record = IntersectionRecord::new(CombinationKey::singleton(1), vec!["a", "b", "c"]);
        let palette = Palette::default();
        let decorated = vec![decorate(&record, &palette, &names()).unwrap()];
        let data = to_plot_series(&decorated, &SeriesStyle::default());

        let bar = &data.bars[0];
        assert_eq!(bar.x, vec![0.0, 0.0]);
        assert_eq!(bar.y, vec![0.0, 3.0]);
        assert_eq!(bar.mode, Mode::MarkersLines);
        assert_eq!(&bar.line.color, palette.get(1).unwrap());
        assert_eq!(bar.marker.color, MarkerColor::Single(palette.get(1).unwrap().clone()));
        assert_eq!(bar.text, Some(3));
        assert_eq!(serde_json::to_value(bar).unwrap()["text"], serde_json::json!(3));

        let point = &data.points[0];
        assert_eq!(point.mode, Mode::Markers);
        assert_eq!(point.y, vec!["Beta".to_string()]);
        assert_eq!(point.x, vec![0.0]);
    }

    #[test]
    fn test_multi_set_series_is_gray() {
        let record = IntersectionRecord::new(CombinationKey::pair(0, 1), vec!["b"]);
        let palette = Palette::default();
        let decorated = vec![decorate(&record, &palette, &names()).unwrap()];
        let data = to_plot_series(&decorated, &SeriesStyle::default());

        assert_eq!(data.bars[0].line.color, Color::NEUTRAL_GRAY);
        assert_eq!(data.bars[0].marker.color, MarkerColor::Single(Color::NEUTRAL_GRAY));

        let point = &data.points[0];
        assert_eq!(point.mode, Mode::LinesMarkers);
        assert_eq!(point.x, vec![0.0, 0.0]);
        assert_eq!(point.y, vec!["Alpha".to_string(), "Beta".to_string()]);
        assert_eq!(point.line.color, Color::NEUTRAL_GRAY);
        assert_eq!(
            point.marker.color,
            MarkerColor::PerPoint(vec![
                palette.get(0).unwrap().clone(),
                palette.get(1).unwrap().clone()
            ])
        );
    }

    #[test]
    fn test_series_end_to_end() {
        let sets = vec![vec!["a", "b", "c"], vec!["b", "c", "d"]];
        let records = enumerate(&sets);
        let decorated = decorate_all(&records, &Palette::default(), &["A", "B"]).unwrap();
        let data = to_plot_series(&decorated, &SeriesStyle::default());

        // one bar and one point series per record, decorated once each
        assert_eq!(data.bars.len(), records.len());
        assert_eq!(data.points.len(), records.len());

        let heights: Vec<f64> = data.bars.iter().map(|b| b.y[1]).collect();
        assert_eq!(heights, vec![3.0, 3.0, 2.0]);
        for (i, bar) in data.bars.iter().enumerate() {
            assert_eq!(bar.x, vec![i as f64, i as f64]);
        }
        assert_eq!(data.points[2].y, vec!["A".to_string(), "B".to_string()]);
    }
}
