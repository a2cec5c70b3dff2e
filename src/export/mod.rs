//! Serialization of charts to SVG documents.

pub use self::buffer::{SvgBuffer, SvgDocument};

mod buffer;

use std::io::Write;

use plotters::prelude::*;

use crate::error::{RenderError, Result};
use crate::plot::{Chart, ChartOptions, Series};

/// Media type of the documents produced by this module.
pub const SVG_MIME_TYPE: &str = "image/svg+xml;charset=utf-8";

/// Plots `values` as a line chart with default options and returns the SVG
/// markup.
///
/// The x-coordinate of every value is its position in the slice.  Fails with
/// a render error if `values` is empty or holds a non-finite number.
pub fn export_line_chart_as_svg(values: &[f64]) -> Result<String> {
    let mut chart = Chart::new(ChartOptions::default());
    chart.add_series(Series::new(values)?);
    export_chart_as_svg(&chart)
}

/// Renders `chart` and decodes the resulting document as text.
pub fn export_chart_as_svg(chart: &Chart) -> Result<String> {
    let document = render_svg(chart)?;
    Ok(document.decode()?)
}

/// Renders `chart` into a scoped byte buffer and returns it rewound for
/// reading.
pub fn render_svg(chart: &Chart) -> std::result::Result<SvgDocument, RenderError> {
    let mut buffer = SvgBuffer::new();
    let mut markup = String::new();
    {
        // The backend flushes its output into `markup` when presented.
        let root = SVGBackend::with_string(&mut markup, chart.size()).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(RenderError::from_drawing)?;
    }
    buffer.write_all(markup.as_bytes())?;
    debug!("Rendered {} bytes of SVG", buffer.len());
    Ok(buffer.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, ExportError};
    use crate::plot::ChartOptionsBuilder;
    use rand::Rng;
    use regex::Regex;

    const SERIES_STROKE: &str = "#0000FF";

    // Points of the polylines stroked with `color`, in document order.
    fn polylines(svg: &str, color: &str) -> Vec<Vec<(i32, i32)>> {
        let tag = Regex::new(r"<polyline[^>]*>").unwrap();
        let stroke = Regex::new(r#"stroke="([^"]*)""#).unwrap();
        let points = Regex::new(r#"points="([^"]*)""#).unwrap();
        tag.find_iter(svg)
            .map(|m| m.as_str())
            .filter(|t| {
                stroke
                    .captures(t)
                    .map_or(false, |c| c[1].eq_ignore_ascii_case(color))
            })
            .filter_map(|t| points.captures(t))
            .map(|c| {
                c[1].split_whitespace()
                    .map(|pair| {
                        let (x, y) = pair
                            .split_once(',')
                            .unwrap_or_else(|| panic!("point without comma: {:?}", pair));
                        let coord = |v: &str| -> i32 {
                            v.parse::<i32>()
                                .unwrap_or_else(|e| panic!("bad coordinate {:?}: {}", v, e))
                        };
                        (coord(x), coord(y))
                    })
                    .collect()
            })
            .collect()
    }

    fn bare_chart(values: &[f64]) -> Chart {
        let options = ChartOptionsBuilder::default().mesh(false).build().unwrap();
        let mut chart = Chart::new(options);
        chart.add_series(Series::new(values).unwrap());
        chart
    }

    fn starts_as_svg(text: &str) -> bool {
        let text = text.trim_start();
        if text.starts_with("<?xml") {
            text.find("?>")
                .map_or(false, |end| text[end + 2..].trim_start().starts_with("<svg"))
        } else {
            text.starts_with("<svg")
        }
    }

    #[test]
    fn default_export_is_svg() {
        let svg = export_line_chart_as_svg(&[1.0, 3.0, 2.0]).unwrap();
        assert!(starts_as_svg(&svg));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="640""#));
        assert_eq!(polylines(&svg, SERIES_STROKE).len(), 1);
    }

    #[test]
    fn line_follows_values_in_order() {
        let svg = export_chart_as_svg(&bare_chart(&[1.0, 3.0, 2.0])).unwrap();
        let lines = polylines(&svg, SERIES_STROKE);
        assert_eq!(lines.len(), 1);
        let points = &lines[0];
        assert_eq!(points.len(), 3);

        // x grows with the index, evenly spaced.
        let (dx1, dx2) = (points[1].0 - points[0].0, points[2].0 - points[1].0);
        assert!(dx1 > 0 && dx2 > 0);
        assert!((dx1 - dx2).abs() <= 1);

        // SVG y grows downwards: 3 is highest, then 2, then 1.
        let (y1, y3, y2) = (points[0].1, points[1].1, points[2].1);
        assert!(y3 < y2 && y2 < y1);
        assert!(((y1 - y2) - (y2 - y3)).abs() <= 1);
    }

    #[test]
    fn empty_input_is_a_render_error() {
        assert!(matches!(
            export_line_chart_as_svg(&[]),
            Err(ExportError::Render(RenderError::EmptySeries))
        ));
    }

    #[test]
    fn nan_is_a_render_error() {
        assert!(matches!(
            export_line_chart_as_svg(&[1.0, f64::NAN]),
            Err(ExportError::Render(RenderError::NonFiniteValue { index: 1, .. }))
        ));
    }

    #[test]
    fn overflowing_span_is_a_render_error() {
        assert!(matches!(
            export_line_chart_as_svg(&[f64::MAX, -f64::MAX]),
            Err(ExportError::Render(RenderError::RangeOverflow { .. }))
        ));
    }

    #[test]
    fn wide_finite_spans_still_render() {
        for values in [&[1e308, 0.0][..], &[1e300, -1e300][..]] {
            let svg = export_line_chart_as_svg(values).unwrap();
            assert!(starts_as_svg(&svg));
        }
    }

    #[test]
    fn huge_constant_series_is_centered() {
        let svg = export_chart_as_svg(&bare_chart(&[1e17, 1e17])).unwrap();
        let lines = polylines(&svg, SERIES_STROKE);
        let points = &lines[0];
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].1, points[1].1);
        // Plotting area spans pixels 10 to 469.
        assert!((points[0].1 - 239).abs() <= 2, "y = {}", points[0].1);
    }

    #[test]
    fn chart_without_series_is_a_render_error() {
        let chart = Chart::new(ChartOptions::default());
        assert!(matches!(render_svg(&chart), Err(RenderError::NoSeries)));
    }

    #[test]
    fn decoding_is_lossless() {
        let document = render_svg(&bare_chart(&[1.0, 3.0, 2.0])).unwrap();
        let bytes = document.as_bytes().to_vec();
        let text = document.decode().unwrap();
        assert_eq!(text.as_bytes(), &bytes[..]);
    }

    #[test]
    fn same_input_same_geometry() {
        let chart = bare_chart(&[0.5, -2.0, 8.0, 8.0, 3.25]);
        let first = export_chart_as_svg(&chart).unwrap();
        let second = export_chart_as_svg(&chart).unwrap();
        assert_eq!(
            polylines(&first, SERIES_STROKE),
            polylines(&second, SERIES_STROKE)
        );
    }

    #[test]
    fn random_sequences_render() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..50);
            let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-1e6..1e6)).collect();
            let svg = export_chart_as_svg(&bare_chart(&values)).unwrap();
            assert!(starts_as_svg(&svg));
            let lines = polylines(&svg, SERIES_STROKE);
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].len(), len);
        }
    }

    #[test]
    fn single_and_constant_values_render() {
        for values in [&[4.0][..], &[2.0, 2.0, 2.0][..]] {
            let svg = export_chart_as_svg(&bare_chart(values)).unwrap();
            assert!(starts_as_svg(&svg));
            assert_eq!(polylines(&svg, SERIES_STROKE)[0].len(), values.len());
        }
    }

    #[test]
    fn caption_and_legend_are_written() {
        let options = ChartOptionsBuilder::default()
            .caption("Requests")
            .build()
            .unwrap();
        let mut chart = Chart::new(options);
        chart
            .add_series(Series::new(&[1.0, 3.0, 2.0]).unwrap().with_label("p50"))
            .add_series(Series::new(&[2.0, 4.0, 5.0]).unwrap().with_label("p99"));
        let svg = export_chart_as_svg(&chart).unwrap();
        assert!(svg.contains("Requests"));
        assert!(svg.contains("p50"));
        assert!(svg.contains("p99"));
        assert!(!polylines(&svg, "#FF0000").is_empty());
    }

    #[test]
    fn mime_type_declares_utf8() {
        assert!(SVG_MIME_TYPE.starts_with("image/svg+xml"));
        assert!(SVG_MIME_TYPE.ends_with("charset=utf-8"));
    }

    #[test]
    fn decode_error_surfaces_through_export_error() {
        let mut buffer = SvgBuffer::new();
        buffer.write_all(&[0xc3, 0x28]).unwrap();
        let error: ExportError = buffer.finish().unwrap().decode().unwrap_err().into();
        assert!(matches!(error, ExportError::Decode(DecodeError::Utf8(_))));
    }
}
