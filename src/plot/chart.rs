use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;
use crate::format::LabelFormatter;
use crate::plot::Series;
use crate::stats::Stats;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_MARGIN: u32 = 10;
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

// Room reserved for tick labels when the mesh is drawn.
const LABEL_AREA: u32 = 40;
// Length of the line sample shown next to a legend entry.
const LEGEND_SAMPLE: i32 = 20;
const MAX_X_LABELS: usize = 10;

/// Colours assigned to series in insertion order.
pub const PALETTE: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
/// Drawing options of a `Chart`.
pub struct ChartOptions {
    /// Width of the image, in pixels.
    #[builder(default = "DEFAULT_WIDTH")]
    pub width: u32,
    /// Height of the image, in pixels.
    #[builder(default = "DEFAULT_HEIGHT")]
    pub height: u32,
    /// Blank space around the plotting area, in pixels.
    #[builder(default = "DEFAULT_MARGIN")]
    pub margin: u32,
    /// Width of the series lines, in pixels.
    #[builder(default = "DEFAULT_STROKE_WIDTH")]
    pub stroke_width: u32,
    /// Title drawn above the plotting area.
    #[builder(setter(into, strip_option), default)]
    pub caption: Option<String>,
    /// Whether to draw axes, grid and tick labels.
    #[builder(default = "true")]
    pub mesh: bool,
}

impl ChartOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        let margin = self.margin.unwrap_or(DEFAULT_MARGIN);
        if width == 0 || height == 0 {
            return Err(format!("chart size {}x{} is empty", width, height));
        }
        if margin.saturating_mul(2) >= width.min(height) {
            return Err(format!(
                "margin {} leaves no room in a {}x{} chart",
                margin, width, height
            ));
        }
        Ok(())
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            stroke_width: DEFAULT_STROKE_WIDTH,
            caption: None,
            mesh: true,
        }
    }
}

#[derive(Debug, Clone)]
/// A drawing surface paired with the series plotted on it.
pub struct Chart {
    options: ChartOptions,
    series: Vec<Series>,
}

impl Chart {
    /// Creates a Chart with no series.
    pub fn new(options: ChartOptions) -> Chart {
        Chart {
            options,
            series: Vec::new(),
        }
    }

    /// Adds a series, to be drawn as a connected line.
    pub fn add_series(&mut self, series: Series) -> &mut Chart {
        self.series.push(series);
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Size of the image, in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.options.width, self.options.height)
    }

    /// Colour of the series at `index`.
    pub fn color(index: usize) -> RGBColor {
        PALETTE[index % PALETTE.len()]
    }

    /// Stats over the values of every series, or None for a chart without
    /// series.
    pub fn stats(&self) -> Option<Stats> {
        let values: Vec<f64> = self
            .series
            .iter()
            .flat_map(|series| series.values().iter().copied())
            .collect();
        Stats::new(&values, None)
    }

    /// Range of the x axis: the indexes of the longest series.
    pub fn x_range(&self) -> Range<f64> {
        match self.series.iter().map(Series::len).max() {
            Some(len) if len > 1 => 0.0..(len - 1) as f64,
            _ => -0.5..0.5,
        }
    }

    /// Draws the chart on any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), RenderError> {
        let stats = self.stats().ok_or(RenderError::NoSeries)?;
        let x_range = self.x_range();
        let y_range = stats.axis_range();
        // Plotters cannot place ticks on a range whose span overflows.
        if !(y_range.end - y_range.start).is_finite() {
            return Err(RenderError::RangeOverflow {
                min: stats.min,
                max: stats.max,
            });
        }
        debug!(
            "Drawing {} series, x in {:?}, y in {:?}",
            self.series.len(),
            x_range,
            y_range
        );
        root.fill(&WHITE).map_err(RenderError::from_drawing)?;

        let label_area = if self.options.mesh { LABEL_AREA } else { 0 };
        let mut builder = ChartBuilder::on(root);
        builder
            .margin(self.options.margin)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area);
        if let Some(caption) = &self.options.caption {
            builder.caption(caption, ("sans-serif", 20).into_font());
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range.clone())
            .map_err(RenderError::from_drawing)?;

        if self.options.mesh {
            let formatter = LabelFormatter::for_range(y_range);
            let y_label = |value: &f64| formatter.label(*value);
            let x_label = |value: &f64| format!("{:.0}", value);
            let x_ticks = self
                .series
                .iter()
                .map(Series::len)
                .max()
                .unwrap_or(1)
                .min(MAX_X_LABELS);
            chart
                .configure_mesh()
                .x_labels(x_ticks)
                .x_label_formatter(&x_label)
                .y_label_formatter(&y_label)
                .draw()
                .map_err(RenderError::from_drawing)?;
        }

        for (index, series) in self.series.iter().enumerate() {
            let color = Chart::color(index);
            let drawn = chart
                .draw_series(LineSeries::new(
                    series.points(),
                    color.stroke_width(self.options.stroke_width),
                ))
                .map_err(RenderError::from_drawing)?;
            if let Some(label) = series.label() {
                drawn.label(label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + LEGEND_SAMPLE, y)],
                        color.stroke_width(2),
                    )
                });
            }
        }

        if self.series.iter().any(|series| series.label().is_some()) {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(RenderError::from_drawing)?;
        }
        Ok(())
    }
}
