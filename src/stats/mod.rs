use std::fmt;
use std::ops::Range;

use yansi::Color::Blue;

use crate::format::LabelFormatter;

#[derive(Debug)]
/// A struct holding statistical data regarding a unsorted set of numerical
/// values.
pub struct Stats {
    /// Minimum of the input values.
    pub min: f64,
    /// Maximum of the input values.
    pub max: f64,
    /// Average of the input values.
    pub avg: f64,
    /// Standard deviation of the input values.
    pub std: f64,
    /// Variance of the input values.
    pub var: f64,
    /// Number of samples of the input values.
    pub samples: usize,
    precision: Option<usize>, // If None, then human friendly display will be used
}

impl Stats {
    /// Creates a Stats struct from a slice of numerical data, or None if the
    /// slice is empty.
    ///
    /// `precision` is an Option with the number of decimals to display.  If
    /// "None" is used, human units will be used, with an heuristic based on the
    /// input data for deciding the units and the decimal places.
    pub fn new(vec: &[f64], precision: Option<usize>) -> Option<Self> {
        let first = *vec.first()?;
        let samples = vec.len();
        let avg = vec.iter().sum::<f64>() / samples as f64;
        let (min, max, squares) = vec.iter().fold(
            (first, first, 0.0),
            |(min, max, squares), val| {
                (min.min(*val), max.max(*val), squares + (avg - *val).powi(2))
            },
        );
        let var = squares / samples as f64;
        Some(Self {
            min,
            max,
            avg,
            std: var.sqrt(),
            var,
            samples,
            precision,
        })
    }

    /// Range of values to use for a plot axis.  A degenerate range (all the
    /// values are equal) is widened on each side by one unit or by 1% of
    /// the value, whichever is larger.
    pub fn axis_range(&self) -> Range<f64> {
        if self.max > self.min {
            self.min..self.max
        } else {
            let pad = (self.max.abs() * 0.01).max(1.0);
            (self.min - pad)..(self.max + pad)
        }
    }

    fn formatter(&self) -> LabelFormatter {
        match self.precision {
            None => LabelFormatter::for_range(self.min..self.max),
            Some(n) => LabelFormatter::fixed(n),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatter = self.formatter();
        writeln!(
            f,
            "Samples = {len}; Min = {min}; Max = {max}",
            len = Blue.paint(self.samples.to_string()),
            min = Blue.paint(formatter.label(self.min)),
            max = Blue.paint(formatter.label(self.max)),
        )?;
        writeln!(
            f,
            "Average = {avg}; Variance = {var}; STD = {std}",
            avg = Blue.paint(formatter.label(self.avg)),
            var = Blue.paint(format!("{:.3}", self.var)),
            std = Blue.paint(format!("{:.3}", self.std)),
        )
    }
}
