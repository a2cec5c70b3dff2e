use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq)]
/// An ordered, immutable sequence of y-values.  The x-value of every point
/// is its position in the sequence.
pub struct Series {
    values: Vec<f64>,
    label: Option<String>,
}

impl Series {
    /// Creates a Series from a slice of numerical data.
    ///
    /// Fails if the slice is empty or holds a NaN or infinite value.
    pub fn new(values: &[f64]) -> Result<Series, RenderError> {
        if values.is_empty() {
            return Err(RenderError::EmptySeries);
        }
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(RenderError::NonFiniteValue {
                index,
                value: *value,
            });
        }
        Ok(Series {
            values: values.to_vec(),
            label: None,
        })
    }

    /// Names the series in the chart legend.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Series {
        self.label = Some(label.into());
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (x, y) pairs of the series, x being the 0-based index.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(x, y)| (x as f64, *y))
    }
}
