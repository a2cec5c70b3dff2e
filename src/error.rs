use std::io;
use std::string::FromUtf8Error;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::plot::ChartOptionsBuilderError;

/// Errors raised while building a chart or serializing it to SVG.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot render an empty series")]
    EmptySeries,

    #[error("value at index {index} is not a finite number: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("chart has no series to plot")]
    NoSeries,

    #[error("values from {min} to {max} span more than a float can hold")]
    RangeOverflow { min: f64, max: f64 },

    #[error("invalid chart options: {0}")]
    Options(#[from] ChartOptionsBuilderError),

    #[error("drawing backend failed: {0}")]
    Backend(String),

    #[error("could not write rendered document: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    pub(crate) fn from_drawing<E>(error: DrawingAreaErrorKind<E>) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        RenderError::Backend(error.to_string())
    }
}

/// Errors raised while reading a rendered document back as text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("could not read rendered document: {0}")]
    Read(#[from] io::Error),

    #[error("rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Error of the one-shot export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
