//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! svgplot = "*"
//! ```
//!
//! ```rust
//! use svgplot::export_line_chart_as_svg;
//!
//! // Plot the values as a line, x being the position of each value
//! let svg = export_line_chart_as_svg(&[1.0, 3.0, 2.0]).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! Charts with several series or custom options are built explicitly and
//! handed to the exporter:
//!
//! ```rust
//! use svgplot::export::export_chart_as_svg;
//! use svgplot::plot::{Chart, ChartOptionsBuilder, Series};
//!
//! let options = ChartOptionsBuilder::default()
//!     .width(800_u32)
//!     .caption("Latency")
//!     .build()
//!     .unwrap();
//! let mut chart = Chart::new(options);
//! chart
//!     .add_series(Series::new(&[1.0, 3.0, 2.0]).unwrap().with_label("p50"))
//!     .add_series(Series::new(&[2.0, 5.0, 4.0]).unwrap().with_label("p99"));
//! let svg = export_chart_as_svg(&chart).unwrap();
//! assert!(svg.contains("Latency"));
//! ```

#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod error;
pub mod export;
mod format;
pub mod plot;
pub mod read;
pub mod stats;

pub use crate::error::{DecodeError, ExportError, RenderError};
pub use crate::export::export_line_chart_as_svg;
