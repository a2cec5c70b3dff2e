pub use self::chart::{
    Chart, ChartOptions, ChartOptionsBuilder, ChartOptionsBuilderError, PALETTE,
};
pub use self::series::Series;

mod chart;
mod series;
