use std::ops::Range;

// Units-based suffixes for human formatting.
const UNITS: &[&str] = &["", " K", " M", " G", " T", " P"];

/// Formats numbers for axis ticks and summaries.
#[derive(Debug, Clone)]
pub struct LabelFormatter {
    /// Decimals digits to be used
    decimals: usize,
    /// Number of times the value will be divided by 1000
    divisor: u8,
}

impl LabelFormatter {
    /// A formatter that always prints `decimals` decimal digits, no units.
    pub fn fixed(decimals: usize) -> LabelFormatter {
        LabelFormatter {
            decimals,
            divisor: 0,
        }
    }

    /// A formatter picking units and decimal places so that numbers spread
    /// along `range` are told apart without printing noise digits.
    pub fn for_range(range: Range<f64>) -> LabelFormatter {
        let difference = (range.end - range.start).abs();
        if difference == 0.0 || !difference.is_finite() {
            return LabelFormatter::fixed(3);
        }
        let log = difference.log10() as i64;
        if log <= 0 {
            LabelFormatter::fixed((-log as usize).min(8) + 3)
        } else {
            LabelFormatter {
                decimals: log.rem_euclid(3) as usize,
                divisor: ((log - 1) / 3).min(UNITS.len() as i64 - 1) as u8,
            }
        }
    }

    pub fn label(&self, number: f64) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            number / 1000_f64.powi(self.divisor.into()),
            UNITS[self.divisor as usize]
        )
    }
}
