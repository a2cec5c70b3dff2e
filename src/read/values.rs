use std::io::{self, BufRead};
use std::ops::Range;

use regex::Regex;

use crate::read::open_file;

#[derive(Debug, Default, Builder)]
/// Reads the numbers to plot, one per line.
pub struct DataReader {
    /// Keep only values inside this range.
    #[builder(setter(strip_option), default)]
    range: Option<Range<f64>>,
    /// Capture the value from each line with this regex: the group named
    /// `value` if present, else the first group.
    #[builder(setter(strip_option), default)]
    regex: Option<Regex>,
}

impl DataReader {
    /// Reads the values in `path` ("-" for stdin).  Lines holding no
    /// number are skipped.
    pub fn read(&self, path: &str) -> io::Result<Vec<f64>> {
        let mut vec: Vec<f64> = Vec::new();
        for line in open_file(path)?.lines() {
            match line {
                Ok(as_string) => {
                    if let Some(n) = self.parse_line(&as_string) {
                        if self.range.as_ref().map_or(true, |r| r.contains(&n)) {
                            vec.push(n);
                        }
                    }
                }
                Err(error) => error!("{}", error),
            }
        }
        debug!("Read {} values from {}", vec.len(), path);
        Ok(vec)
    }

    fn parse_line(&self, line: &str) -> Option<f64> {
        match &self.regex {
            Some(regex) => self.parse_regex(regex, line),
            None => self.parse_float(line),
        }
    }

    fn parse_float(&self, line: &str) -> Option<f64> {
        match line.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            Ok(n) => {
                debug!("Skipping non finite value {} at '{}'", n, line);
                None
            }
            Err(parse_error) => {
                debug!("Cannot parse float ({}) at '{}'", parse_error, line);
                None
            }
        }
    }

    fn parse_regex(&self, regex: &Regex, line: &str) -> Option<f64> {
        match regex.captures(line) {
            Some(cap) => {
                if let Some(name) = cap.name("value") {
                    self.parse_float(name.as_str())
                } else if let Some(capture) = cap.get(1) {
                    self.parse_float(capture.as_str())
                } else {
                    None
                }
            }
            None => {
                debug!("Regex does not match '{}'", line);
                None
            }
        }
    }
}
