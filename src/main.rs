use std::env;
use std::fmt::Display;
use std::fs;

use clap::ArgMatches;
use log::info;
use regex::Regex;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use yansi::Color::Red;
use yansi::Paint;

use svgplot::export::export_chart_as_svg;
use svgplot::plot::{Chart, ChartOptionsBuilder, Series};
use svgplot::read::{DataReader, DataReaderBuilder};
use svgplot::stats::Stats;
use svgplot::RenderError;

mod app;

fn fail<T: Display>(message: T) -> ! {
    eprintln!("[{}] {}", Red.paint("ERROR"), message);
    std::process::exit(1);
}

fn use_color(option: &str) -> bool {
    match option {
        "no" => false,
        "yes" => true,
        _ => match env::var("TERM") {
            Ok(value) if value == "dumb" => false,
            _ => atty::is(atty::Stream::Stderr),
        },
    }
}

fn configure_output(option: &str, verbose: bool) {
    let color = use_color(option);
    if !color {
        Paint::disable();
    }
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    if let Err(error) = TermLogger::init(level, config, TerminalMode::Stderr, choice) {
        eprintln!("Could not set up logging: {}", error);
    }
}

// Value of a range bound flag, or `default` when absent.  A value that is
// not a number ends the program with clap's usage error.
fn bound(matches: &ArgMatches, name: &str, default: f64) -> f64 {
    if matches.is_present(name) {
        matches.value_of_t(name).unwrap_or_else(|e| e.exit())
    } else {
        default
    }
}

fn get_reader(matches: &ArgMatches) -> DataReader {
    let mut builder = DataReaderBuilder::default();
    if matches.is_present("min") || matches.is_present("max") {
        let min = bound(matches, "min", f64::NEG_INFINITY);
        let max = bound(matches, "max", f64::INFINITY);
        if min > max {
            fail("Minimum should be smaller than maximum");
        }
        builder.range(min..max);
    }
    if let Some(string) = matches.value_of("regex") {
        match Regex::new(string) {
            Ok(re) => {
                builder.regex(re);
            }
            Err(error) => fail(format!("Failed to parse regex {}: {}", string, error)),
        };
    }
    builder.build().unwrap_or_else(|error| fail(error))
}

fn get_chart(matches: &ArgMatches, values: &[f64]) -> Chart {
    let mut builder = ChartOptionsBuilder::default();
    builder
        .width(matches.value_of_t("width").unwrap_or_else(|e| e.exit()))
        .height(matches.value_of_t("height").unwrap_or_else(|e| e.exit()))
        .stroke_width(matches.value_of_t("stroke-width").unwrap_or_else(|e| e.exit()))
        .mesh(!matches.is_present("no-mesh"));
    if let Some(caption) = matches.value_of("caption") {
        builder.caption(caption);
    }
    let options = builder
        .build()
        .map_err(RenderError::from)
        .unwrap_or_else(|error| fail(error));
    let mut series = Series::new(values).unwrap_or_else(|error| fail(error));
    if let Some(label) = matches.value_of("label") {
        series = series.with_label(label);
    }
    let mut chart = Chart::new(options);
    chart.add_series(series);
    chart
}

fn line(matches: &ArgMatches) {
    let reader = get_reader(matches);
    let input = matches.value_of("input").unwrap_or("-");
    let values = reader
        .read(input)
        .unwrap_or_else(|error| fail(format!("Could not read {}: {}", input, error)));
    if matches.is_present("stats") {
        if let Some(stats) = Stats::new(&values, None) {
            eprint!("{}", stats);
        }
    }
    let chart = get_chart(matches, &values);
    let svg = export_chart_as_svg(&chart).unwrap_or_else(|error| fail(error));
    match matches.value_of("output") {
        Some(path) => {
            if let Err(error) = fs::write(path, svg) {
                fail(format!("Could not write {}: {}", path, error));
            }
            info!("Chart written to {}", path);
        }
        None => print!("{}", svg),
    }
}

fn main() {
    let matches = app::get_app().get_matches();
    let verbose = matches.is_present("verbose");
    configure_output(matches.value_of("color").unwrap_or("auto"), verbose);
    match matches.subcommand() {
        Some(("line", subcommand_matches)) => line(subcommand_matches),
        _ => unreachable!("Invalid subcommand"),
    };
}
