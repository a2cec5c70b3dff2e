use clap::{self, Arg, Command};

fn add_input(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .help("Input file")
            .default_value("-")
            .long_help("If not present or a single dash, standard input will be used"),
    )
}

fn add_min_max(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("max")
            .long("max")
            .short('M')
            .help("Filter out values bigger than this")
            .takes_value(true),
    )
    .arg(
        Arg::new("min")
            .long("min")
            .short('m')
            .help("Filter out values smaller than this")
            .takes_value(true),
    )
}

fn add_regex(cmd: Command) -> Command {
    const LONG_RE_ABOUT: &str = "\
A regular expression used for capturing the values to be plotted inside input
lines.

By default this will use a capture group named `value`.  If not present, it will
use first capture group.

If no regex is used, a number per line is expected (something that can be parsed
as float).
";
    cmd.arg(
        Arg::new("regex")
            .long("regex")
            .short('R')
            .help("Use a regex to capture input values")
            .long_help(LONG_RE_ABOUT)
            .takes_value(true),
    )
}

fn add_size(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("width")
            .long("width")
            .short('w')
            .help("Width of the image, in pixels")
            .default_value("640")
            .takes_value(true),
    )
    .arg(
        Arg::new("height")
            .long("height")
            .short('H')
            .help("Height of the image, in pixels")
            .default_value("480")
            .takes_value(true),
    )
}

fn add_style(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("caption")
            .long("caption")
            .short('t')
            .help("Title drawn above the chart")
            .takes_value(true),
    )
    .arg(
        Arg::new("label")
            .long("label")
            .short('l')
            .help("Name of the series, shown in a legend")
            .takes_value(true),
    )
    .arg(
        Arg::new("stroke-width")
            .long("stroke-width")
            .help("Width of the line, in pixels")
            .default_value("2")
            .takes_value(true),
    )
    .arg(
        Arg::new("no-mesh")
            .long("no-mesh")
            .help("Do not draw axes, grid and tick labels"),
    )
}

pub fn get_app() -> Command<'static> {
    let mut line = Command::new("line")
        .version(clap::crate_version!())
        .about("Plot input values as a line, x being the position of each value")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the SVG document to this file instead of standard output")
                .takes_value(true),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .short('s')
                .help("Print a summary of the values to standard error"),
        );
    line = add_input(add_regex(add_min_max(add_style(add_size(line)))));

    Command::new("svgplot")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .subcommand_required(true)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .possible_values(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        )
        .subcommand(line)
}
