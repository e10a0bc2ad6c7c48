use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use geodecimate::decimate::commands;
use geodecimate::decimate::error::Error;
use geodecimate::decimate::text;
use std::path::Path;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// global args land on whichever matches they were given to
fn global_flag(matches: &ArgMatches, name: &str) -> bool {
    matches.is_present(name) || matches.subcommand().1.map_or(false, |m| m.is_present(name))
}

fn input_path<'a>(matches: &'a ArgMatches) -> Option<&'a Path> {
    matches.value_of("input").map(Path::new)
}

fn run(matches: ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("simplify", Some(m)) => commands::simplify::run(m, input_path(m)),
        ("count", Some(m)) => commands::count::run(input_path(m)),
        _ => Err(Error::UnknownCommand),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {}", e);
    }
}

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn main() {
    let simplify = SubCommand::with_name("simplify")
        .about(text::SIMPLIFY_ABOUT)
        .after_help(text::SIMPLIFY_AFTER_HELP)
        .arg(
            Arg::with_name("tolerance")
                .help(text::TOLERANCE_ARG_HELP)
                .env("GEODECIMATE_TOLERANCE")
                .required(true)
                .index(1),
        );

    let matches = App::new("geodecimate")
        .version(VERSION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .about("geodecimate - simplify GeoJSON and WKT line geometries")
        .after_help(text::MAIN_AFTER_HELP)
        .arg(
            Arg::with_name("input")
                .help("Read inputs from FILE instead of STDIN")
                .long("input")
                .short("i")
                .takes_value(true)
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log per-entity coordinate counts to STDERR")
                .long("verbose")
                .short("v")
                .global(true),
        )
        .subcommand(simplify)
        .subcommand(SubCommand::with_name("count").about(text::COUNT_ABOUT))
        .get_matches();

    setup_logging(global_flag(&matches, "verbose"));

    if let Err(e) = run(matches) {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
