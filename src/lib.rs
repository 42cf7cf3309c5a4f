mod error;
mod files;
mod filter;
mod models;

use std::ffi::OsString;
use std::io::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use std::{io, process};

use anyhow::{Context as _, Result};
use clap::{Arg, ArgAction, CommandFactory as _, FromArgMatches as _};
use log::{debug, info};
use num_format::{Locale, ToFormattedString};

pub use crate::error::ConfigError;
pub use crate::files::{open_logfile, Output};
pub use crate::filter::dedup_lines;
pub use crate::models::{Stats, Window};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_FAILED: u8 = 2;

pub const USAGE_HINT: &str = "Use istat --help to get usage.";

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = concat!("version ", env!("CARGO_PKG_VERSION"), "."),
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// The filename of the irssi logfile to scan
    logfile: PathBuf,

    /// How many of the latest kept rows a duplicate is searched among
    #[arg(short, long, value_name = "N", default_value_t = 2, value_parser = parse_neighbours)]
    neighbours: usize,

    /// Write the remaining rows to PATH instead of standard output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Do not display any details or statistics about the execution
    #[arg(short, long)]
    silent: bool,
}

/// Only plain digits are a window size; `+3` or ` 3` are rejected.
fn parse_neighbours(value: &str) -> Result<usize, String> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{value} is not a numeric value"));
    }
    value.parse::<usize>().map_err(|err| err.to_string())
}

impl Args {
    /// Like `clap::Parser::try_parse_from`, with `-v` instead of `-V` for the version.
    pub fn try_parse_args_from<I, T>(itr: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Args::command()
            .arg(
                Arg::new("version")
                    .short('v')
                    .long("version")
                    .action(ArgAction::Version)
                    .help("Print version and exit"),
            )
            .try_get_matches_from(itr)?;
        Args::from_arg_matches(&matches)
    }

    pub fn try_parse_args() -> Result<Args, clap::Error> {
        Args::try_parse_args_from(std::env::args_os())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub logfile: PathBuf,
    pub neighbours: usize,
    pub verbose: bool,
    pub output: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        Config {
            logfile: args.logfile,
            neighbours: args.neighbours,
            verbose: !args.silent,
            output: args.output,
        }
    }
}

/// Filters `config.logfile` into the configured output.
///
/// The logfile is opened before the output is created, so a bad logfile
/// leaves no output file behind.
pub fn run(config: &Config) -> Result<Stats> {
    debug!("{:?}", config);
    let reader = open_logfile(&config.logfile)?;
    let mut output = Output::create(config.output.as_deref())?;

    let stats = dedup_lines(reader, &mut output, config.neighbours).with_context(|| {
        format!(
            "Failed to filter logfile: {}",
            config.logfile.to_string_lossy()
        )
    })?;
    output.flush().context("Failed to flush output")?;

    info!(
        "{}: {} rows read, {} kept",
        config.logfile.display(),
        stats.total(),
        stats.rows
    );
    Ok(stats)
}

pub fn write_report<W: Write>(w: &mut W, stats: &Stats, elapsed: Duration) -> io::Result<()> {
    writeln!(
        w,
        "Duplicates found: {}",
        stats.duplicates.to_formatted_string(&Locale::en)
    )?;
    writeln!(
        w,
        "Rows written: {}",
        stats.rows.to_formatted_string(&Locale::en)
    )?;
    writeln!(w, "Script executed in {:.6} seconds", elapsed.as_secs_f64())
}

/// Exit code for a failed run: configuration problems are usage errors.
pub fn exit_code(err: &anyhow::Error) -> process::ExitCode {
    if err.is::<ConfigError>() {
        process::ExitCode::from(EXIT_USAGE)
    } else {
        process::ExitCode::from(EXIT_FAILED)
    }
}
