// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PlotRequest;

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::LevelFilter;

use std::path::PathBuf;

pub const NO_OUTPUTS: &str = "at least one output need to be provided";

pub fn app() -> App<'static, 'static> {
    App::new("latency-plot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plot hit and miss latency percentiles from one or more output files")
        .arg(
            Arg::with_name("out")
                .value_name("FILE")
                .help("Create a plot for all provided output files")
                .multiple(true),
        )
        .arg(
            Arg::with_name("hits-only")
                .long("hits-only")
                .help("only plot the hit series")
                .conflicts_with("misses-only"),
        )
        .arg(
            Arg::with_name("misses-only")
                .long("misses-only")
                .help("only plot the miss series"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML chart appearance config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("verbosity (stacking)")
                .multiple(true),
        )
}

/// Turns parsed arguments into a request. Fails with a usage error when no
/// output file is given.
pub fn request(matches: &ArgMatches) -> Result<PlotRequest, clap::Error> {
    let outputs: Vec<PathBuf> = matches
        .values_of_os("out")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    if outputs.is_empty() {
        return Err(clap::Error::with_description(
            NO_OUTPUTS,
            ErrorKind::MissingRequiredArgument,
        ));
    }

    Ok(PlotRequest::new(outputs)
        .hits(!matches.is_present("misses-only"))
        .misses(!matches.is_present("hits-only")))
}

pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.value_of_os("config").map(PathBuf::from)
}

pub fn level(matches: &ArgMatches) -> LevelFilter {
    match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
