// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use latency_plot::{fatal, options, render_and_show, Config, Logger, WindowViewer};

fn main() {
    let matches = options::app().get_matches();

    // a missing output list is a usage error, reported before anything else
    let request = match options::request(&matches) {
        Ok(request) => request,
        Err(e) => e.exit(),
    };

    if Logger::new(options::level(&matches)).init().is_err() {
        eprintln!("failed to initialize log");
        std::process::exit(1);
    }

    info!("latency-plot {} initializing...", env!("CARGO_PKG_VERSION"));

    let config = match options::config_path(&matches) {
        Some(path) => match Config::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => fatal!("{}", e),
        },
        None => Config::default(),
    };

    let mut viewer = WindowViewer::new("latency-plot");
    if let Err(e) = render_and_show(&request, config.chart(), &mut viewer) {
        fatal!("{}", e);
    }
}
