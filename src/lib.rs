// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Overlays hit and miss latency percentile series from one or more output
//! files on a single log-scale chart.

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

mod chart;
mod config;
mod error;
mod logger;
mod plotter;
mod render;
mod scales;
mod series;
mod viewer;

pub mod options;

pub use crate::chart::{Chart, ChartSeries, Marker, PALETTE};
pub use crate::config::{ChartConfig, Config};
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::plotter::{build_chart, render_and_show, PlotRequest};
pub use crate::render::{render, X_DESC, Y_DESC};
pub use crate::series::{parse_series, read_series, LatencyFile, LatencySeries};
pub use crate::viewer::{Viewer, WindowViewer};
