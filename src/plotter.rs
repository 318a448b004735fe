// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chart::Chart;
use crate::config::ChartConfig;
use crate::series::read_series;
use crate::viewer::Viewer;
use crate::Error;

use std::path::PathBuf;

/// Which files to plot and which of their series to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRequest {
    outputs: Vec<PathBuf>,
    hits: bool,
    misses: bool,
}

impl PlotRequest {
    /// A request drawing both series of every file.
    pub fn new<I, P>(outputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            outputs: outputs.into_iter().map(Into::into).collect(),
            hits: true,
            misses: true,
        }
    }

    pub fn hits(mut self, hits: bool) -> Self {
        self.hits = hits;
        self
    }

    pub fn misses(mut self, misses: bool) -> Self {
        self.misses = misses;
        self
    }

    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    pub fn include_hits(&self) -> bool {
        self.hits
    }

    pub fn include_misses(&self) -> bool {
        self.misses
    }
}

/// Loads every file in order and adds its requested series. The first file
/// that fails aborts the whole chart.
pub fn build_chart(request: &PlotRequest, config: ChartConfig) -> Result<Chart, Error> {
    let mut chart = Chart::with_config(config);

    for (i, out) in request.outputs().iter().enumerate() {
        let (hits, misses) = read_series(out)?;
        if request.include_hits() {
            chart.add_series(hits, format!("{}_hits", out.display()), i);
        }
        if request.include_misses() {
            chart.add_series(misses, format!("{}_misses", out.display()), i);
        }
    }

    Ok(chart)
}

/// Builds the chart and hands it to the viewer exactly once.
pub fn render_and_show<V: Viewer + ?Sized>(
    request: &PlotRequest,
    config: ChartConfig,
    viewer: &mut V,
) -> Result<Chart, Error> {
    let chart = build_chart(request, config)?;
    info!(
        "plotting {} series from {} files",
        chart.len(),
        request.outputs().len()
    );
    viewer.show(&chart)?;
    Ok(chart)
}
