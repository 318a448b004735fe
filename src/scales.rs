// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;

use std::ops::Range;

/// Linear percentile axis whose grid lines and labels sit exactly on the
/// given ticks instead of the ones plotters would pick.
pub struct PercentileCoord {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl PercentileCoord {
    pub fn new(extent: f64, ticks: Vec<f64>) -> Self {
        Self {
            inner: (0.0..extent).into(),
            ticks,
        }
    }
}

impl Ranged for PercentileCoord {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}
