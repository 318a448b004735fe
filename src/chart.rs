// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::ChartConfig;
use crate::series::LatencySeries;

use plotters::style::RGBColor;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
];

/// Point marker used to tell overlaid series apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Triangle,
    Square,
    Diamond,
    Cross,
}

pub const PALETTE: [Marker; 5] = [
    Marker::Circle,
    Marker::Triangle,
    Marker::Square,
    Marker::Diamond,
    Marker::Cross,
];

impl Marker {
    /// Round-robin over the palette.
    pub fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// One labeled line on the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    label: String,
    values: LatencySeries,
    marker: Marker,
    colour: RGBColor,
}

impl ChartSeries {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn colour(&self) -> RGBColor {
        self.colour
    }

    /// (percentile, latency) pairs which can be placed on a log axis.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value > 0.0)
            .map(|(index, value)| (index as f64, *value))
    }
}

/// Accumulates series until it is rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    series: Vec<ChartSeries>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Adds a dotted line with markers from the palette. Colours are assigned
    /// in insertion order.
    pub fn add_series(&mut self, values: LatencySeries, label: impl AsRef<str>, marker_index: usize) {
        let label = label.as_ref().to_owned();
        let marker = Marker::for_index(marker_index);
        let colour = COLOURS[self.series.len() % COLOURS.len()];
        trace!("adding series {} ({} values, {:?})", label, values.len(), marker);
        self.series.push(ChartSeries {
            label,
            values,
            marker,
            colour,
        });
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Upper bound of the percentile axis. Never less than 100, longer series
    /// extend it.
    pub fn x_extent(&self) -> f64 {
        let longest = self.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        (longest.saturating_sub(1) as f64).max(100.0)
    }

    /// Tick positions on the percentile axis, every `x_tick_step` from 0.
    pub fn x_ticks(&self) -> Vec<f64> {
        let step = self.config.x_tick_step().max(1) as usize;
        let extent = self.x_extent();
        (0u32..)
            .step_by(step)
            .map(|tick| tick as f64)
            .take_while(|tick| *tick <= extent)
            .collect()
    }

    /// Latency axis range covering every positive value with some headroom.
    pub fn y_range(&self) -> (f64, f64) {
        let (min, max) = self
            .series
            .iter()
            .flat_map(|s| s.points().map(|(_, y)| y))
            .fold((f64::INFINITY, 0.0f64), |(min, max), y| (min.min(y), max.max(y)));

        if max <= 0.0 {
            return (1.0, 10.0);
        }
        if (max - min).abs() < f64::EPSILON {
            return (min / 2.0, max * 2.0);
        }
        (min * 0.8, max * 1.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_round_robin() {
        for i in 0..20 {
            assert_eq!(Marker::for_index(i), PALETTE[i % 5]);
        }
        assert_eq!(Marker::for_index(0), Marker::Circle);
        assert_eq!(Marker::for_index(4), Marker::Cross);
        assert_eq!(Marker::for_index(5), Marker::Circle);
        assert_eq!(Marker::for_index(7), Marker::Square);
    }

    #[test]
    fn add_series_keeps_order() {
        let mut chart = Chart::new();
        assert!(chart.is_empty());

        chart.add_series(vec![1.0, 2.0], "a_hits", 0);
        chart.add_series(vec![3.0], "a_misses", 0);
        chart.add_series(vec![4.0], "b_hits", 1);

        assert_eq!(chart.len(), 3);
        assert_eq!(chart.labels(), vec!["a_hits", "a_misses", "b_hits"]);
        assert_eq!(chart.series()[0].values(), &[1.0, 2.0]);
        assert_eq!(chart.series()[1].marker(), Marker::Circle);
        assert_eq!(chart.series()[2].marker(), Marker::Triangle);
        assert_ne!(chart.series()[0].colour(), chart.series()[1].colour());
    }

    #[test]
    fn points_skip_non_positive() {
        let mut chart = Chart::new();
        chart.add_series(vec![0.0, 5.0, -1.0, 7.0], "s", 0);
        let points: Vec<_> = chart.series()[0].points().collect();
        assert_eq!(points, vec![(1.0, 5.0), (3.0, 7.0)]);
    }

    #[test]
    fn x_axis() {
        let mut chart = Chart::new();
        assert_eq!(chart.x_extent(), 100.0);
        let ticks = chart.x_ticks();
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[1], 5.0);
        assert_eq!(ticks[20], 100.0);

        chart.add_series(vec![1.0; 111], "long", 0);
        assert_eq!(chart.x_extent(), 110.0);
        assert_eq!(chart.x_ticks().last(), Some(&110.0));
    }

    #[test]
    fn y_axis() {
        let mut chart = Chart::new();
        assert_eq!(chart.y_range(), (1.0, 10.0));

        chart.add_series(vec![100.0], "flat", 0);
        assert_eq!(chart.y_range(), (50.0, 200.0));

        chart.add_series(vec![0.0, 10.0, 1000.0], "spread", 1);
        let (low, high) = chart.y_range();
        assert!(low < 10.0 && low > 0.0);
        assert!(high > 1000.0);
    }
}
