// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chart::{Chart, Marker};
use crate::scales::PercentileCoord;
use crate::Error;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontStyle;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

pub const X_DESC: &str = "latency [%]";
pub const Y_DESC: &str = "operation time [ns]";

const FONT: &str = "sans-serif";

fn backend_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(e.to_string())
}

/// Text is drawn with the bundled DejaVu font so no system fonts are needed.
fn register_fonts() -> Result<(), Error> {
    static REGISTER: Once = Once::new();
    static REGISTERED: AtomicBool = AtomicBool::new(false);

    REGISTER.call_once(|| {
        let font = dejavu::sans_mono::regular();
        if plotters::style::register_font(FONT, FontStyle::Normal, font).is_ok() {
            REGISTERED.store(true, Ordering::Release);
        }
    });

    if REGISTERED.load(Ordering::Acquire) {
        Ok(())
    } else {
        Err(Error::Render("failed to load bundled font".to_owned()))
    }
}

/// Percentile axis with grid lines on the chart's ticks, and the padded log
/// latency axis.
fn coordinates(chart: &Chart) -> (PercentileCoord, LogCoord<f64>) {
    let (low, high) = chart.y_range();
    (
        PercentileCoord::new(chart.x_extent(), chart.x_ticks()),
        (low..high).log_scale().into(),
    )
}

/// Whole nanoseconds from 1 up, otherwise enough decimals to tell the
/// sub-nanosecond grid lines apart.
fn latency_label(y: &f64) -> String {
    if *y >= 1.0 || *y <= 0.0 || !y.is_finite() {
        return format!("{:.0}", y);
    }
    let precision = (-y.log10()).ceil() as usize + 1;
    let label = format!("{:.*}", precision, y);
    label.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Legend sample: a short line with the series' marker in the middle.
fn legend_entry<'a, DB: DrawingBackend + 'a>(
    marker: Marker,
    (x, y): (i32, i32),
    size: i32,
    colour: RGBColor,
) -> DynElement<'a, DB, (i32, i32)> {
    let fill = colour.filled();
    let line = EmptyElement::at((x, y)) + PathElement::new(vec![(0, 0), (20, 0)], colour);
    match marker {
        Marker::Circle => (line + Circle::new((10, 0), size, fill)).into_dyn(),
        Marker::Triangle => (line + TriangleMarker::new((10, 0), size, fill)).into_dyn(),
        Marker::Square => {
            (line + Rectangle::new([(10 - size, -size), (10 + size, size)], fill)).into_dyn()
        }
        Marker::Diamond => (line
            + Polygon::new(
                vec![(10, -size), (10 + size, 0), (10, size), (10 - size, 0)],
                fill,
            ))
        .into_dyn(),
        Marker::Cross => (line + Cross::new((10, 0), size, fill)).into_dyn(),
    }
}

/// Draws the chart onto the drawing area: log latency axis, percentile axis,
/// one dotted line with markers per series and a legend.
pub fn render<DB: DrawingBackend>(chart: &Chart, root: &DrawingArea<DB, Shift>) -> Result<(), Error> {
    register_fonts()?;

    let config = chart.config();
    let size = config.marker_size() as i32;

    root.fill(&WHITE).map_err(backend_error)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 50);
    if let Some(caption) = config.caption() {
        builder.caption(caption, (FONT, 30));
    }

    let (x, y) = coordinates(chart);
    let mut context = builder.build_cartesian_2d(x, y).map_err(backend_error)?;

    context
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&latency_label)
        .label_style((FONT, 16))
        .draw()
        .map_err(backend_error)?;

    for series in chart.series() {
        let colour = series.colour();
        let marker = series.marker();
        let line = colour.stroke_width(config.stroke_width());
        let fill = colour.filled();

        context
            .draw_series(DashedLineSeries::new(series.points(), 2, 3, line))
            .map_err(backend_error)?
            .label(series.label())
            .legend(move |coord| legend_entry(marker, coord, size, colour));

        let drawn = match marker {
            Marker::Circle => {
                context.draw_series(series.points().map(|c| Circle::new(c, size, fill)))
            }
            Marker::Triangle => {
                context.draw_series(series.points().map(|c| TriangleMarker::new(c, size, fill)))
            }
            Marker::Square => context.draw_series(series.points().map(|c| {
                EmptyElement::at(c) + Rectangle::new([(-size, -size), (size, size)], fill)
            })),
            Marker::Diamond => context.draw_series(series.points().map(|c| {
                EmptyElement::at(c)
                    + Polygon::new(vec![(0, -size), (size, 0), (0, size), (-size, 0)], fill)
            })),
            Marker::Cross => {
                context.draw_series(series.points().map(|c| Cross::new(c, size, fill)))
            }
        };
        drawn.map_err(backend_error)?;
    }

    if !chart.is_empty() {
        context
            .configure_series_labels()
            .label_font((FONT, 14))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(backend_error)?;
    }

    root.present().map_err(backend_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartConfig, Config};
    use plotters::coord::ranged1d::BoldPoints;
    use std::path::Path;

    const WIDTH: u32 = 640;
    const HEIGHT: u32 = 480;

    fn draw(chart: &Chart) -> Vec<u8> {
        let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
            render(chart, &root).unwrap();
        }
        buf
    }

    fn contains(buf: &[u8], colour: RGBColor) -> bool {
        buf.chunks_exact(3)
            .any(|px| px == &[colour.0, colour.1, colour.2][..])
    }

    #[test]
    fn empty_chart() {
        let buf = draw(&Chart::new());
        // background and axes
        assert!(contains(&buf, WHITE));
        assert!(buf.chunks_exact(3).any(|px| px != &[255, 255, 255][..]));
    }

    #[test]
    fn every_marker() {
        let mut chart = Chart::with_config(ChartConfig::default());
        for i in 0..5 {
            let values = (0..=100).map(|p| (p as f64 + 1.0) * 10.0 * (i + 1) as f64).collect();
            chart.add_series(values, format!("run{}_hits", i), i);
        }
        let buf = draw(&chart);
        for series in chart.series() {
            assert!(contains(&buf, series.colour()), "{} not drawn", series.label());
        }
    }

    /// Columns of the plotting area that are drawn over for most of its height,
    /// which are the vertical grid lines and the y axis.
    fn vertical_lines(buf: &[u8]) -> usize {
        let rows = 40..400;
        let total = rows.len();
        (0..WIDTH as usize)
            .filter(|&x| {
                let drawn = rows
                    .clone()
                    .filter(|&y| {
                        let i = (y * WIDTH as usize + x) * 3;
                        buf[i..i + 3] != [255, 255, 255]
                    })
                    .count();
                drawn * 5 > total * 4
            })
            .count()
    }

    #[test]
    fn percentile_grid_follows_tick_step() {
        let chart = Chart::new();
        let (x, _) = coordinates(&chart);
        assert_eq!(x.key_points(BoldPoints(4)), chart.x_ticks());
        assert_eq!(x.key_points(BoldPoints(4)).len(), 21);

        let config = Config::from_toml(Path::new("plot.toml"), "[chart]\nx_tick_step = 20\n");
        let sparse = Chart::with_config(config.unwrap().chart());
        let dense = vertical_lines(&draw(&chart));
        let few = vertical_lines(&draw(&sparse));
        assert!(dense >= 15, "{} grid columns", dense);
        assert!(few <= 10, "{} grid columns", few);
    }

    #[test]
    fn latency_axis_is_logarithmic() {
        let mut chart = Chart::new();
        chart.add_series(vec![1.0, 10.0, 100.0, 1000.0], "run_hits", 0);
        let (_, y) = coordinates(&chart);
        let (low, high) = chart.y_range();
        assert_eq!(y.range(), low..high);

        let limit = (0, 900);
        let decade = y.map(&10.0, limit) - y.map(&1.0, limit);
        assert!(decade > 100);
        assert!((y.map(&100.0, limit) - y.map(&10.0, limit) - decade).abs() <= 1);
        assert!((y.map(&1000.0, limit) - y.map(&100.0, limit) - decade).abs() <= 1);
    }

    #[test]
    fn latency_labels() {
        assert_eq!(latency_label(&1.0), "1");
        assert_eq!(latency_label(&250.0), "250");
        assert_eq!(latency_label(&0.5), "0.5");
        assert_eq!(latency_label(&0.25), "0.25");
        assert_eq!(latency_label(&0.001), "0.001");
        assert_ne!(latency_label(&0.2), latency_label(&0.3));
    }

    #[test]
    fn legend_shows_markers() {
        // nothing positive to plot, so only the legend uses the series colour
        let mut chart = Chart::new();
        chart.add_series(vec![0.0, 0.0], "run_hits", 2);
        assert_eq!(chart.series()[0].marker(), Marker::Square);
        let colour = chart.series()[0].colour();
        let size = chart.config().marker_size() as usize;

        let buf = draw(&chart);
        let filled = |x: usize, y: usize| {
            let i = (y * WIDTH as usize + x) * 3;
            buf[i..i + 3] == [colour.0, colour.1, colour.2]
        };
        let square = (0..WIDTH as usize).any(|x| {
            (0..HEIGHT as usize - 2 * size).any(|y| (0..=2 * size).all(|dy| filled(x, y + dy)))
        });
        assert!(square);
    }

    #[test]
    fn non_positive_values() {
        let mut chart = Chart::new();
        chart.add_series(vec![0.0, 0.0, 0.0], "zeros", 0);
        chart.add_series(vec![-1.0, 5.0], "mixed", 1);
        draw(&chart);
    }
}
