// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chart::Chart;
use crate::render::render;
use crate::Error;

use minifb::{Key, Window, WindowOptions};
use plotters::backend::BGRXPixel;
use plotters::prelude::*;

use std::time::Duration;

/// Presents a finished chart to the user.
pub trait Viewer {
    fn show(&mut self, chart: &Chart) -> Result<(), Error>;
}

/// Shows the chart in a window and blocks until the window is closed or
/// escape is pressed.
pub struct WindowViewer {
    title: String,
}

impl WindowViewer {
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().to_owned(),
        }
    }

    fn frame(chart: &Chart, width: usize, height: usize) -> Result<Vec<u32>, Error> {
        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| Error::Render(format!("window of {}x{} is too large", width, height)))?;
        let mut buf = vec![0u8; len];
        {
            let root = BitMapBackend::<BGRXPixel>::with_buffer_and_format(
                &mut buf,
                (width as u32, height as u32),
            )
            .map_err(|e| Error::Render(e.to_string()))?
            .into_drawing_area();
            render(chart, &root)?;
        }

        // BGRX bytes are the 0RGB words minifb expects
        Ok(buf
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
            .collect())
    }
}

impl Viewer for WindowViewer {
    fn show(&mut self, chart: &Chart) -> Result<(), Error> {
        let width = chart.config().width() as usize;
        let height = chart.config().height() as usize;

        let frame = Self::frame(chart, width, height)?;

        let mut window = Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(|e| Error::Window(e.to_string()))?;
        window.limit_update_rate(Some(Duration::from_millis(50)));

        info!("showing {} series, close the window to exit", chart.len());
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&frame, width, height)
                .map_err(|e| Error::Window(e.to_string()))?;
        }

        debug!("chart window closed");
        Ok(())
    }
}
