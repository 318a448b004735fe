// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use serde_derive::Deserialize;
use std::io::Read;
use std::path::Path;

/// Largest accepted window width or height in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Appearance settings loaded from an optional TOML file.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    chart: ChartConfig,
}

impl Config {
    pub fn chart(&self) -> ChartConfig {
        self.chart.clone()
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let mut content = String::new();
        std::fs::File::open(path)
            .and_then(|mut file| file.read_to_string(&mut content))
            .map_err(|e| Error::Config {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
        Self::from_toml(path, &content)
    }

    pub fn from_toml(path: &Path, content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        config.chart.validate().map_err(|reason| Error::Config {
            path: path.to_owned(),
            reason,
        })?;
        Ok(config)
    }
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    720
}

fn default_marker_size() -> u32 {
    4
}

fn one() -> u32 {
    1
}

fn default_x_tick_step() -> u32 {
    5
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    caption: Option<String>,
    #[serde(default = "default_marker_size")]
    marker_size: u32,
    #[serde(default = "one")]
    stroke_width: u32,
    #[serde(default = "default_x_tick_step")]
    x_tick_step: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption: None,
            marker_size: default_marker_size(),
            stroke_width: one(),
            x_tick_step: default_x_tick_step(),
        }
    }
}

impl ChartConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in &[("width", self.width), ("height", self.height)] {
            if *value == 0 || *value > MAX_DIMENSION {
                return Err(format!(
                    "chart {} must be between 1 and {}, got {}",
                    name, MAX_DIMENSION, value
                ));
            }
        }
        if self.x_tick_step == 0 {
            return Err("x_tick_step must be non-zero".to_owned());
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn marker_size(&self) -> u32 {
        self.marker_size
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn x_tick_step(&self) -> u32 {
        self.x_tick_step
    }
}
