// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Operation times in nanoseconds, one value per percentile. The index of a
/// value is its position on the x-axis.
pub type LatencySeries = Vec<f64>;

const HITS: usize = 0;
const MISSES: usize = 1;

/// Parses one `;` separated line into a series. On failure the offending
/// token is returned.
pub fn parse_series(line: &str) -> Result<LatencySeries, String> {
    line.split(';')
        .map(|token| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(token.to_owned()),
            }
        })
        .collect()
}

/// The contents of a latency file: a hit series on the first line and a miss
/// series on the second. Anything after the second line is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct LatencyFile {
    hits: LatencySeries,
    misses: LatencySeries,
}

impl LatencyFile {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_owned(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut lines = Vec::with_capacity(2);
        for line in reader.lines().take(2) {
            lines.push(line.map_err(|source| Error::FileAccess {
                path: path.to_owned(),
                source,
            })?);
        }

        Self::from_lines(path, &lines)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        let lines: Vec<&str> = content.lines().take(2).collect();
        Self::from_lines(path, &lines)
    }

    fn from_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<Self, Error> {
        // both lines must be present before anything is parsed
        if lines.len() < 2 {
            return Err(Error::MissingLine {
                path: path.to_owned(),
                line: lines.len() + 1,
            });
        }

        let series = |index: usize| {
            parse_series(lines[index].as_ref()).map_err(|token| Error::Parse {
                path: path.to_owned(),
                line: index + 1,
                token,
            })
        };

        Ok(Self {
            hits: series(HITS)?,
            misses: series(MISSES)?,
        })
    }

    pub fn hits(&self) -> &[f64] {
        &self.hits
    }

    pub fn misses(&self) -> &[f64] {
        &self.misses
    }

    pub fn into_series(self) -> (LatencySeries, LatencySeries) {
        (self.hits, self.misses)
    }
}

/// Reads the hit and miss series from a latency file.
pub fn read_series<P: AsRef<Path>>(path: P) -> Result<(LatencySeries, LatencySeries), Error> {
    let path = path.as_ref();
    let file = LatencyFile::load(path)?;
    debug!(
        "loaded {}: {} hits {} misses",
        path.display(),
        file.hits().len(),
        file.misses().len()
    );
    Ok(file.into_series())
}
