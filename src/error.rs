// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: missing line {line}, expected hit and miss series")]
    MissingLine { path: PathBuf, line: usize },
    #[error("{path}:{line}: invalid latency value: {token:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error("bad config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("chart window: {0}")]
    Window(String),
}
