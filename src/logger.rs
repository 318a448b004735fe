// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const LABEL: &str = "latency-plot";

/// Writes timestamped log lines to stdout.
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let target = if record.level() >= Level::Debug {
            record.target()
        } else {
            LABEL
        };
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_level() {
        let logger = Logger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn line_format() {
        let logger = Logger::new(LevelFilter::Trace);
        let line = logger.format(
            &Record::builder()
                .level(Level::Info)
                .target("latency_plot::plotter")
                .args(format_args!("loaded {} files", 2))
                .build(),
        );
        assert!(line.ends_with("INFO  [latency-plot] loaded 2 files"), "{}", line);

        let line = logger.format(
            &Record::builder()
                .level(Level::Debug)
                .target("latency_plot::series")
                .args(format_args!("detail"))
                .build(),
        );
        assert!(line.ends_with("DEBUG [latency_plot::series] detail"), "{}", line);
    }
}
