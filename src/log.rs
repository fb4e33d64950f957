// src/log.rs
//! Tracing setup shared by the GUI and CLI binaries.
//!
//! Two sinks: compact lines on stderr, and a plain-text copy in
//! `.store/debug.log`. Timestamps are time since start. `RUST_LOG` overrides
//! the default `mlb_scrape=info` (`debug` with `verbose`).

use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mlb_scrape={level}")));

    // File sink is best-effort.
    let file_layer = fs::create_dir_all(STORE_DIR)
        .ok()
        .and_then(|_| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(LOG_FILE)
                .build(STORE_DIR)
                .ok()
        })
        .map(|appender| {
            fmt::layer()
                .with_ansi(false)
                .with_timer(fmt::time::uptime())
                .with_writer(appender)
        });

    let console_layer = fmt::layer()
        .compact()
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr);

    // A second init (tests, re-entry) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();
}
