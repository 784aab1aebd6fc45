// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Initialize logging on stderr with an optional level from config.
/// Falls back to INFO if level is None or invalid.
pub fn init_logging(log_level: Option<&str>) {
    let level = log_level
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    FmtSubscriber::builder()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Check a `[general].log_level` value.
pub fn validate_log_level(level: Option<&str>) -> Result<(), String> {
    match level {
        Some(level) if !LOG_LEVELS.contains(&level) => Err(format!(
            "[general].log_level '{}' is invalid (expected one of: {})",
            level,
            LOG_LEVELS.join(", ")
        )),
        _ => Ok(()),
    }
}
