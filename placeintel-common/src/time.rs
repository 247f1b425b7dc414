//! Timestamp and duration utilities

use chrono::{DateTime, Local, SecondsFormat, Timelike, Utc};
use std::time::Instant;

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC timestamp as an ISO-8601 string with microseconds and `Z` suffix
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current local wall-clock hour (0-23)
///
/// Business rules (open hours, rush windows, crowd tables) key off the
/// local hour, not UTC.
pub fn local_hour() -> u32 {
    Local::now().hour()
}

/// Wall-clock stopwatch for per-stage processing time measurements
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds since the stopwatch was started
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Round to 1 decimal place (scores)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (confidences and processing times)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
