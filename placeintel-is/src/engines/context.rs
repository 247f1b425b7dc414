//! Real-time context engine
//!
//! Estimates the current situation at a place from the local clock and the
//! raw primary category label: open/closed status, crowd level, best visit
//! windows, detected events, wait time and weather impact. All category
//! checks here run against the raw label, not the mapped enum, so a
//! multi-keyword label can match different branches per check.

use placeintel_common::rng::RandomSource;
use placeintel_common::time::{local_hour, round2, utc_timestamp, Stopwatch};
use serde::Serialize;

use crate::category::raw_primary_label;
use crate::models::PlaceInput;

/// Open/closed status estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceStatus {
    Open,
    Closed,
}

/// Crowd level estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Quiet,
    Moderate,
    Busy,
}

/// Real-time context result for one place
#[derive(Debug, Clone, Serialize)]
pub struct RealTimeContext {
    pub current_status: PlaceStatus,
    pub crowd_level: CrowdLevel,
    pub best_visit_times: Vec<String>,
    pub live_events: Vec<String>,
    pub estimated_wait_time: String,
    pub weather_impact: String,
    pub last_updated: String,
    pub confidence_score: f64,
    pub processing_time_ms: f64,
}

/// Analyzes the real-time situation at a place
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeContextEngine;

impl RealTimeContextEngine {
    /// Analyze a place at the current local hour
    pub fn analyze(&self, place: &PlaceInput, rng: &mut dyn RandomSource) -> RealTimeContext {
        self.analyze_at(place, local_hour(), rng)
    }

    /// Analyze a place with an explicit local hour
    pub fn analyze_at(
        &self,
        place: &PlaceInput,
        hour: u32,
        rng: &mut dyn RandomSource,
    ) -> RealTimeContext {
        let watch = Stopwatch::start();

        let label =
            raw_primary_label(&place.categories).unwrap_or_else(|| "general".to_string());

        let crowd_level = estimate_crowd_level(&label, hour, rng);

        RealTimeContext {
            current_status: determine_status(&label, hour),
            crowd_level,
            best_visit_times: suggest_best_times(&label),
            live_events: detect_events(&label, hour),
            estimated_wait_time: estimate_wait_time(crowd_level).to_string(),
            weather_impact: assess_weather_impact(&label, rng).to_string(),
            last_updated: utc_timestamp(),
            // Independent draw, reused downstream as a context-reliability proxy
            confidence_score: round2(rng.uniform(0.7, 0.95)),
            processing_time_ms: round2(watch.elapsed_ms()),
        }
    }
}

/// Open/closed from per-category business-hour intervals (inclusive)
fn determine_status(label: &str, hour: u32) -> PlaceStatus {
    let (open, close) = if label.contains("restaurant") {
        (6, 23)
    } else if label.contains("coffee") {
        (6, 20)
    } else if label.contains("gym") {
        (5, 23)
    } else if label.contains("library") {
        (8, 20)
    } else {
        (9, 21)
    };

    if (open..=close).contains(&hour) {
        PlaceStatus::Open
    } else {
        PlaceStatus::Closed
    }
}

/// Crowd level from per-category peak-hour tables
///
/// Labels outside the three tabled categories draw a random level.
fn estimate_crowd_level(label: &str, hour: u32, rng: &mut dyn RandomSource) -> CrowdLevel {
    let (busy, moderate): (&[u32], &[u32]) = if label.contains("restaurant") {
        (&[12, 13, 18, 19, 20], &[11, 14, 17, 21])
    } else if label.contains("coffee") {
        (&[7, 8, 9, 14, 15], &[10, 11, 16, 17])
    } else if label.contains("gym") {
        (&[6, 7, 17, 18, 19], &[8, 9, 16, 20])
    } else {
        return match rng.pick_index(3) {
            0 => CrowdLevel::Quiet,
            1 => CrowdLevel::Moderate,
            _ => CrowdLevel::Busy,
        };
    };

    if busy.contains(&hour) {
        CrowdLevel::Busy
    } else if moderate.contains(&hour) {
        CrowdLevel::Moderate
    } else {
        CrowdLevel::Quiet
    }
}

fn suggest_best_times(label: &str) -> Vec<String> {
    let times: &[&str] = if label.contains("restaurant") {
        &["11:30-12:00", "14:30-17:00", "21:00-22:00"]
    } else if label.contains("coffee") {
        &["10:00-11:30", "15:30-17:00"]
    } else if label.contains("gym") {
        &["10:00-16:00", "21:00-23:00"]
    } else if label.contains("library") {
        &["9:00-11:00", "14:00-16:00"]
    } else {
        &["10:00-12:00", "14:00-16:00"]
    };
    times.iter().map(|t| t.to_string()).collect()
}

/// Potential live events; first matching category/hour combination wins
fn detect_events(label: &str, hour: u32) -> Vec<String> {
    if label.contains("library") && (14..=16).contains(&hour) {
        vec!["study group session".to_string()]
    } else if label.contains("gym") && (hour == 18 || hour == 19) {
        vec!["fitness class".to_string()]
    } else if label.contains("coffee") && (hour == 15 || hour == 16) {
        vec!["afternoon networking".to_string()]
    } else {
        Vec::new()
    }
}

fn estimate_wait_time(crowd_level: CrowdLevel) -> &'static str {
    match crowd_level {
        CrowdLevel::Busy => "10-15 minutes",
        CrowdLevel::Moderate => "5-10 minutes",
        CrowdLevel::Quiet => "no wait",
    }
}

/// Weather impact from a fresh random condition draw per call
fn assess_weather_impact(label: &str, rng: &mut dyn RandomSource) -> &'static str {
    const CONDITIONS: [&str; 3] = ["sunny", "rainy", "cloudy"];
    let current_weather = CONDITIONS[rng.pick_index(CONDITIONS.len())];

    if current_weather == "rainy" && label.contains("outdoor") {
        "high impact - indoor alternatives recommended"
    } else if current_weather == "sunny" && label.contains("park") {
        "positive impact - great weather for outdoor activities"
    } else {
        "minimal impact"
    }
}
