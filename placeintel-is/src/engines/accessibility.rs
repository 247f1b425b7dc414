//! Accessibility intelligence engine
//!
//! Scores how accessible a place is likely to be, detects a fixed checklist
//! of features, and derives inclusive recommendations. Feature detection is
//! category-driven with randomized unknowns; the recommendations are a pure
//! function of the detected features and the raw category label.

use placeintel_common::rng::RandomSource;
use placeintel_common::time::{round1, round2, Stopwatch};
use serde::Serialize;

use crate::category::raw_primary_label;
use crate::models::PlaceInput;

/// Fixed accessibility feature checklist
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccessibilityFeatures {
    pub ramp_access: bool,
    pub elevator: bool,
    pub accessible_restrooms: bool,
    pub braille_signage: bool,
    pub hearing_loop: bool,
    pub wide_entrances: bool,
    pub accessible_parking: bool,
}

/// Inclusive recommendations grouped by need
#[derive(Debug, Clone, Default, Serialize)]
pub struct InclusiveRecommendations {
    pub mobility_friendly_areas: Vec<String>,
    pub sensory_accommodations: Vec<String>,
    pub cognitive_support: Vec<String>,
}

/// Accessibility intelligence result for one place
#[derive(Debug, Clone, Serialize)]
pub struct AccessibilityIntelligence {
    pub wheelchair_accessible: bool,
    pub accessibility_score: f64,
    pub features: AccessibilityFeatures,
    pub inclusive_recommendations: InclusiveRecommendations,
    pub processing_time_ms: f64,
}

const MODERN_KEYWORDS: [&str; 4] = ["new", "modern", "center", "mall"];

/// Analyzes accessibility for one place
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityIntelligenceEngine;

impl AccessibilityIntelligenceEngine {
    pub fn analyze(
        &self,
        place: &PlaceInput,
        rng: &mut dyn RandomSource,
    ) -> AccessibilityIntelligence {
        let watch = Stopwatch::start();

        let label = raw_primary_label(&place.categories);
        let score = accessibility_score(label.as_deref(), &place.name, rng);
        let features = detect_features(label.as_deref(), rng);
        let inclusive_recommendations = inclusive_recommendations(label.as_deref(), &features);

        AccessibilityIntelligence {
            // The threshold applies to the unrounded score
            wheelchair_accessible: score >= 7.0,
            accessibility_score: round1(score),
            features,
            inclusive_recommendations,
            processing_time_ms: round2(watch.elapsed_ms()),
        }
    }
}

/// Accessibility heuristic in [0, 10]
///
/// Without category data the base score is returned as-is: no name bonus and
/// no random perturbation.
fn accessibility_score(label: Option<&str>, name: &str, rng: &mut dyn RandomSource) -> f64 {
    let mut score = 5.0;

    let Some(label) = label else {
        return score;
    };

    let name_lower = name.to_lowercase();

    // Modern establishments tend to be more accessible
    if MODERN_KEYWORDS.iter().any(|w| name_lower.contains(w)) {
        score += 2.0;
    }

    if label.contains("library") || label.contains("hospital") {
        // Public buildings usually more accessible
        score += 3.0;
    } else if label.contains("restaurant") && name_lower.contains("chain") {
        // Chain restaurants often have standards
        score += 2.0;
    } else if label.contains("gym") {
        score += 1.5;
    }

    score += rng.uniform(-1.0, 1.0);

    score.clamp(0.0, 10.0)
}

fn detect_features(label: Option<&str>, rng: &mut dyn RandomSource) -> AccessibilityFeatures {
    let Some(label) = label else {
        return default_features(rng);
    };

    if label.contains("library") {
        AccessibilityFeatures {
            ramp_access: true,
            elevator: true,
            accessible_restrooms: true,
            braille_signage: true,
            hearing_loop: true,
            wide_entrances: true,
            accessible_parking: true,
        }
    } else if label.contains("restaurant") {
        AccessibilityFeatures {
            ramp_access: rng.coin(),
            // Most restaurants are single floor
            elevator: false,
            accessible_restrooms: rng.coin(),
            braille_signage: false,
            hearing_loop: false,
            wide_entrances: rng.coin(),
            accessible_parking: rng.coin(),
        }
    } else if label.contains("gym") {
        AccessibilityFeatures {
            ramp_access: true,
            elevator: rng.coin(),
            accessible_restrooms: true,
            braille_signage: false,
            hearing_loop: false,
            wide_entrances: true,
            accessible_parking: true,
        }
    } else {
        default_features(rng)
    }
}

fn default_features(rng: &mut dyn RandomSource) -> AccessibilityFeatures {
    AccessibilityFeatures {
        ramp_access: rng.coin(),
        elevator: rng.coin(),
        accessible_restrooms: rng.coin(),
        braille_signage: false,
        hearing_loop: false,
        wide_entrances: rng.coin(),
        accessible_parking: rng.coin(),
    }
}

/// Pure function of (features, label); no randomness at this stage
fn inclusive_recommendations(
    label: Option<&str>,
    features: &AccessibilityFeatures,
) -> InclusiveRecommendations {
    let mut recommendations = InclusiveRecommendations::default();

    let Some(label) = label else {
        return recommendations;
    };

    if features.ramp_access {
        recommendations
            .mobility_friendly_areas
            .push("main entrance accessible".to_string());
    }
    if features.elevator {
        recommendations
            .mobility_friendly_areas
            .push("all floors accessible".to_string());
    }
    if features.accessible_restrooms {
        recommendations
            .mobility_friendly_areas
            .push("accessible restroom facilities".to_string());
    }

    if label.contains("library") {
        recommendations.sensory_accommodations.extend([
            "quiet study areas available".to_string(),
            "adjustable lighting in reading areas".to_string(),
        ]);
    }
    if features.hearing_loop {
        recommendations
            .sensory_accommodations
            .push("hearing loop system available".to_string());
    }

    if label.contains("library") {
        recommendations.cognitive_support.extend([
            "clear signage and wayfinding".to_string(),
            "staff available for assistance".to_string(),
        ]);
    } else if label.contains("restaurant") {
        recommendations
            .cognitive_support
            .push("picture menus available".to_string());
    }

    recommendations
}
