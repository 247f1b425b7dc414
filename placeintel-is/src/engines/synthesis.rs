//! Unified recommendation engine
//!
//! Synthesizes the three analyzer outputs plus the raw input into a
//! confidence score, ranked insights, alternative suggestions, a visit
//! strategy and accessibility notes. Checks run in a fixed order and stop at
//! the documented caps; the order is part of the observable contract.

use placeintel_common::time::{round2, Stopwatch};
use serde::Serialize;

use crate::category::raw_primary_label;
use crate::engines::accessibility::AccessibilityIntelligence;
use crate::engines::business::BusinessIntelligence;
use crate::engines::context::{CrowdLevel, RealTimeContext};
use crate::models::PlaceInput;

const MAX_INSIGHTS: usize = 4;
const MAX_ALTERNATIVES: usize = 3;
const MAX_NOTES: usize = 3;

/// Unified recommendation result for one place
#[derive(Debug, Clone, Serialize)]
pub struct UnifiedRecommendations {
    pub confidence_score: f64,
    pub personalized_insights: Vec<String>,
    pub alternative_suggestions: Vec<String>,
    pub optimal_visit_strategy: String,
    pub accessibility_notes: Vec<String>,
    pub processing_time_ms: f64,
}

/// Combines all intelligence types into unified recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedRecommendationEngine;

impl UnifiedRecommendationEngine {
    pub fn synthesize(
        &self,
        place: &PlaceInput,
        business: &BusinessIntelligence,
        context: &RealTimeContext,
        accessibility: &AccessibilityIntelligence,
    ) -> UnifiedRecommendations {
        let watch = Stopwatch::start();

        UnifiedRecommendations {
            confidence_score: round2(confidence_score(business, context, accessibility)),
            personalized_insights: personalized_insights(business, context, accessibility),
            alternative_suggestions: alternative_suggestions(place),
            optimal_visit_strategy: visit_strategy(context, accessibility),
            accessibility_notes: accessibility_notes(accessibility),
            processing_time_ms: round2(watch.elapsed_ms()),
        }
    }
}

/// Heuristic confidence blend, not a true probability
///
/// Business and accessibility contribute fixed weights when their scores are
/// positive; the context confidence is taken verbatim. Defaults to 0.5 when
/// nothing contributed.
fn confidence_score(
    business: &BusinessIntelligence,
    context: &RealTimeContext,
    accessibility: &AccessibilityIntelligence,
) -> f64 {
    let mut scores = Vec::new();

    if business.popularity_score > 0.0 {
        scores.push(0.8);
    }
    if context.confidence_score > 0.0 {
        scores.push(context.confidence_score);
    }
    if accessibility.accessibility_score > 0.0 {
        scores.push(0.7);
    }

    if scores.is_empty() {
        0.5
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Ordered insight checks, capped at the first four that apply
fn personalized_insights(
    business: &BusinessIntelligence,
    context: &RealTimeContext,
    accessibility: &AccessibilityIntelligence,
) -> Vec<String> {
    let mut insights = Vec::new();

    let popularity = business.popularity_score;
    if popularity >= 8.0 {
        insights.push(format!(
            "Highly popular destination with {:.1}/10 rating",
            popularity
        ));
    } else if popularity >= 6.0 {
        insights.push(format!(
            "Well-regarded place with {:.1}/10 popularity",
            popularity
        ));
    }

    match context.crowd_level {
        CrowdLevel::Quiet => {
            insights.push("Currently quiet - perfect for a peaceful visit".to_string());
        }
        CrowdLevel::Busy => {
            insights.push(
                "Currently busy - consider visiting during suggested off-peak times".to_string(),
            );
        }
        CrowdLevel::Moderate => {}
    }

    if accessibility.wheelchair_accessible {
        insights.push("Fully wheelchair accessible with comprehensive features".to_string());
    }

    if !business.atmosphere.is_empty() && !business.ideal_for.is_empty() {
        insights.push(format!(
            "{} atmosphere, ideal for {}",
            title_case(&business.atmosphere),
            business.ideal_for.join(", ")
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Fixed alternative suggestions per raw category label, capped at three
fn alternative_suggestions(place: &PlaceInput) -> Vec<String> {
    let Some(label) = raw_primary_label(&place.categories) else {
        return Vec::new();
    };

    let suggestions: &[&str] = if label.contains("coffee") {
        &[
            "Local independent coffee shops nearby",
            "Tea houses for alternative beverages",
            "Co-working spaces with café facilities",
        ]
    } else if label.contains("restaurant") {
        &[
            "Similar cuisine restaurants in the area",
            "Food trucks for casual dining",
            "Delivery options if crowded",
        ]
    } else if label.contains("gym") {
        &[
            "Outdoor fitness areas nearby",
            "Alternative fitness studios",
            "Home workout options during peak hours",
        ]
    } else {
        &[]
    };

    let mut alternatives: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
    alternatives.truncate(MAX_ALTERNATIVES);
    alternatives
}

/// Visit strategy sentence assembled in check order, joined with ". "
fn visit_strategy(context: &RealTimeContext, accessibility: &AccessibilityIntelligence) -> String {
    let mut parts = Vec::new();

    if !context.best_visit_times.is_empty() {
        parts.push(format!(
            "Best visit times: {}",
            context.best_visit_times.join(", ")
        ));
    }

    if context.crowd_level == CrowdLevel::Busy && context.estimated_wait_time != "no wait" {
        parts.push(format!("Current wait time: {}", context.estimated_wait_time));
    }

    if accessibility.wheelchair_accessible {
        parts.push("Accessible entrance available".to_string());
    }

    if parts.is_empty() {
        "Visit anytime based on your preference".to_string()
    } else {
        parts.join(". ")
    }
}

/// Accessibility notes, capped at three
fn accessibility_notes(accessibility: &AccessibilityIntelligence) -> Vec<String> {
    let mut notes = Vec::new();

    if accessibility.wheelchair_accessible {
        notes.push("Wheelchair accessible with ramp access".to_string());
    } else {
        notes.push(
            "Accessibility features may be limited - recommend calling ahead".to_string(),
        );
    }

    if accessibility.features.accessible_restrooms {
        notes.push("Accessible restroom facilities available".to_string());
    }

    if accessibility.features.hearing_loop {
        notes.push("Hearing loop system available for hearing aid users".to_string());
    }

    notes.truncate(MAX_NOTES);
    notes
}

/// Capitalize the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::accessibility::AccessibilityFeatures;
    use crate::engines::context::PlaceStatus;
    use crate::models::CategoryEntry;

    fn business(popularity: f64, atmosphere: &str, ideal_for: &[&str]) -> BusinessIntelligence {
        BusinessIntelligence {
            popularity_score: popularity,
            sentiment_score: 3.5,
            specialties: Vec::new(),
            ideal_for: ideal_for.iter().map(|s| s.to_string()).collect(),
            price_range: "moderate".to_string(),
            atmosphere: atmosphere.to_string(),
            trending_score: 5.0,
            processing_time_ms: 0.0,
        }
    }

    fn context(crowd_level: CrowdLevel, confidence: f64, best_times: &[&str]) -> RealTimeContext {
        let estimated_wait_time = match crowd_level {
            CrowdLevel::Busy => "10-15 minutes",
            CrowdLevel::Moderate => "5-10 minutes",
            CrowdLevel::Quiet => "no wait",
        };
        RealTimeContext {
            current_status: PlaceStatus::Open,
            crowd_level,
            best_visit_times: best_times.iter().map(|s| s.to_string()).collect(),
            live_events: Vec::new(),
            estimated_wait_time: estimated_wait_time.to_string(),
            weather_impact: "minimal impact".to_string(),
            last_updated: "2025-01-01T00:00:00.000000Z".to_string(),
            confidence_score: confidence,
            processing_time_ms: 0.0,
        }
    }

    fn accessibility(score: f64, restrooms: bool, hearing_loop: bool) -> AccessibilityIntelligence {
        AccessibilityIntelligence {
            wheelchair_accessible: score >= 7.0,
            accessibility_score: score,
            features: AccessibilityFeatures {
                ramp_access: true,
                elevator: false,
                accessible_restrooms: restrooms,
                braille_signage: false,
                hearing_loop,
                wide_entrances: true,
                accessible_parking: true,
            },
            inclusive_recommendations: Default::default(),
            processing_time_ms: 0.0,
        }
    }

    fn coffee_place() -> PlaceInput {
        PlaceInput {
            name: "Starbucks Downtown".to_string(),
            categories: vec![CategoryEntry {
                name: "Coffee Shop".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_confidence_blend() {
        let b = business(8.5, "cozy", &["remote work"]);
        let c = context(CrowdLevel::Quiet, 0.9, &[]);
        let a = accessibility(8.0, true, false);
        // (0.8 + 0.9 + 0.7) / 3
        let score = confidence_score(&b, &c, &a);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_defaults_when_nothing_contributes() {
        let b = business(0.0, "", &[]);
        let c = context(CrowdLevel::Quiet, 0.0, &[]);
        let a = accessibility(0.0, false, false);
        assert_eq!(confidence_score(&b, &c, &a), 0.5);
    }

    #[test]
    fn test_insights_order_and_cap() {
        let b = business(8.5, "cozy", &["remote work", "meetings"]);
        let c = context(CrowdLevel::Quiet, 0.9, &[]);
        let a = accessibility(8.0, true, true);
        let insights = personalized_insights(&b, &c, &a);
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0], "Highly popular destination with 8.5/10 rating");
        assert_eq!(insights[1], "Currently quiet - perfect for a peaceful visit");
        assert_eq!(
            insights[2],
            "Fully wheelchair accessible with comprehensive features"
        );
        assert_eq!(
            insights[3],
            "Cozy atmosphere, ideal for remote work, meetings"
        );
    }

    #[test]
    fn test_mid_popularity_and_moderate_crowd() {
        let b = business(6.5, "", &[]);
        let c = context(CrowdLevel::Moderate, 0.9, &[]);
        let a = accessibility(5.0, false, false);
        let insights = personalized_insights(&b, &c, &a);
        assert_eq!(
            insights,
            vec!["Well-regarded place with 6.5/10 popularity".to_string()]
        );
    }

    #[test]
    fn test_alternatives_by_raw_label() {
        let alts = alternative_suggestions(&coffee_place());
        assert_eq!(alts.len(), 3);
        assert_eq!(alts[0], "Local independent coffee shops nearby");

        let none = alternative_suggestions(&PlaceInput::default());
        assert!(none.is_empty());

        let museum = PlaceInput {
            categories: vec![CategoryEntry {
                name: "Museum".to_string(),
            }],
            ..Default::default()
        };
        assert!(alternative_suggestions(&museum).is_empty());
    }

    #[test]
    fn test_visit_strategy_assembly() {
        let c = context(CrowdLevel::Busy, 0.9, &["10:00-11:30", "15:30-17:00"]);
        let a = accessibility(8.0, true, false);
        assert_eq!(
            visit_strategy(&c, &a),
            "Best visit times: 10:00-11:30, 15:30-17:00. \
             Current wait time: 10-15 minutes. Accessible entrance available"
        );
    }

    #[test]
    fn test_visit_strategy_fallback() {
        let c = context(CrowdLevel::Quiet, 0.9, &[]);
        let a = accessibility(5.0, false, false);
        assert_eq!(visit_strategy(&c, &a), "Visit anytime based on your preference");
    }

    #[test]
    fn test_wait_time_only_mentioned_when_busy() {
        let c = context(CrowdLevel::Moderate, 0.9, &[]);
        let a = accessibility(5.0, false, false);
        assert_eq!(visit_strategy(&c, &a), "Visit anytime based on your preference");
    }

    #[test]
    fn test_accessibility_notes_branches() {
        let accessible = accessibility_notes(&accessibility(8.0, true, true));
        assert_eq!(accessible.len(), 3);
        assert_eq!(accessible[0], "Wheelchair accessible with ramp access");

        let limited = accessibility_notes(&accessibility(4.0, false, false));
        assert_eq!(
            limited,
            vec!["Accessibility features may be limited - recommend calling ahead".to_string()]
        );
    }

    #[test]
    fn test_synthesize_respects_caps() {
        let engine = UnifiedRecommendationEngine;
        let b = business(9.0, "cozy", &["remote work"]);
        let c = context(CrowdLevel::Busy, 0.95, &["10:00-11:30"]);
        let a = accessibility(9.5, true, true);
        let result = engine.synthesize(&coffee_place(), &b, &c, &a);
        assert!(result.personalized_insights.len() <= 4);
        assert!(result.alternative_suggestions.len() <= 3);
        assert!(result.accessibility_notes.len() <= 3);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cozy"), "Cozy");
        assert_eq!(title_case("very cozy"), "Very Cozy");
        assert_eq!(title_case(""), "");
    }
}
