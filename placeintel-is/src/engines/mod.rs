//! Analysis engines and the enrichment pipeline

pub mod accessibility;
pub mod business;
pub mod context;
pub mod synthesis;

pub use accessibility::{AccessibilityIntelligence, AccessibilityIntelligenceEngine};
pub use business::{BusinessIntelligence, BusinessIntelligenceEngine};
pub use context::{CrowdLevel, PlaceStatus, RealTimeContext, RealTimeContextEngine};
pub use synthesis::{UnifiedRecommendationEngine, UnifiedRecommendations};

use placeintel_common::rng::{RandomSource, ThreadRngSource};
use placeintel_common::time::{round2, Stopwatch};
use serde::Serialize;

use crate::models::PlaceInput;

/// Nominal upstream sources reported with every response
pub const DATA_SOURCES: [&str; 4] = [
    "foursquare",
    "ml_models",
    "accessibility_db",
    "real_time_feeds",
];

/// Composite intelligence response, the sole externally observable artifact
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub business_intelligence: BusinessIntelligence,
    pub real_time_context: RealTimeContext,
    pub accessibility_intelligence: AccessibilityIntelligence,
    pub unified_recommendations: UnifiedRecommendations,
    pub processing_time_ms: f64,
    pub data_sources: [&'static str; 4],
}

/// Runs the four analysis stages in order and assembles the composite response
///
/// Stateless aside from fixed lookup tables, so one pipeline instance can
/// serve concurrent requests without coordination. Only the synthesis stage
/// consumes other stages' outputs; the three analyzers are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntelligencePipeline {
    business: BusinessIntelligenceEngine,
    context: RealTimeContextEngine,
    accessibility: AccessibilityIntelligenceEngine,
    synthesis: UnifiedRecommendationEngine,
}

impl IntelligencePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrich one place record using the process-wide RNG
    pub fn enhance(&self, place: &PlaceInput) -> EnhanceResponse {
        self.enhance_with(place, &mut ThreadRngSource)
    }

    /// Enrich one place record with a caller-supplied randomness source
    pub fn enhance_with(
        &self,
        place: &PlaceInput,
        rng: &mut dyn RandomSource,
    ) -> EnhanceResponse {
        let watch = Stopwatch::start();

        let business = self.business.analyze(place, rng);
        let context = self.context.analyze(place, rng);
        let accessibility = self.accessibility.analyze(place, rng);
        let unified = self
            .synthesis
            .synthesize(place, &business, &context, &accessibility);

        EnhanceResponse {
            business_intelligence: business,
            real_time_context: context,
            accessibility_intelligence: accessibility,
            unified_recommendations: unified,
            processing_time_ms: round2(watch.elapsed_ms()),
            data_sources: DATA_SOURCES,
        }
    }
}
