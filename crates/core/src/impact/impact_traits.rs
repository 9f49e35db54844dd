use rust_decimal::Decimal;

use crate::errors::Result;
use crate::impact::impact_constants::ImpactConstants;
use crate::impact::impact_model::{EnrichedImpactMetrics, ImpactMetrics};

/// Trait for impact service operations
pub trait ImpactServiceTrait: Send + Sync {
    fn constants(&self) -> &ImpactConstants;

    /// Amount to enriched impact in one call.
    fn calculate_impact(&self, amount: f64) -> Result<EnrichedImpactMetrics>;

    /// Parses user-entered text (e.g. `"$25"`) before calculating.
    fn calculate_impact_for_input(&self, input: &str) -> Result<EnrichedImpactMetrics>;

    /// Calculates impact for a stored decimal total.
    fn calculate_impact_for_decimal(&self, amount: Decimal) -> Result<EnrichedImpactMetrics>;

    /// Enriches a raw impact record supplied by the caller.
    fn enrich_impact(&self, impact: &ImpactMetrics) -> EnrichedImpactMetrics;
}
