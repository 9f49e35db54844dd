//! Donation impact module.
//!
//! Turns a donation into donor-facing impact in two pure stages:
//!
//! ```text
//! amount ──► impact_calculator ──► ImpactMetrics ──► narrative_enricher ──► EnrichedImpactMetrics
//!                  ▲
//!            ImpactConstants
//! ```
//!
//! - **Constants** (`impact_constants.rs`) - Conversion factors, defaults and JSON loading
//! - **Calculator** (`impact_calculator.rs`) - Amount to base metrics
//! - **Enricher** (`narrative_enricher.rs`) - Base metrics to comparison phrases
//! - **Ladders** (`ladder.rs`) - Ordered threshold tables behind every phrase
//! - **Service** (`impact_service.rs`) - Composes both stages for request handlers

mod impact_calculator;
mod impact_constants;
mod impact_model;
mod impact_service;
mod impact_traits;
pub mod ladder;
mod narrative_enricher;

pub use impact_calculator::{
    compute_impact, compute_impact_for, days_of_food, DAYS_FED_LADDER, PEOPLE_FED_LADDER,
};
pub use impact_constants::ImpactConstants;
pub use impact_model::{
    DonationAmount, EnrichedImpactMetrics, FoodByCategory, ImpactComparisons, ImpactMetrics,
};
pub use impact_service::ImpactService;
pub use impact_traits::ImpactServiceTrait;
pub use narrative_enricher::{
    enrich, weight_comparisons, ComparisonKind, BISON_LADDER, DAYS_FED_NARRATIVE,
    PEOPLE_FED_NARRATIVE, WEIGHT_LADDER,
};
