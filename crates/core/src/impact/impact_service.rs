use std::path::Path;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::Result;

use super::impact_calculator::compute_impact_for;
use super::impact_constants::ImpactConstants;
use super::impact_model::{DonationAmount, EnrichedImpactMetrics, ImpactMetrics};
use super::impact_traits::ImpactServiceTrait;
use super::narrative_enricher::enrich;

/// Composes the calculator and the enricher over a fixed constants table.
pub struct ImpactService {
    constants: ImpactConstants,
}

impl ImpactService {
    /// Creates a service after validating `constants`.
    pub fn new(constants: ImpactConstants) -> Result<Self> {
        constants.validate()?;
        Ok(ImpactService { constants })
    }

    pub fn with_defaults() -> Self {
        ImpactService {
            constants: ImpactConstants::default(),
        }
    }

    /// Creates a service from a JSON constants file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let constants = ImpactConstants::load(path)?;
        Ok(ImpactService { constants })
    }

    fn calculate(&self, amount: DonationAmount) -> EnrichedImpactMetrics {
        let impact = compute_impact_for(amount, &self.constants);
        debug!(
            "Calculated impact for {}: {} meals, {} lb rescued",
            amount, impact.meals_provided, impact.food_rescued
        );
        enrich(&impact)
    }

    fn reject<T>(input: &dyn std::fmt::Display, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            warn!("Rejected donation amount '{}': {}", input, e);
        }
        result
    }
}

impl ImpactServiceTrait for ImpactService {
    fn constants(&self) -> &ImpactConstants {
        &self.constants
    }

    fn calculate_impact(&self, amount: f64) -> Result<EnrichedImpactMetrics> {
        let amount = Self::reject(&amount, DonationAmount::new(amount))?;
        Ok(self.calculate(amount))
    }

    fn calculate_impact_for_input(&self, input: &str) -> Result<EnrichedImpactMetrics> {
        let amount = Self::reject(&input, DonationAmount::parse(input))?;
        Ok(self.calculate(amount))
    }

    fn calculate_impact_for_decimal(&self, amount: Decimal) -> Result<EnrichedImpactMetrics> {
        let amount = Self::reject(&amount, DonationAmount::from_decimal(amount))?;
        Ok(self.calculate(amount))
    }

    fn enrich_impact(&self, impact: &ImpactMetrics) -> EnrichedImpactMetrics {
        enrich(impact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn test_calculate_impact_end_to_end() {
        let service = ImpactService::with_defaults();
        let enriched = service.calculate_impact(100.0).unwrap();

        assert_eq!(enriched.impact.meals_provided, 300);
        assert_eq!(enriched.impact.food_rescued, 200.0);
        assert_eq!(
            enriched.comparisons.baby_elephants.as_deref(),
            Some("1 baby elephants")
        );
        assert_eq!(
            enriched.comparisons.weight_comparison.as_deref(),
            Some("That's as much food as 1 baby elephants!")
        );
        assert_eq!(
            enriched.impact.people_fed,
            "75 people, as many as a packed school cafeteria"
        );
    }

    #[test]
    fn test_calculate_impact_for_input() {
        let service = ImpactService::with_defaults();
        let from_text = service.calculate_impact_for_input("$1,000").unwrap();
        let from_number = service.calculate_impact(1000.0).unwrap();
        assert_eq!(from_text, from_number);

        assert!(matches!(
            service.calculate_impact_for_input("a lot"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_calculate_impact_for_decimal() {
        let service = ImpactService::with_defaults();
        let enriched = service.calculate_impact_for_decimal(dec!(25.00)).unwrap();
        assert_eq!(enriched.impact.meals_provided, 75);
        assert!(service.calculate_impact_for_decimal(dec!(-25)).is_err());
    }

    #[test]
    fn test_rejects_negative_amount() {
        let service = ImpactService::with_defaults();
        let err = service.calculate_impact(-10.0).unwrap_err();
        assert!(err.is_user_input());
    }

    #[test]
    fn test_new_validates_constants() {
        let bad = ImpactConstants {
            people_per_meal: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            ImpactService::new(bad),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_from_config_file_uses_loaded_constants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mealsPerDollar": 5}}"#).unwrap();

        let service = ImpactService::from_config_file(file.path()).unwrap();
        assert_eq!(service.constants().meals_per_dollar, 5.0);
        let enriched = service.calculate_impact(10.0).unwrap();
        assert_eq!(enriched.impact.meals_provided, 50);
    }

    #[test]
    fn test_enrich_impact_matches_calculation() {
        let service = ImpactService::with_defaults();
        let enriched = service.calculate_impact(42.0).unwrap();
        let base = crate::impact::compute_impact(42.0, service.constants()).unwrap();
        assert_eq!(service.enrich_impact(&base), enriched);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service: Arc<dyn ImpactServiceTrait> = Arc::new(ImpactService::with_defaults());
        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.calculate_impact(i as f64 * 10.0).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let enriched = handle.join().unwrap();
            assert_eq!(enriched.impact.meals_provided, (i as u64 + 1) * 30);
        }
    }
}
