//! Impact domain models.

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::utils::format_utils::round_to;

/// A validated, non-negative, finite donation in currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DonationAmount(f64);

impl DonationAmount {
    pub const ZERO: DonationAmount = DonationAmount(0.0);

    /// Validates a raw number as a donation amount.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }
        if value < 0.0 {
            return Err(Error::InvalidAmount(format!("{} is negative", value)));
        }
        // Normalizes -0.0
        Ok(DonationAmount(value.max(0.0)))
    }

    /// Converts a stored decimal total (e.g. a donor's lifetime giving).
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::InvalidAmount(format!("{} is negative", value)));
        }
        let as_float = value.to_f64().ok_or_else(|| {
            Error::InvalidAmount(format!("{} cannot be represented as a number", value))
        })?;
        Self::new(as_float)
    }

    /// Parses a user-entered amount such as `"$1,250.50"` or `" 40 "`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let without_symbol = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
        let cleaned: String = without_symbol.chars().filter(|c| *c != ',').collect();

        if cleaned.is_empty() {
            return Err(Error::InvalidAmount("an amount is required".to_string()));
        }

        let value = Decimal::from_str(&cleaned)
            .map_err(|_| Error::InvalidAmount(format!("'{}' is not a number", input.trim())))?;
        Self::from_decimal(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for DonationAmount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        DonationAmount::new(value)
    }
}

impl From<DonationAmount> for f64 {
    fn from(amount: DonationAmount) -> Self {
        amount.0
    }
}

impl FromStr for DonationAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DonationAmount::parse(s)
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Base impact record derived from a donation amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    pub meals_provided: u64,
    pub people_served: u64,
    /// Share of the people served annually, formatted to two decimals
    pub people_percentage: String,
    /// Pounds of food rescued
    pub food_rescued: f64,
    pub co2_saved: f64,
    pub water_saved: u64,
    pub produce_percentage: f64,
    pub dairy_percentage: f64,
    pub protein_percentage: f64,
    pub fresh_food_percentage: f64,
    pub people_fed: String,
    pub days_fed: String,
}

impl ImpactMetrics {
    /// Splits the rescued food into pounds per category.
    pub fn food_by_category(&self) -> FoodByCategory {
        let pounds = |percentage: f64| {
            round_to(
                self.food_rescued * percentage / 100.0,
                WEIGHT_DECIMAL_PRECISION,
            )
        };
        FoodByCategory {
            produce: pounds(self.produce_percentage),
            dairy: pounds(self.dairy_percentage),
            protein: pounds(self.protein_percentage),
            fresh_food: pounds(self.fresh_food_percentage),
        }
    }
}

/// Pounds of rescued food per distribution category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodByCategory {
    pub produce: f64,
    pub dairy: f64,
    pub protein: f64,
    pub fresh_food: f64,
}

/// Human-readable comparisons attached during enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactComparisons {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_comparison: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_cats: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden_retrievers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baby_elephants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grizzly_bears: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hippos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_buses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_jets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bison: Option<String>,
}

impl ImpactComparisons {
    /// True when no comparison has been set.
    pub fn is_empty(&self) -> bool {
        *self == ImpactComparisons::default()
    }
}

/// Impact record with narrative comparisons, ready for presentation.
///
/// Serializes as a single flat object: the base fields followed by the
/// comparison fields that were set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedImpactMetrics {
    #[serde(flatten)]
    pub impact: ImpactMetrics,
    #[serde(flatten)]
    pub comparisons: ImpactComparisons,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_metrics() -> ImpactMetrics {
        ImpactMetrics {
            meals_provided: 300,
            people_served: 75,
            people_percentage: "0.15".to_string(),
            food_rescued: 200.0,
            co2_saved: 300.0,
            water_saved: 10_000,
            produce_percentage: 40.0,
            dairy_percentage: 15.0,
            protein_percentage: 20.0,
            fresh_food_percentage: 75.0,
            people_fed: "a family of four".to_string(),
            days_fed: "3 weeks".to_string(),
        }
    }

    #[test]
    fn test_donation_amount_rejects_negative_and_non_finite() {
        assert!(matches!(
            DonationAmount::new(-0.01),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            DonationAmount::new(f64::NAN),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            DonationAmount::new(f64::INFINITY),
            Err(Error::InvalidAmount(_))
        ));
        assert_eq!(DonationAmount::new(-0.0).unwrap(), DonationAmount::ZERO);
    }

    #[test]
    fn test_donation_amount_parse_user_input() {
        assert_eq!(DonationAmount::parse("$1,250.50").unwrap().value(), 1250.5);
        assert_eq!(DonationAmount::parse("  40 ").unwrap().value(), 40.0);
        assert_eq!("$ 25".parse::<DonationAmount>().unwrap().value(), 25.0);
        assert!(matches!(
            DonationAmount::parse("twenty"),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            DonationAmount::parse("   "),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            DonationAmount::parse("-10"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_donation_amount_from_decimal() {
        assert_eq!(
            DonationAmount::from_decimal(dec!(99.99)).unwrap().value(),
            99.99
        );
        assert!(DonationAmount::from_decimal(dec!(-1)).is_err());
        assert!(DonationAmount::from_decimal(dec!(0)).unwrap().is_zero());
    }

    #[test]
    fn test_donation_amount_serde_validates() {
        let amount: DonationAmount = serde_json::from_str("12.5").unwrap();
        assert_eq!(amount.value(), 12.5);
        assert!(serde_json::from_str::<DonationAmount>("-3").is_err());
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.5");
        assert_eq!(amount.to_string(), "$12.50");
    }

    #[test]
    fn test_food_by_category() {
        let split = sample_metrics().food_by_category();
        assert_eq!(split.produce, 80.0);
        assert_eq!(split.dairy, 30.0);
        assert_eq!(split.protein, 40.0);
        assert_eq!(split.fresh_food, 150.0);
    }

    #[test]
    fn test_enriched_metrics_serialize_flat_and_skip_unset() {
        let enriched = EnrichedImpactMetrics {
            impact: sample_metrics(),
            comparisons: ImpactComparisons {
                baby_elephants: Some("1 baby elephants".to_string()),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["mealsProvided"], 300);
        assert_eq!(json["peoplePercentage"], "0.15");
        assert_eq!(json["babyElephants"], "1 baby elephants");
        assert!(json.get("houseCats").is_none());
        assert!(json.get("impact").is_none());

        let parsed: EnrichedImpactMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, enriched);
    }
}
