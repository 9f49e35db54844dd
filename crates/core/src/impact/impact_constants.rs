//! Conversion factors used to turn dollars into impact.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Conversion table supplied to the calculator.
///
/// Missing keys in a JSON document fall back to the defaults, so a partial
/// override file only needs the factors that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactConstants {
    /// Meals funded by one dollar (default: 3)
    pub meals_per_dollar: f64,

    /// People served per meal provided (default: 0.25)
    pub people_per_meal: f64,

    /// Total people the food bank serves in a year (default: 50,000)
    pub total_people_served_annually: u64,

    /// Pounds of food rescued per dollar (default: 2)
    pub food_rescue_per_dollar: f64,

    /// Pounds of CO2 kept out of the air per pound of food rescued (default: 1.5)
    pub co2_per_pound_food: f64,

    /// Gallons of water saved per pound of food rescued (default: 50)
    pub water_per_pound_food: f64,

    /// Share of distributed food that is produce, 0–100 (default: 40)
    pub produce_percentage: f64,

    /// Share of distributed food that is dairy, 0–100 (default: 15)
    pub dairy_percentage: f64,

    /// Share of distributed food that is protein, 0–100 (default: 20)
    pub protein_percentage: f64,

    /// Share of distributed food that is fresh, 0–100 (default: 75)
    pub fresh_food_percentage: f64,
}

impl Default for ImpactConstants {
    fn default() -> Self {
        Self {
            meals_per_dollar: 3.0,
            people_per_meal: 0.25,
            total_people_served_annually: 50_000,
            food_rescue_per_dollar: 2.0,
            co2_per_pound_food: 1.5,
            water_per_pound_food: 50.0,
            produce_percentage: 40.0,
            dairy_percentage: 15.0,
            protein_percentage: 20.0,
            fresh_food_percentage: 75.0,
        }
    }
}

impl ImpactConstants {
    /// Checks every factor is usable by the calculator.
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("mealsPerDollar", self.meals_per_dollar),
            ("peoplePerMeal", self.people_per_meal),
            ("foodRescuePerDollar", self.food_rescue_per_dollar),
            ("co2PerPoundFood", self.co2_per_pound_food),
            ("waterPerPoundFood", self.water_per_pound_food),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.total_people_served_annually == 0 {
            return Err(Error::InvalidConfigValue(
                "totalPeopleServedAnnually must be greater than zero".to_string(),
            ));
        }

        let percentages = [
            ("producePercentage", self.produce_percentage),
            ("dairyPercentage", self.dairy_percentage),
            ("proteinPercentage", self.protein_percentage),
            ("freshFoodPercentage", self.fresh_food_percentage),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }

        let category_total = self.produce_percentage + self.dairy_percentage + self.protein_percentage;
        if category_total > 100.0 {
            return Err(Error::InvalidConfigValue(format!(
                "produce, dairy and protein shares add up to {}%",
                category_total
            )));
        }

        Ok(())
    }

    /// Parses and validates a JSON constants document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let constants: ImpactConstants = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Loads and validates constants from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let constants = Self::from_json_str(&contents)?;
        debug!("Loaded impact constants from {}", path.display());
        Ok(constants)
    }
}
