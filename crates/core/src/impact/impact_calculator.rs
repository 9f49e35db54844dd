//! Impact calculator: donation amount to base impact metrics.

use crate::constants::{
    HOUSEHOLD_MEALS_PER_DAY, PERCENTAGE_DECIMAL_PRECISION, WEIGHT_DECIMAL_PRECISION,
};
use crate::errors::Result;
use crate::utils::format_utils::{format_fixed, pluralize, round_count, round_to};

use super::impact_constants::ImpactConstants;
use super::impact_model::{DonationAmount, ImpactMetrics};
use super::ladder::{Bound, Ladder, Rung};

type Phrase = fn(f64) -> String;

/// Days the reference household of four eats on the given meals.
///
/// Both the calculator and the enricher describe "days fed" from this value
/// so the two descriptions never disagree.
pub fn days_of_food(meals_provided: u64) -> f64 {
    meals_provided as f64 / HOUSEHOLD_MEALS_PER_DAY as f64
}

fn a_person(_: f64) -> String {
    "a person".to_string()
}

fn a_family(_: f64) -> String {
    "a family of four".to_string()
}

fn a_day(_: f64) -> String {
    "a day".to_string()
}

fn whole_days(days: f64) -> String {
    let n = days.floor() as u64;
    format!("{} {}", n, pluralize(n, "day", "days"))
}

fn whole_weeks(days: f64) -> String {
    let n = (days / 7.0).floor() as u64;
    format!("{} {}", n, pluralize(n, "week", "weeks"))
}

const PEOPLE_FED_RUNGS: &[Rung<Phrase>] = &[
    Rung::new(Bound::Below(1.0), a_person as Phrase),
    Rung::new(Bound::Unbounded, a_family as Phrase),
];

const DAYS_FED_RUNGS: &[Rung<Phrase>] = &[
    Rung::new(Bound::Below(1.0), a_day as Phrase),
    Rung::new(Bound::Below(7.0), whole_days as Phrase),
    Rung::new(Bound::Unbounded, whole_weeks as Phrase),
];

/// Who the meals feed, keyed on days of household food.
pub const PEOPLE_FED_LADDER: Ladder<Phrase> = Ladder::new(PEOPLE_FED_RUNGS);

/// How long the meals last, keyed on days of household food.
pub const DAYS_FED_LADDER: Ladder<Phrase> = Ladder::new(DAYS_FED_RUNGS);

fn describe(ladder: &Ladder<Phrase>, value: f64) -> String {
    ladder
        .select(value)
        .map(|phrase| phrase(value))
        .unwrap_or_default()
}

/// Computes the base impact record for a validated amount.
pub fn compute_impact_for(amount: DonationAmount, constants: &ImpactConstants) -> ImpactMetrics {
    let dollars = amount.value();

    let meals_provided = round_count(dollars * constants.meals_per_dollar);
    let people_served = round_count(meals_provided as f64 * constants.people_per_meal);
    let people_ratio = if constants.total_people_served_annually == 0 {
        0.0
    } else {
        people_served as f64 / constants.total_people_served_annually as f64 * 100.0
    };

    let pounds_rescued = dollars * constants.food_rescue_per_dollar;
    let food_rescued = round_to(pounds_rescued, WEIGHT_DECIMAL_PRECISION);
    let co2_saved = round_to(
        pounds_rescued * constants.co2_per_pound_food,
        WEIGHT_DECIMAL_PRECISION,
    );
    let water_saved = round_count(pounds_rescued * constants.water_per_pound_food);

    let days = days_of_food(meals_provided);

    ImpactMetrics {
        meals_provided,
        people_served,
        people_percentage: format_fixed(people_ratio, PERCENTAGE_DECIMAL_PRECISION),
        food_rescued,
        co2_saved,
        water_saved,
        produce_percentage: constants.produce_percentage,
        dairy_percentage: constants.dairy_percentage,
        protein_percentage: constants.protein_percentage,
        fresh_food_percentage: constants.fresh_food_percentage,
        people_fed: describe(&PEOPLE_FED_LADDER, days),
        days_fed: describe(&DAYS_FED_LADDER, days),
    }
}

/// Computes the base impact record for a raw amount.
///
/// Fails with `InvalidAmount` when the amount is negative or not finite.
pub fn compute_impact(amount: f64, constants: &ImpactConstants) -> Result<ImpactMetrics> {
    let amount = DonationAmount::new(amount)?;
    Ok(compute_impact_for(amount, constants))
}
