/// Meals one person eats in a day
pub const MEALS_PER_DAY: u64 = 3;

/// People in the reference household used for "days of food"
pub const HOUSEHOLD_SIZE: u64 = 4;

/// Meals that feed the reference household for one day
pub const HOUSEHOLD_MEALS_PER_DAY: u64 = HOUSEHOLD_SIZE * MEALS_PER_DAY;

/// Pounds of food counted as one bison in the bison comparison
pub const BISON_EQUIVALENT_POUNDS: f64 = 100.0;

/// Decimal places for percentage display
pub const PERCENTAGE_DECIMAL_PRECISION: u32 = 2;

/// Decimal places for weights and animal equivalents
pub const WEIGHT_DECIMAL_PRECISION: u32 = 1;
