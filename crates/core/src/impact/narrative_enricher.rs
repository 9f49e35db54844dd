//! Narrative enrichment: attaches donor-facing comparison phrases to a base
//! impact record.
//!
//! Every phrase is picked from a threshold ladder (see [`super::ladder`]).
//! Enrichment reads only the base record, so it is safe to run on records
//! supplied by callers and to run more than once.

use crate::constants::{BISON_EQUIVALENT_POUNDS, WEIGHT_DECIMAL_PRECISION};
use crate::utils::format_utils::{format_trimmed, pluralize, round_count};

use super::impact_calculator::days_of_food;
use super::impact_model::{EnrichedImpactMetrics, ImpactComparisons, ImpactMetrics};
use super::ladder::{Bound, Ladder, Rung};

type Phrase = fn(f64) -> String;

// =============================================================================
// Weight comparisons
// =============================================================================

/// Things the rescued food is weighed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    HouseCat,
    GoldenRetriever,
    BabyElephant,
    GrizzlyBear,
    Hippo,
    Car,
    SchoolBus,
    SmallJet,
}

impl ComparisonKind {
    pub const ALL: [ComparisonKind; 8] = [
        ComparisonKind::HouseCat,
        ComparisonKind::GoldenRetriever,
        ComparisonKind::BabyElephant,
        ComparisonKind::GrizzlyBear,
        ComparisonKind::Hippo,
        ComparisonKind::Car,
        ComparisonKind::SchoolBus,
        ComparisonKind::SmallJet,
    ];

    /// Pounds one of these weighs.
    pub fn unit_weight(&self) -> f64 {
        match self {
            ComparisonKind::HouseCat => 10.0,
            ComparisonKind::GoldenRetriever => 70.0,
            ComparisonKind::BabyElephant => 200.0,
            ComparisonKind::GrizzlyBear => 700.0,
            ComparisonKind::Hippo => 3_000.0,
            ComparisonKind::Car => 4_000.0,
            ComparisonKind::SchoolBus => 24_000.0,
            ComparisonKind::SmallJet => 90_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonKind::HouseCat => "house cats",
            ComparisonKind::GoldenRetriever => "golden retrievers",
            ComparisonKind::BabyElephant => "baby elephants",
            ComparisonKind::GrizzlyBear => "grizzly bears",
            ComparisonKind::Hippo => "hippos",
            ComparisonKind::Car => "cars",
            ComparisonKind::SchoolBus => "school buses",
            ComparisonKind::SmallJet => "small jets",
        }
    }

    /// `"{n} {label}"`, n to one decimal with a trailing `.0` dropped.
    pub fn equivalent(&self, pounds: f64) -> String {
        format!(
            "{} {}",
            format_trimmed(pounds / self.unit_weight(), WEIGHT_DECIMAL_PRECISION),
            self.label()
        )
    }

    /// Headline sentence used when this kind is the selected comparison.
    pub fn headline(&self, pounds: f64) -> String {
        let equivalent = self.equivalent(pounds);
        match self {
            ComparisonKind::HouseCat => format!("That's as heavy as {}!", equivalent),
            ComparisonKind::GoldenRetriever => {
                format!("That's about the weight of {}!", equivalent)
            }
            ComparisonKind::BabyElephant => format!("That's as much food as {}!", equivalent),
            ComparisonKind::GrizzlyBear => format!("That's the weight of {}!", equivalent),
            ComparisonKind::Hippo => format!("That's as heavy as {}!", equivalent),
            ComparisonKind::Car => format!("That's more food than {} could carry!", equivalent),
            ComparisonKind::SchoolBus => format!("That's the weight of {}!", equivalent),
            ComparisonKind::SmallJet => format!("That's as heavy as {}!", equivalent),
        }
    }

    fn slot<'a>(&self, comparisons: &'a mut ImpactComparisons) -> &'a mut Option<String> {
        match self {
            ComparisonKind::HouseCat => &mut comparisons.house_cats,
            ComparisonKind::GoldenRetriever => &mut comparisons.golden_retrievers,
            ComparisonKind::BabyElephant => &mut comparisons.baby_elephants,
            ComparisonKind::GrizzlyBear => &mut comparisons.grizzly_bears,
            ComparisonKind::Hippo => &mut comparisons.hippos,
            ComparisonKind::Car => &mut comparisons.cars,
            ComparisonKind::SchoolBus => &mut comparisons.school_buses,
            ComparisonKind::SmallJet => &mut comparisons.small_jets,
        }
    }
}

const WEIGHT_RUNGS: &[Rung<ComparisonKind>] = &[
    Rung::new(Bound::Below(20.0), ComparisonKind::HouseCat),
    Rung::new(Bound::Below(140.0), ComparisonKind::GoldenRetriever),
    Rung::new(Bound::Below(400.0), ComparisonKind::BabyElephant),
    Rung::new(Bound::Below(1_400.0), ComparisonKind::GrizzlyBear),
    Rung::new(Bound::Below(6_000.0), ComparisonKind::Hippo),
    Rung::new(Bound::Below(8_000.0), ComparisonKind::Car),
    Rung::new(Bound::Below(48_000.0), ComparisonKind::SchoolBus),
    Rung::new(Bound::Unbounded, ComparisonKind::SmallJet),
];

/// Primary weight comparison, keyed on pounds rescued.
///
/// A kind is used until the food reaches twice its unit weight.
pub const WEIGHT_LADDER: Ladder<ComparisonKind> = Ladder::new(WEIGHT_RUNGS);

// =============================================================================
// Bison
// =============================================================================

fn bison_count(pounds: f64) -> u64 {
    round_count(pounds / BISON_EQUIVALENT_POUNDS)
}

fn nearly_one_bison(_: f64) -> String {
    "nearly one bison".to_string()
}

fn some_bison(pounds: f64) -> String {
    format!("{} bison", bison_count(pounds))
}

fn bison_group(pounds: f64) -> String {
    format!("a group of {} bison roaming the plains", bison_count(pounds))
}

fn bison_herd(pounds: f64) -> String {
    format!("a majestic herd of {} bison", bison_count(pounds))
}

const BISON_RUNGS: &[Rung<Phrase>] = &[
    Rung::new(Bound::Below(100.0), nearly_one_bison as Phrase),
    Rung::new(Bound::Below(500.0), some_bison as Phrase),
    Rung::new(Bound::Below(1_000.0), bison_group as Phrase),
    Rung::new(Bound::Unbounded, bison_herd as Phrase),
];

/// Bison phrasing, keyed on pounds rescued.
pub const BISON_LADDER: Ladder<Phrase> = Ladder::new(BISON_RUNGS);

// =============================================================================
// People and days
// =============================================================================

fn few_neighbors(people: f64) -> String {
    let n = people as u64;
    format!(
        "{} {} in our community",
        n,
        pluralize(n, "neighbor", "neighbors")
    )
}

fn classroom(people: f64) -> String {
    format!("{} people, enough to fill a classroom", people as u64)
}

fn cafeteria(people: f64) -> String {
    format!("{} people, as many as a packed school cafeteria", people as u64)
}

fn neighborhood(people: f64) -> String {
    format!("{} people, a whole neighborhood", people as u64)
}

const PEOPLE_FED_RUNGS: &[Rung<Phrase>] = &[
    Rung::new(Bound::Below(10.0), few_neighbors as Phrase),
    Rung::new(Bound::Below(50.0), classroom as Phrase),
    Rung::new(Bound::Below(200.0), cafeteria as Phrase),
    Rung::new(Bound::Unbounded, neighborhood as Phrase),
];

/// People-fed narrative, keyed on people served.
pub const PEOPLE_FED_NARRATIVE: Ladder<Phrase> = Ladder::new(PEOPLE_FED_RUNGS);

fn less_than_a_day(_: f64) -> String {
    "less than a day".to_string()
}

fn a_full_day(_: f64) -> String {
    "a full day".to_string()
}

fn some_days(days: f64) -> String {
    let n = days.floor() as u64;
    format!("{} {}", n, pluralize(n, "day", "days"))
}

fn some_weeks(days: f64) -> String {
    let n = round_count(days / 7.0);
    format!("{} {}", n, pluralize(n, "week", "weeks"))
}

fn over_a_month(_: f64) -> String {
    "over a month".to_string()
}

const DAYS_FED_RUNGS: &[Rung<Phrase>] = &[
    Rung::new(Bound::Below(1.0), less_than_a_day as Phrase),
    Rung::new(Bound::Exactly(1.0), a_full_day as Phrase),
    Rung::new(Bound::Below(7.0), some_days as Phrase),
    Rung::new(Bound::Below(30.0), some_weeks as Phrase),
    Rung::new(Bound::Unbounded, over_a_month as Phrase),
];

/// Days-fed narrative, keyed on days of household food.
pub const DAYS_FED_NARRATIVE: Ladder<Phrase> = Ladder::new(DAYS_FED_RUNGS);

fn phrase(ladder: &Ladder<Phrase>, value: f64) -> Option<String> {
    ladder.select(value).map(|render| render(value))
}

// =============================================================================
// Enrichment
// =============================================================================

/// Builds the comparison fields for a weight of rescued food.
///
/// Returns an empty set when there is nothing to compare.
pub fn weight_comparisons(food_rescued: f64) -> ImpactComparisons {
    let mut comparisons = ImpactComparisons::default();
    if !(food_rescued > 0.0 && food_rescued.is_finite()) {
        return comparisons;
    }

    for kind in ComparisonKind::ALL {
        *kind.slot(&mut comparisons) = Some(kind.equivalent(food_rescued));
    }
    comparisons.weight_comparison = WEIGHT_LADDER
        .select(food_rescued)
        .map(|kind| kind.headline(food_rescued));
    comparisons.bison = phrase(&BISON_LADDER, food_rescued);

    comparisons
}

/// Produces an enriched copy of `impact`.
///
/// `peopleFed` and `daysFed` are rewritten with the richer narrative when
/// any meals were provided; otherwise the base phrasing is kept.
pub fn enrich(impact: &ImpactMetrics) -> EnrichedImpactMetrics {
    let mut enriched = impact.clone();

    if impact.meals_provided > 0 {
        if let Some(people_fed) = phrase(&PEOPLE_FED_NARRATIVE, impact.people_served as f64) {
            enriched.people_fed = people_fed;
        }
        if let Some(days_fed) = phrase(&DAYS_FED_NARRATIVE, days_of_food(impact.meals_provided)) {
            enriched.days_fed = days_fed;
        }
    }

    EnrichedImpactMetrics {
        impact: enriched,
        comparisons: weight_comparisons(impact.food_rescued),
    }
}
