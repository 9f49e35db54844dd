//! Threshold ladders.
//!
//! A ladder is an ordered table of rungs. Each rung pairs a [`Bound`] with a
//! value (a phrase formatter or a comparison kind). Lookup scans the rungs in
//! order and returns the first one whose bound admits the input.

/// Admission rule for a single rung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Admits values strictly below the limit
    Below(f64),
    /// Admits exactly this value
    Exactly(f64),
    /// Admits everything; terminal rung
    Unbounded,
}

impl Bound {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::Below(limit) => value < limit,
            Bound::Exactly(target) => value == target,
            Bound::Unbounded => true,
        }
    }

    /// Upper limit used for ordering checks; `Exactly` counts as its own value.
    fn limit(&self) -> f64 {
        match *self {
            Bound::Below(limit) | Bound::Exactly(limit) => limit,
            Bound::Unbounded => f64::INFINITY,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rung<T> {
    pub bound: Bound,
    pub value: T,
}

impl<T> Rung<T> {
    pub const fn new(bound: Bound, value: T) -> Self {
        Self { bound, value }
    }
}

/// An ordered, statically defined ladder.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: 'static> {
    rungs: &'static [Rung<T>],
}

impl<T: 'static> Ladder<T> {
    pub const fn new(rungs: &'static [Rung<T>]) -> Self {
        Self { rungs }
    }

    /// Returns the value of the first rung admitting `value`.
    ///
    /// `None` only when the ladder has no terminal rung and `value` is past
    /// every limit (or NaN).
    pub fn select(&self, value: f64) -> Option<&T> {
        self.rungs
            .iter()
            .find(|rung| rung.bound.admits(value))
            .map(|rung| &rung.value)
    }

    pub fn rungs(&self) -> &'static [Rung<T>] {
        self.rungs
    }

    /// True when limits never decrease and only the last rung is unbounded.
    pub fn is_well_formed(&self) -> bool {
        let ascending = self
            .rungs
            .windows(2)
            .all(|pair| pair[0].bound.limit() <= pair[1].bound.limit());
        let unbounded_only_last = self
            .rungs
            .iter()
            .rev()
            .skip(1)
            .all(|rung| rung.bound != Bound::Unbounded);
        ascending && unbounded_only_last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE_RUNGS: &[Rung<&str>] = &[
        Rung::new(Bound::Below(1.0), "tiny"),
        Rung::new(Bound::Exactly(1.0), "one"),
        Rung::new(Bound::Below(10.0), "small"),
        Rung::new(Bound::Unbounded, "large"),
    ];
    const SIZES: Ladder<&str> = Ladder::new(SIZE_RUNGS);

    #[test]
    fn test_first_matching_rung_wins() {
        assert_eq!(SIZES.select(0.5), Some(&"tiny"));
        assert_eq!(SIZES.select(1.0), Some(&"one"));
        assert_eq!(SIZES.select(1.5), Some(&"small"));
        assert_eq!(SIZES.select(9.999), Some(&"small"));
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        assert_eq!(SIZES.select(10.0), Some(&"large"));
        assert_eq!(SIZES.select(1e12), Some(&"large"));
    }

    #[test]
    fn test_no_terminal_rung_can_miss() {
        const OPEN_RUNGS: &[Rung<u8>] = &[Rung::new(Bound::Below(5.0), 1)];
        const OPEN: Ladder<u8> = Ladder::new(OPEN_RUNGS);
        assert_eq!(OPEN.select(3.0), Some(&1));
        assert_eq!(OPEN.select(5.0), None);
        assert_eq!(OPEN.select(f64::NAN), None);
    }

    #[test]
    fn test_well_formed() {
        assert!(SIZES.is_well_formed());

        const DESCENDING: &[Rung<u8>] = &[
            Rung::new(Bound::Below(10.0), 1),
            Rung::new(Bound::Below(5.0), 2),
        ];
        assert!(!Ladder::new(DESCENDING).is_well_formed());

        const EARLY_TERMINAL: &[Rung<u8>] = &[
            Rung::new(Bound::Unbounded, 1),
            Rung::new(Bound::Below(5.0), 2),
        ];
        assert!(!Ladder::new(EARLY_TERMINAL).is_well_formed());
    }
}
