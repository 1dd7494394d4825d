//! SquadScore - Lexicographic objective with decimal points and cost

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use super::ScoreLevel;
use crate::squad::Squad;

/// Quality of a squad: weighted projected points plus tie-break levels.
///
/// A greater `SquadScore` is a better squad. Points are compared first
/// (higher wins); on equal points the cheaper squad wins, then the one with
/// the lower country concentration, then the one with the lower id sum.
///
/// # Examples
///
/// ```
/// use squadforge_core::{Decimal, SquadScore};
///
/// let cheap = SquadScore::of(Decimal::from(20), Decimal::from(26), 2, 3);
/// let pricey = SquadScore::of(Decimal::from(20), Decimal::from(28), 2, 3);
/// let better = SquadScore::of(Decimal::from(21), Decimal::from(30), 4, 3);
///
/// assert!(cheap > pricey);
/// assert!(better > cheap);
/// assert_eq!(format!("{}", cheap), "20pts/26cost");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquadScore {
    points: Decimal,
    cost: Decimal,
    concentration: u32,
    id_sum: u64,
}

impl SquadScore {
    /// The zero score (empty squad).
    pub const ZERO: SquadScore = SquadScore {
        points: Decimal::ZERO,
        cost: Decimal::ZERO,
        concentration: 0,
        id_sum: 0,
    };

    #[inline]
    pub const fn of(points: Decimal, cost: Decimal, concentration: u32, id_sum: u64) -> Self {
        SquadScore {
            points,
            cost,
            concentration,
            id_sum,
        }
    }

    /// Builds the tie-break levels from `squad` around precomputed points.
    pub fn for_squad(points: Decimal, squad: &Squad) -> Self {
        SquadScore {
            points,
            cost: squad.total_cost(),
            concentration: squad.country_counts().concentration(),
            id_sum: squad.id_sum(),
        }
    }

    #[inline]
    pub const fn points(&self) -> Decimal {
        self.points
    }

    #[inline]
    pub const fn cost(&self) -> Decimal {
        self.cost
    }

    #[inline]
    pub const fn concentration(&self) -> u32 {
        self.concentration
    }

    #[inline]
    pub const fn id_sum(&self) -> u64 {
        self.id_sum
    }

    /// Compares a single level; `Greater` means `self` is better there.
    pub fn compare_level(&self, other: &Self, level: ScoreLevel) -> Ordering {
        match level {
            ScoreLevel::Points => self.points.cmp(&other.points),
            ScoreLevel::Cost => other.cost.cmp(&self.cost),
            ScoreLevel::Concentration => other.concentration.cmp(&self.concentration),
            ScoreLevel::IdSum => other.id_sum.cmp(&self.id_sum),
        }
    }
}

impl Ord for SquadScore {
    fn cmp(&self, other: &Self) -> Ordering {
        [
            ScoreLevel::Points,
            ScoreLevel::Cost,
            ScoreLevel::Concentration,
            ScoreLevel::IdSum,
        ]
        .into_iter()
        .map(|level| self.compare_level(other, level))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SquadScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for SquadScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SquadScore({}, {}, {}, {})",
            self.points.normalize(),
            self.cost.normalize(),
            self.concentration,
            self.id_sum
        )
    }
}

impl fmt::Display for SquadScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}pts/{}cost",
            self.points.normalize(),
            self.cost.normalize()
        )
    }
}
