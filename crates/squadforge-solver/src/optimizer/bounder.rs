//! Squad bounds for branch-and-bound pruning.
//!
//! The optimistic bound is the Lagrangian relaxation from
//! [`multipliers`](super::multipliers) evaluated at a node: every open
//! stage takes its best keys under the tuned prices, the unspent budget and
//! country cap are credited back, and the points already earned are added.
//! Stages the node has not reached yet are described by a [`Window`], since
//! how many picks they take can still depend on the roles.
//!
//! The pessimistic cost bound fills every window with its cheapest
//! candidates.

use rust_decimal::Decimal;
use smallvec::SmallVec;

use squadforge_core::{ConstraintSet, CountryTally, Squad};

use super::candidates::Stage;
use super::multipliers::{seated_points, tune, Multipliers};

/// No stage ever needs more than three picks.
const MAX_PICKS: usize = 3;

/// Running sums of the 1, 2 and 3 best values of a suffix.
type PickSums = [Option<Decimal>; MAX_PICKS];

/// Picks a stage may still make from `start` on.
///
/// A role stage with a seated fallback may pick nobody, in which case it
/// earns `idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub stage: usize,
    pub start: usize,
    pub fewest: usize,
    pub most: usize,
    pub idle: Decimal,
}

impl Window {
    pub fn exact(stage: usize, start: usize, picks: usize) -> Self {
        Self {
            stage,
            start,
            fewest: picks,
            most: picks,
            idle: Decimal::ZERO,
        }
    }
}

#[derive(Debug)]
struct StageTable {
    /// Role stages are left out of the root cost.
    is_role: bool,
    needed: usize,
    /// `best[i]`: best keys over `players[i..]`.
    best: Vec<PickSums>,
    /// `cheapest[i]`: lowest prices over `players[i..]`.
    cheapest: Vec<PickSums>,
}

/// Tuned prices and suffix tables for one plan.
#[derive(Debug)]
pub(crate) struct SquadBounder {
    multipliers: Multipliers,
    tables: Vec<StageTable>,
    budget: Decimal,
    max_per_country: u32,
    ceiling: Decimal,
}

impl SquadBounder {
    pub fn new(stages: &[Stage<'_>], base: &Squad, constraints: &ConstraintSet) -> Self {
        let seated = seated_points(base, stages);
        let (multipliers, ceiling) = tune(stages, base, seated, constraints);

        let tables = stages
            .iter()
            .map(|stage| {
                let weight = stage.kind.weight();
                let keys: Vec<Decimal> = stage
                    .players
                    .iter()
                    .map(|p| multipliers.key(p, weight))
                    .collect();
                let prices: Vec<Decimal> = stage.players.iter().map(|p| p.price).collect();
                StageTable {
                    is_role: stage.kind.is_role(),
                    needed: stage.needed,
                    best: suffix_sums(&keys, Keep::Largest),
                    cheapest: suffix_sums(&prices, Keep::Smallest),
                }
            })
            .collect();

        Self {
            multipliers,
            tables,
            budget: constraints.budget,
            max_per_country: constraints.max_per_country,
            ceiling,
        }
    }

    /// Highest points any squad of the plan can reach.
    pub fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// Lowest cost any completion of the squad can reach before the search
    /// starts. `None` when some stage cannot be filled.
    pub fn root_min_cost(&self, cost: Decimal) -> Option<Decimal> {
        self.tables
            .iter()
            .filter(|table| !table.is_role)
            .try_fold(cost, |acc, table| Some(acc + pick(&table.cheapest, 0, table.needed)?))
    }

    /// Lowest cost of any completion that fills `windows`.
    pub fn min_cost(&self, windows: &[Window], cost: Decimal) -> Option<Decimal> {
        windows.iter().try_fold(cost, |acc, window| {
            let table = self.tables.get(window.stage)?;
            let cheapest = (window.fewest..=window.most)
                .filter_map(|k| pick(&table.cheapest, window.start, k))
                .min()?;
            Some(acc + cheapest)
        })
    }

    /// Highest total points any completion that fills `windows` can reach.
    ///
    /// `weighted` is the points the squad already earns, role bonuses
    /// included.
    pub fn upper_bound(
        &self,
        windows: &[Window],
        weighted: Decimal,
        cost: Decimal,
        counts: &CountryTally,
    ) -> Option<Decimal> {
        let credit = self
            .multipliers
            .credit(self.budget, self.max_per_country, cost, counts);

        windows.iter().try_fold(weighted + credit, |acc, window| {
            let table = self.tables.get(window.stage)?;
            let best = (window.fewest..=window.most)
                .filter_map(|k| match k {
                    0 => Some(window.idle),
                    k => pick(&table.best, window.start, k),
                })
                .max()?;
            Some(acc + best)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    Largest,
    Smallest,
}

/// `result[i][k]` is the sum of the `k + 1` most extreme values in
/// `values[i..]`, or `None` when fewer than `k + 1` remain.
fn suffix_sums(values: &[Decimal], keep: Keep) -> Vec<PickSums> {
    let mut table = vec![[None; MAX_PICKS]; values.len() + 1];
    let mut kept: SmallVec<[Decimal; MAX_PICKS + 1]> = SmallVec::new();

    for (i, &value) in values.iter().enumerate().rev() {
        let at = kept
            .iter()
            .position(|&k| match keep {
                Keep::Largest => value > k,
                Keep::Smallest => value < k,
            })
            .unwrap_or(kept.len());
        kept.insert(at, value);
        kept.truncate(MAX_PICKS);

        let mut running = Decimal::ZERO;
        for (k, &v) in kept.iter().enumerate() {
            running += v;
            table[i][k] = Some(running);
        }
    }
    table
}

fn pick(sums: &[PickSums], start: usize, count: usize) -> Option<Decimal> {
    match count {
        0 => Some(Decimal::ZERO),
        n => sums.get(start).and_then(|s| s.get(n - 1).copied().flatten()),
    }
}

#[cfg(test)]
mod tests {
    use squadforge_core::Player;
    use squadforge_test::{balanced_pool, stars};

    use super::*;
    use crate::optimizer::candidates::{build_stages, ranked_candidates};

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_suffix_sums_largest() {
        let table = suffix_sums(&[d(5), d(9), d(1), d(7)], Keep::Largest);

        assert_eq!(table[0], [Some(d(9)), Some(d(16)), Some(d(21))]);
        assert_eq!(table[2], [Some(d(7)), Some(d(8)), None]);
        assert_eq!(table[4], [None, None, None]);
    }

    #[test]
    fn test_suffix_sums_smallest() {
        let table = suffix_sums(&[d(5), d(9), d(1), d(7)], Keep::Smallest);

        assert_eq!(table[0], [Some(d(1)), Some(d(6)), Some(d(13))]);
        assert_eq!(table[1], [Some(d(1)), Some(d(8)), Some(d(17))]);
    }

    #[test]
    fn test_pick_zero_is_free() {
        let table = suffix_sums(&[], Keep::Largest);
        assert_eq!(pick(&table, 0, 0), Some(Decimal::ZERO));
        assert_eq!(pick(&table, 0, 1), None);
    }

    #[test]
    fn test_idle_window_takes_the_better_of_picking_and_not() {
        let pool = balanced_pool(3);
        let eligible: Vec<&Player> = pool.iter().collect();
        let constraints = ConstraintSet::new().with_budget(stars(400));
        let candidates = ranked_candidates(&eligible, &constraints);
        let base = Squad::new();
        let stages = build_stages(&candidates, &base, &constraints).unwrap();
        let bounder = SquadBounder::new(&stages, &base, &constraints);
        let counts = CountryTally::new();

        let picking = Window::exact(0, 0, 1);
        let generous = Window {
            idle: d(10_000),
            fewest: 0,
            ..picking
        };

        let picked = bounder
            .upper_bound(&[picking], Decimal::ZERO, Decimal::ZERO, &counts)
            .unwrap();
        let idle = bounder
            .upper_bound(&[generous], Decimal::ZERO, Decimal::ZERO, &counts)
            .unwrap();

        assert!(idle > picked);
        assert_eq!(
            bounder.min_cost(&[generous], Decimal::ZERO),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_window_past_the_end_cannot_be_filled() {
        let pool = balanced_pool(3);
        let eligible: Vec<&Player> = pool.iter().collect();
        let constraints = ConstraintSet::new().with_budget(stars(400));
        let candidates = ranked_candidates(&eligible, &constraints);
        let base = Squad::new();
        let stages = build_stages(&candidates, &base, &constraints).unwrap();
        let bounder = SquadBounder::new(&stages, &base, &constraints);

        let last = stages.len() - 1;
        let beyond = Window::exact(last, stages[last].players.len(), 1);

        assert_eq!(bounder.min_cost(&[beyond], Decimal::ZERO), None);
        assert_eq!(
            bounder.upper_bound(&[beyond], Decimal::ZERO, Decimal::ZERO, &CountryTally::new()),
            None
        );
    }
}
