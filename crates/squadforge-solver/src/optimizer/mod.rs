//! Squad optimizer using branch-and-bound.
//!
//! Selects the legal squad that maximizes projected points under the
//! budget, position quotas and country cap. The search runs in three
//! steps:
//!
//! 1. **Prepare**: validate the constraints, drop unavailable and excluded
//!    players, and seat the locked players. Counting checks (bucket depth,
//!    squad size, country cap, cheapest possible squad) report
//!    infeasibility before any search starts. Each seating of the locked
//!    players becomes a plan with its own tuned bound.
//! 2. **Search**: depth-first, fixing the captain and super-sub before the
//!    starting buckets and the bench, every pick gated by `can_add`.
//!    Branches whose Lagrangian bound cannot beat the incumbent are pruned.
//!    Passes start with a floor just under the best plan's bound and lower
//!    it until a squad reaches it, so the first squads found are already
//!    near the top.
//! 3. **Finish**: each complete squad gets the best starter as captain and
//!    the best bench player as super-sub; the best squad by
//!    [`SquadScore`] wins.

mod bounder;
mod candidates;
mod infeasible;
mod multipliers;
mod search;

use std::collections::HashSet;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, info};

use squadforge_config::{OptimizerConfig, SearchConfig};
use squadforge_core::error::Result;
use squadforge_core::{ConstraintSet, Player, Squad, SquadForgeError, SquadScore};
use squadforge_scoring::SquadSnapshot;

use crate::scope::SearchScope;
use crate::termination::{
    NodeCountTermination, OrTermination, PointsTargetTermination, StopReason, Termination,
    TimeTermination,
};

use bounder::SquadBounder;
use candidates::{build_stages, locked_variants, ranked_candidates, Stage};
use infeasible::{check_pool, place_locked, resolve_locked};
use search::BranchAndBound;

pub use infeasible::Infeasibility;

/// Floored passes before the search falls back to an unfloored one.
const MAX_FLOORED_PASSES: usize = 10;

/// Terminations derived from a [`SearchConfig`].
pub type ConfiguredTermination = OrTermination<(
    Option<NodeCountTermination>,
    Option<TimeTermination>,
    Option<PointsTargetTermination>,
)>;

/// Whether the search proved its squad optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The whole tree was explored (or pruned); no better squad exists.
    Optimal,
    /// A limit stopped the search; the squad is the best found so far.
    LimitReached(StopReason),
}

/// Counters from one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub leaves_evaluated: u64,
    pub pruned: u64,
    pub elapsed: Duration,
}

/// A complete, legal squad with captain and super-sub chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedSquad {
    pub snapshot: SquadSnapshot,
    pub score: SquadScore,
    pub status: SolveStatus,
    pub stats: SearchStats,
}

impl OptimizedSquad {
    pub fn squad(&self) -> &Squad {
        &self.snapshot.squad
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Outcome of an optimization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optimization {
    Solved(OptimizedSquad),
    Infeasible(Infeasibility),
}

impl Optimization {
    pub fn is_solved(&self) -> bool {
        matches!(self, Optimization::Solved(_))
    }

    pub fn solved(&self) -> Option<&OptimizedSquad> {
        match self {
            Optimization::Solved(result) => Some(result),
            Optimization::Infeasible(_) => None,
        }
    }

    pub fn squad(&self) -> Option<&Squad> {
        self.solved().map(OptimizedSquad::squad)
    }

    pub fn infeasibility(&self) -> Option<&Infeasibility> {
        match self {
            Optimization::Solved(_) => None,
            Optimization::Infeasible(reason) => Some(reason),
        }
    }
}

/// Seated locked players plus the stages left to fill around them.
struct Plan<'a> {
    base: Squad,
    stages: Vec<Stage<'a>>,
    bounder: SquadBounder,
}

/// Branch-and-bound squad optimizer.
///
/// # Example
///
/// ```
/// use squadforge_core::ConstraintSet;
/// use squadforge_solver::{Optimization, Optimizer};
///
/// let optimizer = Optimizer::new(ConstraintSet::default());
/// let result = optimizer.optimize(&[]).unwrap();
/// assert!(matches!(result, Optimization::Infeasible(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    constraints: ConstraintSet,
    search: SearchConfig,
}

impl Optimizer {
    /// Creates an optimizer with the default search limits.
    pub fn new(constraints: ConstraintSet) -> Self {
        Self {
            constraints,
            search: SearchConfig::default(),
        }
    }

    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self {
            constraints: config.constraints.clone(),
            search: config.search.clone(),
        }
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// The node, time and points-target limits from the search config.
    pub fn configured_termination(&self) -> ConfiguredTermination {
        OrTermination::new((
            self.search.node_limit.map(NodeCountTermination::new),
            self.search.time_limit().map(TimeTermination::new),
            self.search.points_target.map(PointsTargetTermination::new),
        ))
    }

    /// Optimizes `pool` under the configured limits.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid constraints or a pool that repeats a
    /// player id. Infeasibility is an `Ok` value.
    pub fn optimize(&self, pool: &[Player]) -> Result<Optimization> {
        self.optimize_with_termination(pool, &self.configured_termination())
    }

    /// Optimizes `pool`, stopping when `termination` fires.
    ///
    /// # Errors
    ///
    /// As [`Optimizer::optimize`], plus [`SquadForgeError::Cancelled`] when
    /// `termination` reports a cancellation. No partial squad is returned
    /// in that case.
    pub fn optimize_with_termination<T: Termination>(
        &self,
        pool: &[Player],
        termination: &T,
    ) -> Result<Optimization> {
        let constraints = &self.constraints;
        constraints.validate()?;

        let mut seen = HashSet::with_capacity(pool.len());
        if let Some(duplicate) = pool.iter().find(|p| !seen.insert(p.id)) {
            return Err(SquadForgeError::DuplicatePlayer(duplicate.id));
        }

        let eligible: Vec<&Player> = pool
            .iter()
            .filter(|p| p.is_available && !constraints.is_excluded(p.id))
            .collect();

        info!(
            event = "optimize_start",
            pool_size = pool.len(),
            eligible = eligible.len(),
            locked = constraints.locked_players.len(),
            budget = %constraints.budget,
            max_per_country = constraints.max_per_country,
            include_bench = constraints.include_bench,
        );

        let mut scope = SearchScope::new();
        let plans = match self.prepare(&eligible) {
            Ok(plans) => plans,
            Err(reason) => return Ok(infeasible(reason, &scope)),
        };

        let stop = self.search_plans(&plans, termination, &mut scope);

        let stats = SearchStats {
            nodes_explored: scope.nodes_explored(),
            leaves_evaluated: scope.leaves_evaluated(),
            pruned: scope.pruned(),
            elapsed: scope.elapsed(),
        };

        if stop == Some(StopReason::Cancelled) {
            info!(
                event = "optimize_cancelled",
                nodes = stats.nodes_explored,
                duration_ms = stats.elapsed.as_millis() as u64,
            );
            return Err(SquadForgeError::Cancelled);
        }

        let Some((score, squad)) = scope.take_best() else {
            let reason = match stop {
                Some(_) => Infeasibility::SearchLimitReached {
                    nodes_explored: stats.nodes_explored,
                },
                None => Infeasibility::NoLegalCombination,
            };
            return Ok(infeasible(reason, &scope));
        };

        let status = stop.map_or(SolveStatus::Optimal, SolveStatus::LimitReached);
        info!(
            event = "optimize_end",
            score = %score,
            optimal = status == SolveStatus::Optimal,
            nodes = stats.nodes_explored,
            leaves = stats.leaves_evaluated,
            pruned = stats.pruned,
            duration_ms = stats.elapsed.as_millis() as u64,
        );

        Ok(Optimization::Solved(OptimizedSquad {
            snapshot: SquadSnapshot::capture(&squad, constraints),
            score,
            status,
            stats,
        }))
    }

    /// Searches every plan in passes of decreasing floor.
    ///
    /// A pass that finishes with a squad at or above its floor has proved
    /// that squad optimal. Without pruning a single unfloored pass runs.
    fn search_plans<T: Termination>(
        &self,
        plans: &[Plan<'_>],
        termination: &T,
        scope: &mut SearchScope,
    ) -> Option<StopReason> {
        let ceiling = plans.iter().map(|plan| plan.bounder.ceiling()).max();
        let mut gap = Decimal::ONE;

        for pass in 0..=MAX_FLOORED_PASSES {
            let floor = match ceiling {
                Some(ceiling) if self.search.enable_pruning && pass < MAX_FLOORED_PASSES => {
                    Some(ceiling - gap)
                }
                _ => None,
            };

            for plan in plans {
                if floor.is_some_and(|floor| plan.bounder.ceiling() < floor) {
                    continue;
                }
                let search = BranchAndBound::new(
                    plan.base.clone(),
                    &plan.stages,
                    &plan.bounder,
                    &self.constraints,
                    termination,
                    self.search.enable_pruning,
                )
                .with_floor(floor);
                if let Some(reason) = search.run(scope) {
                    return Some(reason);
                }
            }

            debug!(
                event = "search_pass",
                pass,
                floor = ?floor,
                nodes = scope.nodes_explored(),
            );

            let reached = match (floor, scope.best_score()) {
                (None, _) => true,
                (Some(floor), Some(best)) => best.points() >= floor,
                (Some(_), None) => false,
            };
            if reached {
                return None;
            }
            gap *= Decimal::TWO;
        }
        None
    }

    /// Runs every pre-search check and lays out one plan per legal seating
    /// of the locked players.
    fn prepare<'a>(
        &self,
        eligible: &[&'a Player],
    ) -> std::result::Result<Vec<Plan<'a>>, Infeasibility> {
        let constraints = &self.constraints;

        let locked = resolve_locked(eligible, constraints)?;
        let seated = place_locked(&locked, constraints)?;
        if !locked.is_empty() {
            info!(
                event = "locked_placed",
                count = locked.len(),
                cost = %seated.total_cost(),
                bench = seated.bench().len(),
            );
        }

        check_pool(eligible, constraints)?;

        let candidates = ranked_candidates(eligible, constraints);
        let mut plans = Vec::new();
        let mut minimum_cost: Option<Decimal> = None;

        for base in locked_variants(&locked, constraints) {
            let Some(stages) = build_stages(&candidates, &base, constraints) else {
                continue;
            };
            let bounder = SquadBounder::new(&stages, &base, constraints);
            let Some(root_cost) = bounder.root_min_cost(base.total_cost()) else {
                continue;
            };
            minimum_cost = Some(minimum_cost.map_or(root_cost, |c| c.min(root_cost)));
            if root_cost > constraints.budget {
                continue;
            }
            plans.push(Plan {
                base,
                stages,
                bounder,
            });
        }

        if plans.is_empty() {
            return Err(match minimum_cost {
                Some(minimum_cost) => Infeasibility::Budget {
                    budget: constraints.budget,
                    minimum_cost,
                },
                None => Infeasibility::NoLegalCombination,
            });
        }

        debug!(
            event = "plans_ready",
            plans = plans.len(),
            candidates = candidates.len(),
        );
        Ok(plans)
    }
}

fn infeasible(reason: Infeasibility, scope: &SearchScope) -> Optimization {
    info!(
        event = "optimize_infeasible",
        reason = %reason,
        nodes = scope.nodes_explored(),
        duration_ms = scope.elapsed().as_millis() as u64,
    );
    Optimization::Infeasible(reason)
}
