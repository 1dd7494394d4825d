//! Depth-first branch-and-bound over the search stages.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tracing::{debug, trace};

use squadforge_core::{ConstraintSet, CountryTally, Player, PlayerId, SlotKind, Squad, BENCH_SIZE};
use squadforge_scoring::{can_add, squad_score};

use super::bounder::{SquadBounder, Window};
use super::candidates::{seated_captain, seated_super_sub, Holder, Stage, StageKind};
use super::multipliers::seated_points;
use crate::scope::SearchScope;
use crate::termination::{StopReason, Termination};

type Windows = SmallVec<[Window; 12]>;

/// One depth-first search from a squad with the locked players seated.
///
/// With a `floor`, branches that cannot reach it are cut before any squad
/// is known, and a squad below it never cuts anything.
pub(crate) struct BranchAndBound<'a, T> {
    stages: &'a [Stage<'a>],
    bounder: &'a SquadBounder,
    constraints: &'a ConstraintSet,
    termination: &'a T,
    enable_pruning: bool,
    floor: Option<Decimal>,
    squad: Squad,
    cost: Decimal,
    weighted: Decimal,
    counts: CountryTally,
    captain: Option<Holder>,
    super_sub: Option<Holder>,
    stop: Option<StopReason>,
}

impl<'a, T: Termination> BranchAndBound<'a, T> {
    pub fn new(
        base: Squad,
        stages: &'a [Stage<'a>],
        bounder: &'a SquadBounder,
        constraints: &'a ConstraintSet,
        termination: &'a T,
        enable_pruning: bool,
    ) -> Self {
        let has = |kind: StageKind| stages.iter().any(|s| s.kind == kind);
        let captain = if has(StageKind::Captain) {
            None
        } else {
            seated_captain(&base)
        };
        let super_sub = if has(StageKind::SuperSub) {
            None
        } else {
            seated_super_sub(&base)
        };

        Self {
            stages,
            bounder,
            constraints,
            termination,
            enable_pruning,
            floor: None,
            cost: base.total_cost(),
            weighted: seated_points(&base, stages),
            counts: base.country_counts(),
            squad: base,
            captain,
            super_sub,
            stop: None,
        }
    }

    pub fn with_floor(mut self, floor: Option<Decimal>) -> Self {
        self.floor = floor;
        self
    }

    /// Explores every completion of the base squad, recording improvements
    /// in `scope`. Returns why the search stopped early, if it did.
    pub fn run(mut self, scope: &mut SearchScope) -> Option<StopReason> {
        self.enter(scope, 0);
        self.stop
    }

    /// Starts `stage` with its first candidate and open slots fixed by the
    /// roles chosen so far.
    fn enter(&mut self, scope: &mut SearchScope, stage: usize) {
        let stages = self.stages;
        let Some(current) = stages.get(stage) else {
            self.evaluate_leaf(scope);
            return;
        };

        match current.kind {
            StageKind::Captain | StageKind::SuperSub => self.choose_role(scope, stage),
            StageKind::Bucket(_) | StageKind::Bench => {
                let (start, needed) = self.opening(current);
                self.descend(scope, stage, start, needed);
            }
        }
    }

    fn choose_role(&mut self, scope: &mut SearchScope, stage: usize) {
        let stages = self.stages;
        let current = &stages[stage];
        let slot = current.kind.slot();
        let weight = current.kind.weight();

        for (index, &player) in current.players.iter().enumerate() {
            if let Some(reason) = self.termination.check(scope) {
                self.stop = Some(reason);
                return;
            }
            if can_add(&self.squad, player, slot, self.constraints).is_err() {
                continue;
            }

            self.place(player, slot, weight);
            self.set_holder(current.kind, Some(Holder::of(player)));
            scope.increment_nodes();
            if self.enable_pruning && self.can_prune(scope, stage, index + 1, 0) {
                scope.increment_pruned();
            } else {
                self.enter(scope, stage + 1);
            }
            self.set_holder(current.kind, None);
            self.unplace(player, weight);

            if self.stop.is_some() {
                return;
            }
        }

        if let Some(fallback) = current.fallback {
            let bonus = current.kind.role_bonus() * fallback.points;
            self.weighted += bonus;
            self.set_holder(current.kind, Some(fallback));
            self.enter(scope, stage + 1);
            self.set_holder(current.kind, None);
            self.weighted -= bonus;
        }
    }

    fn descend(&mut self, scope: &mut SearchScope, stage: usize, next: usize, needed: usize) {
        if needed == 0 {
            self.enter(scope, stage + 1);
            return;
        }

        let stages = self.stages;
        let current = &stages[stage];
        let slot = current.kind.slot();
        let weight = current.kind.weight();

        for index in next..current.players.len() {
            if current.players.len() - index < needed {
                break;
            }
            if let Some(reason) = self.termination.check(scope) {
                self.stop = Some(reason);
                return;
            }

            let player = current.players[index];
            if can_add(&self.squad, player, slot, self.constraints).is_err() {
                continue;
            }

            self.place(player, slot, weight);
            scope.increment_nodes();
            if self.enable_pruning && self.can_prune(scope, stage, index + 1, needed - 1) {
                scope.increment_pruned();
            } else {
                self.descend(scope, stage, index + 1, needed - 1);
            }
            self.unplace(player, weight);

            if self.stop.is_some() {
                return;
            }
        }
    }

    /// First candidate and open slots of a bucket or bench stage.
    fn opening(&self, stage: &Stage<'_>) -> (usize, usize) {
        match stage.kind {
            StageKind::Bucket(position) => (
                start_after(stage, self.captain),
                position.quota().saturating_sub(self.squad.starting(position).len()),
            ),
            StageKind::Bench => (
                start_after(stage, self.super_sub),
                BENCH_SIZE.saturating_sub(self.squad.bench().len()),
            ),
            StageKind::Captain | StageKind::SuperSub => (0, 1),
        }
    }

    /// The partially filled `stage` plus every stage after it.
    fn windows(&self, stage: usize, next: usize, needed: usize) -> Windows {
        let mut windows = Windows::new();
        windows.push(Window::exact(stage, next, needed));

        for (index, later) in self.stages.iter().enumerate().skip(stage + 1) {
            let window = match later.kind {
                StageKind::Captain | StageKind::SuperSub => Window {
                    stage: index,
                    start: 0,
                    fewest: usize::from(later.fallback.is_none()),
                    most: 1,
                    idle: later
                        .fallback
                        .map_or(Decimal::ZERO, |holder| later.kind.role_bonus() * holder.points),
                },
                StageKind::Bench if self.super_sub.is_none() => {
                    // The super-sub stage may still take one bench slot.
                    let open = BENCH_SIZE.saturating_sub(self.squad.bench().len());
                    let may_skip = self
                        .stages
                        .iter()
                        .any(|s| s.kind == StageKind::SuperSub && s.fallback.is_some());
                    Window {
                        stage: index,
                        start: 0,
                        fewest: open.saturating_sub(1),
                        most: if may_skip { open } else { open.saturating_sub(1) },
                        idle: Decimal::ZERO,
                    }
                }
                StageKind::Bucket(_) | StageKind::Bench => {
                    let (start, needed) = self.opening(later);
                    Window::exact(index, start, needed)
                }
            };
            windows.push(window);
        }
        windows
    }

    fn can_prune(&self, scope: &SearchScope, stage: usize, next: usize, needed: usize) -> bool {
        let windows = self.windows(stage, next, needed);
        let Some(min_cost) = self.bounder.min_cost(&windows, self.cost) else {
            return true;
        };
        if min_cost > self.constraints.budget {
            return true;
        }

        let floor = self.floor;
        let incumbent = scope
            .best_score()
            .filter(|best| floor.map_or(true, |floor| best.points() >= floor));
        if incumbent.is_none() && floor.is_none() {
            return false;
        }

        let Some(bound) = self
            .bounder
            .upper_bound(&windows, self.weighted, self.cost, &self.counts)
        else {
            return true;
        };

        match (incumbent, floor) {
            (Some(best), _) => match bound.cmp(&best.points()) {
                Ordering::Less => true,
                Ordering::Equal => min_cost > best.cost(),
                Ordering::Greater => false,
            },
            (None, Some(floor)) => bound < floor,
            (None, None) => false,
        }
    }

    fn evaluate_leaf(&mut self, scope: &mut SearchScope) {
        scope.increment_leaves();

        self.squad.set_captain_unchecked(best_of(self.squad.starting_players()));
        self.squad.set_super_sub_unchecked(best_of(self.squad.bench().iter()));

        let score = squad_score(&self.squad);
        debug_assert_eq!(score.points(), self.weighted);
        if scope.improves_on_best(&score) {
            debug!(
                event = "new_best",
                score = %score,
                nodes = scope.nodes_explored(),
                pruned = scope.pruned(),
            );
            debug_assert!(squadforge_scoring::is_legal(&self.squad, self.constraints));
            scope.set_best(score, self.squad.clone());
        } else {
            trace!(event = "leaf", score = %score);
        }

        self.squad.set_captain_unchecked(None);
        self.squad.set_super_sub_unchecked(None);
    }

    fn set_holder(&mut self, kind: StageKind, holder: Option<Holder>) {
        match kind {
            StageKind::Captain => self.captain = holder,
            StageKind::SuperSub => self.super_sub = holder,
            StageKind::Bucket(_) | StageKind::Bench => {}
        }
    }

    fn place(&mut self, player: &Player, slot: SlotKind, weight: Decimal) {
        self.cost += player.price;
        self.weighted += weight * player.points_or_zero();
        self.counts.increment(player.country);
        self.squad.place(player.clone(), slot);
    }

    fn unplace(&mut self, player: &Player, weight: Decimal) {
        if self.squad.remove(player.id).is_some() {
            self.cost -= player.price;
            self.weighted -= weight * player.points_or_zero();
            self.counts.decrement(player.country);
        }
    }
}

/// Index of the first player of `stage` that comes after `holder`.
fn start_after(stage: &Stage<'_>, holder: Option<Holder>) -> usize {
    match holder {
        Some(holder) => stage.players.partition_point(|p| !holder.is_followed_by(p)),
        None => 0,
    }
}

/// Highest projection, lowest id on ties.
fn best_of<'p>(players: impl Iterator<Item = &'p Player>) -> Option<PlayerId> {
    players
        .max_by(|a, b| {
            a.points_or_zero()
                .cmp(&b.points_or_zero())
                .then_with(|| b.id.cmp(&a.id))
        })
        .map(|p| p.id)
}
