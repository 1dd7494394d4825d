//! Search stages and locked-player placements.
//!
//! The search fixes the captain first, then the super-sub, then fills the
//! eight starting buckets in position order and finally the bench. Every
//! stage lists its candidates by projection (highest first, lower id on
//! ties) and picks in increasing index order.
//!
//! A role holder is the first player of its slot in that order, so once the
//! captain is fixed the buckets only draw from players after it, and once
//! the super-sub is fixed the bench does the same. Every squad is visited
//! exactly once, with its roles already known.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use squadforge_core::{ConstraintSet, Player, PlayerId, Position, SlotKind, Squad, BENCH_SIZE};
use squadforge_scoring::{can_add, BENCH_WEIGHT, CAPTAIN_BONUS, SUPER_SUB_BONUS};

/// What a stage decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StageKind {
    Captain,
    SuperSub,
    Bucket(Position),
    Bench,
}

impl StageKind {
    pub fn slot(self) -> SlotKind {
        match self {
            StageKind::Captain | StageKind::Bucket(_) => SlotKind::Starting,
            StageKind::SuperSub | StageKind::Bench => SlotKind::Bench,
        }
    }

    /// Points earned per projected point by a player this stage picks.
    pub fn weight(self) -> Decimal {
        match self {
            StageKind::Captain => Decimal::ONE + CAPTAIN_BONUS,
            StageKind::SuperSub => BENCH_WEIGHT + SUPER_SUB_BONUS,
            StageKind::Bucket(_) => Decimal::ONE,
            StageKind::Bench => BENCH_WEIGHT,
        }
    }

    pub fn is_role(self) -> bool {
        matches!(self, StageKind::Captain | StageKind::SuperSub)
    }

    /// Extra points per projected point for holding the role.
    pub fn role_bonus(self) -> Decimal {
        match self {
            StageKind::Captain => CAPTAIN_BONUS,
            StageKind::SuperSub => SUPER_SUB_BONUS,
            StageKind::Bucket(_) | StageKind::Bench => Decimal::ZERO,
        }
    }
}

/// The player holding a role, reduced to what the ordering needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Holder {
    pub id: PlayerId,
    pub points: Decimal,
}

impl Holder {
    pub fn of(player: &Player) -> Self {
        Self {
            id: player.id,
            points: player.points_or_zero(),
        }
    }

    /// True when `player` comes strictly after the holder in projection
    /// order, and so may share its slot without taking the role.
    pub fn is_followed_by(&self, player: &Player) -> bool {
        let points = player.points_or_zero();
        points < self.points || (points == self.points && player.id > self.id)
    }
}

/// One decision level of the search.
#[derive(Debug, Clone)]
pub(crate) struct Stage<'a> {
    pub kind: StageKind,
    pub players: Vec<&'a Player>,
    /// Open slots before the search starts. Role stages need one pick.
    pub needed: usize,
    /// Seated player who takes the role when the stage picks nobody.
    pub fallback: Option<Holder>,
}

/// Highest projection first, lower id on ties.
pub(crate) fn by_projection(a: &Player, b: &Player) -> Ordering {
    b.points_or_zero()
        .cmp(&a.points_or_zero())
        .then_with(|| a.id.cmp(&b.id))
}

/// Eligible players that are not locked, in projection order.
pub(crate) fn ranked_candidates<'a>(
    eligible: &[&'a Player],
    constraints: &ConstraintSet,
) -> Vec<&'a Player> {
    let mut candidates: Vec<&Player> = eligible
        .iter()
        .copied()
        .filter(|p| !constraints.is_locked(p.id))
        .collect();
    candidates.sort_by(|a, b| by_projection(a, b));
    candidates
}

/// Best seated starter, the captain whenever no candidate outranks it.
pub(crate) fn seated_captain(base: &Squad) -> Option<Holder> {
    base.starting_players()
        .min_by(|a, b| by_projection(a, b))
        .map(Holder::of)
}

/// Best seated bench player.
pub(crate) fn seated_super_sub(base: &Squad) -> Option<Holder> {
    base.bench().iter().min_by(|a, b| by_projection(a, b)).map(Holder::of)
}

/// Builds the stages left to fill around `base`.
///
/// Returns `None` when some bucket has fewer candidates than open slots.
pub(crate) fn build_stages<'a>(
    candidates: &[&'a Player],
    base: &Squad,
    constraints: &ConstraintSet,
) -> Option<Vec<Stage<'a>>> {
    let open = |position: Position| position.quota() - base.starting(position).len();
    let bench_open = if constraints.include_bench {
        BENCH_SIZE - base.bench().len()
    } else {
        0
    };

    let mut stages = Vec::with_capacity(Position::ALL.len() + 3);

    if Position::ALL.into_iter().any(|position| open(position) > 0) {
        let fallback = seated_captain(base);
        stages.push(Stage {
            kind: StageKind::Captain,
            players: outranking(candidates, fallback, |p| open(p.position) > 0),
            needed: 1,
            fallback,
        });
    }

    if bench_open > 0 {
        let fallback = seated_super_sub(base);
        stages.push(Stage {
            kind: StageKind::SuperSub,
            players: outranking(candidates, fallback, |_| true),
            needed: 1,
            fallback,
        });
    }

    for position in Position::ALL {
        let needed = open(position);
        if needed == 0 {
            continue;
        }
        let players: Vec<&Player> = candidates
            .iter()
            .copied()
            .filter(|p| p.position == position)
            .collect();
        if players.len() < needed {
            return None;
        }
        stages.push(Stage {
            kind: StageKind::Bucket(position),
            players,
            needed,
            fallback: None,
        });
    }

    if bench_open > 0 {
        stages.push(Stage {
            kind: StageKind::Bench,
            players: candidates.to_vec(),
            needed: bench_open,
            fallback: None,
        });
    }

    Some(stages)
}

/// Candidates that would take a role from `fallback`.
fn outranking<'a>(
    candidates: &[&'a Player],
    fallback: Option<Holder>,
    keep: impl Fn(&Player) -> bool,
) -> Vec<&'a Player> {
    candidates
        .iter()
        .copied()
        .filter(|p| keep(p))
        .filter(|p| fallback.map_or(true, |holder| !holder.is_followed_by(p)))
        .collect()
}

/// Every legal way of seating the locked players.
///
/// A locked player may start or sit on the bench; each variant fixes which
/// locked players are benched. Variants with fewer benched players come
/// first, and variants that break a quota, the bench size, the budget or
/// the country cap are dropped.
pub(crate) fn locked_variants(locked: &[&Player], constraints: &ConstraintSet) -> Vec<Squad> {
    let bench_room = if constraints.include_bench {
        BENCH_SIZE
    } else {
        0
    };

    let mut masks: Vec<u32> = (0..1u32 << locked.len())
        .filter(|mask| mask.count_ones() as usize <= bench_room)
        .collect();
    masks.sort_by_key(|mask| (mask.count_ones(), *mask));

    masks
        .into_iter()
        .filter_map(|mask| {
            let slots: SmallVec<[SlotKind; 18]> = (0..locked.len())
                .map(|i| {
                    if mask & (1 << i) != 0 {
                        SlotKind::Bench
                    } else {
                        SlotKind::Starting
                    }
                })
                .collect();
            seat(locked, &slots, constraints)
        })
        .collect()
}

fn seat(locked: &[&Player], slots: &[SlotKind], constraints: &ConstraintSet) -> Option<Squad> {
    let mut squad = Squad::new();
    for (&player, &slot) in locked.iter().zip(slots) {
        can_add(&squad, player, slot, constraints).ok()?;
        squad.place(player.clone(), slot);
    }
    Some(squad)
}
