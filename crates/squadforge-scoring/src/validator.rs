//! Legality predicates for squads and squad mutations.
//!
//! [`can_add`] gates every single-player addition. Its checks run in a fixed
//! order and the first failure is reported: duplicate membership, budget
//! headroom, country cap, then bench or position capacity.

use rust_decimal::Decimal;
use thiserror::Error;

use squadforge_core::{
    ConstraintSet, Country, Player, PlayerId, Position, SlotKind, Squad, BENCH_SIZE,
};

/// Why a single mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("player {0} is already in the squad")]
    AlreadySelected(PlayerId),

    #[error("not enough budget: costs {price}, {remaining} remaining")]
    OverBudget { price: Decimal, remaining: Decimal },

    #[error("already {max} players from {country}")]
    CountryFull { country: Country, max: u32 },

    #[error("bench is full")]
    BenchFull,

    #[error("no {0} slots left")]
    PositionFull(Position),

    #[error("player {0} is not in the starting XV")]
    NotInStartingXv(PlayerId),

    #[error("player {0} is not on the bench")]
    NotOnBench(PlayerId),
}

/// A broken invariant found by [`validate_full`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("player {id} is not a {position}")]
    WrongBucket { id: PlayerId, position: Position },

    #[error("{count} players at {position}, quota is {quota}")]
    PositionOverQuota {
        position: Position,
        count: usize,
        quota: usize,
    },

    #[error("{count} players on the bench, limit is {}", BENCH_SIZE)]
    BenchOverflow { count: usize },

    #[error("total cost {cost} exceeds budget {budget}")]
    OverBudget { cost: Decimal, budget: Decimal },

    #[error("{count} players from {country}, limit is {max}")]
    CountryOverCap {
        country: Country,
        count: u32,
        max: u32,
    },

    #[error("captain {0} is not in the starting XV")]
    CaptainNotStarting(PlayerId),

    #[error("super-sub {0} is not on the bench")]
    SuperSubNotOnBench(PlayerId),

    #[error("locked player {0} is missing")]
    LockedMissing(PlayerId),

    #[error("excluded player {0} is selected")]
    ExcludedPresent(PlayerId),

    #[error("{count} players selected, at least {min} required")]
    BelowMinimum { count: usize, min: usize },
}

/// Decides whether `player` may join `squad` in `slot`.
///
/// A starting slot means the bucket for `player.position`.
pub fn can_add(
    squad: &Squad,
    player: &Player,
    slot: SlotKind,
    constraints: &ConstraintSet,
) -> Result<(), Rejection> {
    if squad.contains(player.id) {
        return Err(Rejection::AlreadySelected(player.id));
    }

    let remaining = squad.remaining_budget(constraints.budget);
    if player.price > remaining {
        return Err(Rejection::OverBudget {
            price: player.price,
            remaining,
        });
    }

    if squad.country_counts().get(player.country) >= constraints.max_per_country {
        return Err(Rejection::CountryFull {
            country: player.country,
            max: constraints.max_per_country,
        });
    }

    match slot {
        SlotKind::Bench if squad.bench_is_full() => Err(Rejection::BenchFull),
        SlotKind::Starting if squad.bucket_is_full(player.position) => {
            Err(Rejection::PositionFull(player.position))
        }
        _ => Ok(()),
    }
}

/// Captain must currently be a starting player.
pub fn can_set_captain(squad: &Squad, id: PlayerId) -> Result<(), Rejection> {
    match squad.slot_of(id) {
        Some(SlotKind::Starting) => Ok(()),
        _ => Err(Rejection::NotInStartingXv(id)),
    }
}

/// Super-sub must currently be on the bench.
pub fn can_set_super_sub(squad: &Squad, id: PlayerId) -> Result<(), Rejection> {
    match squad.slot_of(id) {
        Some(SlotKind::Bench) => Ok(()),
        _ => Err(Rejection::NotOnBench(id)),
    }
}

/// True when every starting bucket is exactly at quota.
pub fn is_starting_complete(squad: &Squad) -> bool {
    Position::ALL
        .iter()
        .all(|&p| squad.starting(p).len() == p.quota())
}

/// True when every starting bucket is at quota and the bench holds three.
pub fn is_complete(squad: &Squad) -> bool {
    is_starting_complete(squad) && squad.bench().len() == BENCH_SIZE
}

/// Completeness under `constraints`: an empty bench is complete when the
/// bench is switched off.
pub fn is_complete_for(squad: &Squad, constraints: &ConstraintSet) -> bool {
    let bench_target = if constraints.include_bench {
        BENCH_SIZE
    } else {
        0
    };
    is_starting_complete(squad) && squad.bench().len() == bench_target
}

/// Re-checks every squad invariant, returning all violations found.
///
/// Works on partial squads. Locked players are only required once the
/// squad is complete; excluded players are never allowed.
pub fn validate_full(squad: &Squad, constraints: &ConstraintSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen: Vec<PlayerId> = Vec::with_capacity(squad.len());
    for player in squad.players() {
        if seen.contains(&player.id) {
            violations.push(Violation::DuplicatePlayer(player.id));
        } else {
            seen.push(player.id);
        }
    }

    for position in Position::ALL {
        let bucket = squad.starting(position);
        for player in bucket.iter().filter(|p| p.position != position) {
            violations.push(Violation::WrongBucket {
                id: player.id,
                position,
            });
        }
        if bucket.len() > position.quota() {
            violations.push(Violation::PositionOverQuota {
                position,
                count: bucket.len(),
                quota: position.quota(),
            });
        }
    }

    if squad.bench().len() > BENCH_SIZE {
        violations.push(Violation::BenchOverflow {
            count: squad.bench().len(),
        });
    }

    let cost = squad.total_cost();
    if cost > constraints.budget {
        violations.push(Violation::OverBudget {
            cost,
            budget: constraints.budget,
        });
    }

    for (country, count) in squad.country_counts().iter() {
        if count > constraints.max_per_country {
            violations.push(Violation::CountryOverCap {
                country,
                count,
                max: constraints.max_per_country,
            });
        }
    }

    if let Some(id) = squad.captain_id() {
        if can_set_captain(squad, id).is_err() {
            violations.push(Violation::CaptainNotStarting(id));
        }
    }
    if let Some(id) = squad.super_sub_id() {
        if can_set_super_sub(squad, id).is_err() {
            violations.push(Violation::SuperSubNotOnBench(id));
        }
    }

    for &id in &constraints.excluded_players {
        if squad.contains(id) {
            violations.push(Violation::ExcludedPresent(id));
        }
    }
    if is_complete_for(squad, constraints) {
        for &id in &constraints.locked_players {
            if !squad.contains(id) {
                violations.push(Violation::LockedMissing(id));
            }
        }
    }

    if let Some(min) = constraints.min_players {
        if squad.len() < min {
            violations.push(Violation::BelowMinimum {
                count: squad.len(),
                min,
            });
        }
    }

    violations
}

/// True when [`validate_full`] finds nothing.
pub fn is_legal(squad: &Squad, constraints: &ConstraintSet) -> bool {
    validate_full(squad, constraints).is_empty()
}
