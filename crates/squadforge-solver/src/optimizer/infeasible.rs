//! Infeasibility reasons and the fail-fast checks run before any search.

use rust_decimal::Decimal;
use thiserror::Error;

use squadforge_core::{
    ConstraintSet, Country, Player, PlayerId, Position, SlotKind, Squad, BENCH_SIZE,
    STARTING_XV_SIZE,
};
use squadforge_scoring::{can_add, Rejection};

/// Why no legal complete squad can be produced.
///
/// Carries enough structure for a caller to relax the offending constraint
/// and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasibility {
    #[error("locked player {0} is unavailable, excluded or not in the pool")]
    LockedUnavailable(PlayerId),

    #[error("locked player {player_id} cannot be placed: {rejection}")]
    LockedPlayer {
        player_id: PlayerId,
        rejection: Rejection,
    },

    #[error("{available} eligible players at {position}, {required} required")]
    PositionShort {
        position: Position,
        required: usize,
        available: usize,
    },

    #[error("{available} eligible players in the pool, {required} required")]
    SquadShort { required: usize, available: usize },

    #[error("{position} cannot be filled with at most {max_per_country} players per country")]
    PositionCountryCap {
        position: Position,
        max_per_country: u32,
    },

    #[error(
        "at most {available} players selectable with {max_per_country} per country, {required} required"
    )]
    CountryCap {
        max_per_country: u32,
        available: usize,
        required: usize,
    },

    #[error("cheapest possible squad costs {minimum_cost}, budget is {budget}")]
    Budget {
        budget: Decimal,
        minimum_cost: Decimal,
    },

    #[error("no combination satisfies budget, quotas and country cap together")]
    NoLegalCombination,

    #[error("search stopped after {nodes_explored} nodes without finding a legal squad")]
    SearchLimitReached { nodes_explored: u64 },
}

/// Number of players a complete squad needs under `constraints`.
pub(crate) fn required_players(constraints: &ConstraintSet) -> usize {
    let bench = if constraints.include_bench {
        BENCH_SIZE
    } else {
        0
    };
    STARTING_XV_SIZE + bench
}

/// Resolves the locked ids against the eligible pool, dropping repeats.
pub(crate) fn resolve_locked<'a>(
    eligible: &[&'a Player],
    constraints: &ConstraintSet,
) -> Result<Vec<&'a Player>, Infeasibility> {
    let mut locked: Vec<&Player> = Vec::with_capacity(constraints.locked_players.len());
    for &id in &constraints.locked_players {
        if locked.iter().any(|p| p.id == id) {
            continue;
        }
        let player = eligible
            .iter()
            .copied()
            .find(|p| p.id == id)
            .ok_or(Infeasibility::LockedUnavailable(id))?;
        locked.push(player);
    }
    Ok(locked)
}

/// Places every locked player, starting bucket first and bench second.
///
/// Budget and country failures do not depend on the slot, so a failure
/// here means the locked players cannot coexist in any squad.
pub(crate) fn place_locked(
    locked: &[&Player],
    constraints: &ConstraintSet,
) -> Result<Squad, Infeasibility> {
    let mut squad = Squad::new();
    for &player in locked {
        let slot = match can_add(&squad, player, SlotKind::Starting, constraints) {
            Ok(()) => SlotKind::Starting,
            Err(Rejection::PositionFull(_)) if constraints.include_bench => {
                can_add(&squad, player, SlotKind::Bench, constraints).map_err(|rejection| {
                    Infeasibility::LockedPlayer {
                        player_id: player.id,
                        rejection,
                    }
                })?;
                SlotKind::Bench
            }
            Err(rejection) => {
                return Err(Infeasibility::LockedPlayer {
                    player_id: player.id,
                    rejection,
                })
            }
        };
        squad.place(player.clone(), slot);
    }
    Ok(squad)
}

/// Counting checks on the eligible pool: bucket depth, squad size and the
/// country cap, per position and overall.
pub(crate) fn check_pool(
    eligible: &[&Player],
    constraints: &ConstraintSet,
) -> Result<(), Infeasibility> {
    let cap = constraints.max_per_country as usize;

    for position in Position::ALL {
        let available = eligible.iter().filter(|p| p.position == position).count();
        if available < position.quota() {
            return Err(Infeasibility::PositionShort {
                position,
                required: position.quota(),
                available,
            });
        }
    }

    let required = required_players(constraints);
    if eligible.len() < required {
        return Err(Infeasibility::SquadShort {
            required,
            available: eligible.len(),
        });
    }

    for position in Position::ALL {
        let selectable = capped_count(
            eligible.iter().copied().filter(|p| p.position == position),
            cap,
        );
        if selectable < position.quota() {
            return Err(Infeasibility::PositionCountryCap {
                position,
                max_per_country: constraints.max_per_country,
            });
        }
    }

    let selectable = capped_count(eligible.iter().copied(), cap);
    if selectable < required {
        return Err(Infeasibility::CountryCap {
            max_per_country: constraints.max_per_country,
            available: selectable,
            required,
        });
    }

    Ok(())
}

/// How many of `players` can be taken with at most `cap` per country.
fn capped_count<'a>(players: impl Iterator<Item = &'a Player>, cap: usize) -> usize {
    let mut per_country = [0usize; Country::ALL.len()];
    for player in players {
        per_country[player.country.index()] += 1;
    }
    per_country.iter().map(|&n| n.min(cap)).sum()
}
