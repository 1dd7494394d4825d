//! Squads assembled directly, bypassing the validator.

use squadforge_core::{Player, SlotKind, Squad};

/// Places `starting` in their position buckets and `bench` on the bench.
///
/// No legality checks run; use this to build both legal and deliberately
/// broken squads.
pub fn squad_of(starting: &[Player], bench: &[Player]) -> Squad {
    let mut squad = Squad::new();
    for player in starting {
        squad.place(player.clone(), SlotKind::Starting);
    }
    for player in bench {
        squad.place(player.clone(), SlotKind::Bench);
    }
    squad
}
