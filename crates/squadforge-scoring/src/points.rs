//! Projected-points objective.
//!
//! Starting players count once, bench players at half weight. The captain
//! earns one extra multiple (2x in total) and the super-sub earns 2.5 extra
//! on top of the bench half (3x in total). Unknown projections score zero.

use rust_decimal::Decimal;

use squadforge_core::{SlotKind, Squad, SquadScore};

/// Weight applied to every bench player's projection.
pub const BENCH_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Extra multiple awarded to the captain.
pub const CAPTAIN_BONUS: Decimal = Decimal::ONE;

/// Extra multiple awarded to the super-sub on top of [`BENCH_WEIGHT`].
pub const SUPER_SUB_BONUS: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Components of a squad's projected total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointsBreakdown {
    pub starting: Decimal,
    pub bench: Decimal,
    pub captain_bonus: Decimal,
    pub super_sub_bonus: Decimal,
}

impl PointsBreakdown {
    pub fn total(&self) -> Decimal {
        self.starting + self.bench + self.captain_bonus + self.super_sub_bonus
    }
}

/// Splits the projected total into its weighted components.
///
/// A captain reference that is not a starting player, or a super-sub that
/// is not on the bench, earns no bonus.
pub fn points_breakdown(squad: &Squad) -> PointsBreakdown {
    let starting = squad.starting_players().map(|p| p.points_or_zero()).sum();
    let bench = squad
        .bench()
        .iter()
        .map(|p| p.points_or_zero() * BENCH_WEIGHT)
        .sum();

    let captain_bonus = squad
        .captain_id()
        .filter(|&id| squad.slot_of(id) == Some(SlotKind::Starting))
        .and_then(|id| squad.get(id))
        .map_or(Decimal::ZERO, |p| p.points_or_zero() * CAPTAIN_BONUS);

    let super_sub_bonus = squad
        .super_sub_id()
        .filter(|&id| squad.slot_of(id) == Some(SlotKind::Bench))
        .and_then(|id| squad.get(id))
        .map_or(Decimal::ZERO, |p| p.points_or_zero() * SUPER_SUB_BONUS);

    PointsBreakdown {
        starting,
        bench,
        captain_bonus,
        super_sub_bonus,
    }
}

/// Total projected points of `squad`. Never fails.
pub fn total_points(squad: &Squad) -> Decimal {
    points_breakdown(squad).total()
}

/// The optimizer's objective with its tie-break levels.
pub fn squad_score(squad: &Squad) -> SquadScore {
    SquadScore::for_squad(total_points(squad), squad)
}
