//! Read-only view of a squad and its derived accounting.

use rust_decimal::Decimal;

use squadforge_core::{ConstraintSet, CountryTally, Position, Squad};

use crate::points::{points_breakdown, PointsBreakdown};
use crate::validator::is_complete_for;

/// Lifecycle stage of a squad under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuildState {
    Empty,
    Partial,
    Complete,
}

/// Squad plus everything a display needs: cost, remaining budget,
/// per-country tally, score and unfilled starting slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquadSnapshot {
    pub squad: Squad,
    pub total_cost: Decimal,
    pub remaining_budget: Decimal,
    pub country_counts: CountryTally,
    pub points: PointsBreakdown,
    pub total_points: Decimal,
    pub empty_slots: Vec<Position>,
    pub state: BuildState,
}

impl SquadSnapshot {
    /// Captures `squad` as it stands under `constraints`.
    pub fn capture(squad: &Squad, constraints: &ConstraintSet) -> Self {
        let points = points_breakdown(squad);
        let total_cost = squad.total_cost();

        Self {
            squad: squad.clone(),
            total_cost,
            remaining_budget: constraints.budget - total_cost,
            country_counts: squad.country_counts(),
            points,
            total_points: points.total(),
            empty_slots: squad.empty_slots(),
            state: build_state(squad, constraints),
        }
    }
}

/// Where `squad` sits in the empty, partial, complete lifecycle.
pub fn build_state(squad: &Squad, constraints: &ConstraintSet) -> BuildState {
    if squad.is_empty() {
        BuildState::Empty
    } else if is_complete_for(squad, constraints) {
        BuildState::Complete
    } else {
        BuildState::Partial
    }
}
