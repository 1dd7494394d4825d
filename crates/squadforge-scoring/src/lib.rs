//! Squad validation and scoring for SquadForge.
//!
//! This crate holds the pure functions every other layer defers to:
//! - Legality predicates gating each squad mutation ([`can_add`] and friends)
//! - Full re-validation of assembled squads ([`validate_full`])
//! - The projected-points objective with captain and super-sub multipliers
//! - Read-only snapshots of a squad's derived accounting
//!
//! Nothing here mutates a squad or fails; rejections and violations are
//! returned as values.

pub mod points;
pub mod snapshot;
pub mod validator;

#[cfg(test)]
mod points_tests;
#[cfg(test)]
mod snapshot_tests;
#[cfg(test)]
mod validator_tests;

pub use points::{
    points_breakdown, squad_score, total_points, PointsBreakdown, BENCH_WEIGHT, CAPTAIN_BONUS,
    SUPER_SUB_BONUS,
};
pub use snapshot::{build_state, BuildState, SquadSnapshot};
pub use validator::{
    can_add, can_set_captain, can_set_super_sub, is_complete, is_complete_for, is_legal,
    is_starting_complete, validate_full, Rejection, Violation,
};
