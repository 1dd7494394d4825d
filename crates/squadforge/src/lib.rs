//! SquadForge - Fantasy Rugby Squad Selection in Rust
//!
//! Validate squads one mutation at a time, or let the optimizer pick the
//! best legal squad from a player pool.
//!
//! # Example
//!
//! ```rust
//! use squadforge::prelude::*;
//!
//! let mut builder = SquadBuilder::new(ConstraintSet::default());
//! let prop = Player::new(1, "Prop", Country::Ireland, Position::Prop, Decimal::from(10))
//!     .with_projected_points(Decimal::from(12));
//!
//! let outcome = builder.add_player(&prop, false);
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.snapshot.remaining_budget, Decimal::from(220));
//! ```

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{solve, solve_with_config, CONFIG_FILE};

// Domain types
pub use squadforge_core::{
    compare_projected, rank_players, ConstraintSet, Country, CountryTally, Decimal, Player,
    PlayerFilter, PlayerId, Position, SlotKind, SortDirection, Squad, SquadForgeError, SquadScore,
    BENCH_SIZE, DEFAULT_BUDGET, DEFAULT_MAX_PER_COUNTRY, SQUAD_SIZE, STARTING_XV_SIZE,
};

// Validation and scoring
pub use squadforge_scoring::{
    can_add, can_set_captain, can_set_super_sub, is_complete, is_complete_for, is_legal,
    points_breakdown, squad_score, total_points, validate_full, BuildState, PointsBreakdown,
    Rejection, SquadSnapshot, Violation,
};

// Builder, optimizer and background solving
pub use squadforge_solver::{
    BuildOutcome, Infeasibility, Optimization, OptimizationHandle, OptimizedSquad, Optimizer,
    OptimizerManager, SearchStats, SolveStatus, SquadBuilder, StopReason,
};

pub use squadforge_config::{ConfigError, OptimizerConfig, SearchConfig};

pub mod prelude {
    pub use super::{ConstraintSet, Country, Decimal, Player, PlayerId, Position, Squad};
    pub use super::{BuildOutcome, Optimization, Optimizer, SquadBuilder};
    pub use super::{Infeasibility, Rejection, Violation};
    pub use super::{OptimizerConfig, SquadForgeError};
}
