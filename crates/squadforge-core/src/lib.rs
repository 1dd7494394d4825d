//! SquadForge Core - Domain types for fantasy squad selection
//!
//! This crate provides the shared vocabulary for SquadForge:
//! - Positions, countries and the starting-XV quota table
//! - Player records as supplied by the catalog
//! - The squad container (position buckets, bench, captain, super-sub)
//! - Constraint sets for validation and optimization
//! - The lexicographic squad score maximised by the optimizer

pub mod constraints;
pub mod country;
pub mod error;
pub mod player;
pub mod position;
pub mod score;
pub mod squad;

#[cfg(test)]
mod domain_tests;

pub use constraints::{ConstraintSet, DEFAULT_BUDGET, DEFAULT_MAX_PER_COUNTRY};
pub use country::{Country, CountryTally};
pub use error::SquadForgeError;
pub use player::{compare_projected, rank_players, Player, PlayerFilter, PlayerId, SortDirection};
pub use position::{Position, PositionMap, BENCH_SIZE, SQUAD_SIZE, STARTING_XV_SIZE};
pub use score::SquadScore;
pub use squad::{Bucket, SlotKind, Squad};

pub use rust_decimal::Decimal;
