//! Score type for comparing complete squads.
//!
//! The optimizer maximises projected points; ties between equal-point squads
//! are broken by lower cost, then a more even country spread, then the lower
//! id sum so that results are deterministic.

mod squad_score;


pub use squad_score::SquadScore;

/// Score level representing the objective and its tie-breaks, highest
/// priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLevel {
    /// Weighted projected points (higher is better)
    Points,
    /// Total price (lower is better)
    Cost,
    /// Sum of squared country counts (lower is better)
    Concentration,
    /// Sum of player ids (lower is better)
    IdSum,
}
