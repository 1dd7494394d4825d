//! Constraint sets for squad validation and optimization.

use rust_decimal::Decimal;

use crate::error::{Result, SquadForgeError};
use crate::player::PlayerId;
use crate::position::SQUAD_SIZE;

/// Default budget in stars.
pub const DEFAULT_BUDGET: Decimal = Decimal::from_parts(230, 0, 0, false, 0);

/// Default cap on players from one country.
pub const DEFAULT_MAX_PER_COUNTRY: u32 = 4;

/// Budget, country cap and player pinning rules applied to a squad.
///
/// # Examples
///
/// ```
/// use squadforge_core::{ConstraintSet, Decimal};
///
/// let constraints = ConstraintSet::new()
///     .with_budget(Decimal::from(200))
///     .with_locked(vec![7])
///     .with_excluded(vec![12]);
///
/// assert_eq!(constraints.max_per_country, 4);
/// assert!(constraints.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct ConstraintSet {
    /// Maximum total price of all selected players.
    pub budget: Decimal,
    /// Maximum players from any single country across starting XV and bench.
    pub max_per_country: u32,
    /// Players that must appear in an optimized squad.
    pub locked_players: Vec<PlayerId>,
    /// Players that must not appear in an optimized squad.
    pub excluded_players: Vec<PlayerId>,
    /// Minimum number of selected players for a partial squad to validate.
    pub min_players: Option<usize>,
    /// When false the optimizer leaves the bench empty.
    pub include_bench: bool,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            max_per_country: DEFAULT_MAX_PER_COUNTRY,
            locked_players: Vec::new(),
            excluded_players: Vec::new(),
            min_players: None,
            include_bench: true,
        }
    }
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_max_per_country(mut self, max: u32) -> Self {
        self.max_per_country = max;
        self
    }

    pub fn with_locked(mut self, ids: Vec<PlayerId>) -> Self {
        self.locked_players = ids;
        self
    }

    pub fn with_excluded(mut self, ids: Vec<PlayerId>) -> Self {
        self.excluded_players = ids;
        self
    }

    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = Some(min);
        self
    }

    pub fn with_bench(mut self, include_bench: bool) -> Self {
        self.include_bench = include_bench;
        self
    }

    pub fn is_locked(&self, id: PlayerId) -> bool {
        self.locked_players.contains(&id)
    }

    pub fn is_excluded(&self, id: PlayerId) -> bool {
        self.excluded_players.contains(&id)
    }

    /// Rejects malformed constraint sets before any search begins.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::InvalidConstraints`] for a negative budget
    /// or a minimum above the squad size, and
    /// [`SquadForgeError::LockedAndExcluded`] when the two lists overlap.
    pub fn validate(&self) -> Result<()> {
        if self.budget.is_sign_negative() && !self.budget.is_zero() {
            return Err(SquadForgeError::InvalidConstraints(format!(
                "budget must not be negative, got {}",
                self.budget
            )));
        }
        if let Some(min) = self.min_players {
            if min > SQUAD_SIZE {
                return Err(SquadForgeError::InvalidConstraints(format!(
                    "min_players {} exceeds squad size {}",
                    min, SQUAD_SIZE
                )));
            }
        }
        if let Some(id) = self
            .locked_players
            .iter()
            .find(|id| self.excluded_players.contains(id))
        {
            return Err(SquadForgeError::LockedAndExcluded(*id));
        }
        Ok(())
    }
}
