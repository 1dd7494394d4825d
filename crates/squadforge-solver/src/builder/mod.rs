//! Interactive squad construction.
//!
//! A [`SquadBuilder`] owns one squad for the length of a build session and
//! applies one mutation at a time. Every addition goes through
//! [`can_add`]; a refused mutation leaves the squad untouched and reports
//! the reason alongside a fresh snapshot for display.

use tracing::debug;

use squadforge_core::{ConstraintSet, Player, PlayerId, SlotKind, Squad};
use squadforge_scoring::{
    build_state, can_add, can_set_captain, can_set_super_sub, validate_full, BuildState,
    Rejection, SquadSnapshot, Violation,
};

/// Result of one builder operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Why the operation was refused, if it was.
    pub rejection: Option<Rejection>,
    /// The squad after the operation.
    pub snapshot: SquadSnapshot,
}

impl BuildOutcome {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    /// Human-readable reason for a refusal.
    pub fn reason(&self) -> Option<String> {
        self.rejection.as_ref().map(ToString::to_string)
    }
}

/// Session object for building a squad one player at a time.
///
/// # Example
///
/// ```
/// use squadforge_core::{ConstraintSet, Country, Decimal, Player, Position};
/// use squadforge_solver::SquadBuilder;
///
/// let mut builder = SquadBuilder::new(ConstraintSet::default());
/// let prop = Player::new(1, "Prop", Country::Ireland, Position::Prop, Decimal::from(10));
///
/// assert!(builder.add_player(&prop, false).is_valid());
/// assert!(!builder.add_player(&prop, true).is_valid());
/// assert!(builder.set_captain(1).is_valid());
/// assert_eq!(builder.snapshot().total_cost, Decimal::from(10));
/// ```
#[derive(Debug, Clone)]
pub struct SquadBuilder {
    squad: Squad,
    constraints: ConstraintSet,
}

impl SquadBuilder {
    /// Starts an empty session.
    pub fn new(constraints: ConstraintSet) -> Self {
        Self {
            squad: Squad::new(),
            constraints,
        }
    }

    /// Resumes a session from a saved or imported squad.
    ///
    /// # Errors
    ///
    /// Returns every violation found when `squad` is not legal under
    /// `constraints`.
    pub fn from_squad(squad: Squad, constraints: ConstraintSet) -> Result<Self, Vec<Violation>> {
        let violations = validate_full(&squad, &constraints);
        if violations.is_empty() {
            Ok(Self { squad, constraints })
        } else {
            Err(violations)
        }
    }

    pub fn squad(&self) -> &Squad {
        &self.squad
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn state(&self) -> BuildState {
        build_state(&self.squad, &self.constraints)
    }

    pub fn snapshot(&self) -> SquadSnapshot {
        SquadSnapshot::capture(&self.squad, &self.constraints)
    }

    /// Adds `player` to its starting bucket, or to the bench when
    /// `to_bench` is set.
    pub fn add_player(&mut self, player: &Player, to_bench: bool) -> BuildOutcome {
        let slot = if to_bench {
            SlotKind::Bench
        } else {
            SlotKind::Starting
        };
        let checked = can_add(&self.squad, player, slot, &self.constraints);
        if checked.is_ok() {
            self.squad.place(player.clone(), slot);
        }
        self.outcome(checked)
    }

    /// Removes `id`, clearing any role it held. A non-member is a no-op.
    pub fn remove_player(&mut self, id: PlayerId) -> BuildOutcome {
        self.squad.remove(id);
        self.outcome(Ok(()))
    }

    /// Names a starting player captain.
    pub fn set_captain(&mut self, id: PlayerId) -> BuildOutcome {
        let checked = can_set_captain(&self.squad, id);
        if checked.is_ok() {
            self.squad.set_captain_unchecked(Some(id));
        }
        self.outcome(checked)
    }

    /// Names a bench player super-sub.
    pub fn set_super_sub(&mut self, id: PlayerId) -> BuildOutcome {
        let checked = can_set_super_sub(&self.squad, id);
        if checked.is_ok() {
            self.squad.set_super_sub_unchecked(Some(id));
        }
        self.outcome(checked)
    }

    /// Empties the squad.
    pub fn clear(&mut self) -> BuildOutcome {
        self.squad.clear();
        self.outcome(Ok(()))
    }

    pub fn into_squad(self) -> Squad {
        self.squad
    }

    fn outcome(&self, checked: Result<(), Rejection>) -> BuildOutcome {
        let rejection = checked.err();
        if let Some(rejection) = &rejection {
            debug!(event = "builder_rejected", reason = %rejection);
        }
        BuildOutcome {
            rejection,
            snapshot: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests;
