//! Termination conditions for the optimizer search.

mod composite;
mod external;
mod node_count;
mod points_target;
mod time;

use std::fmt::{self, Debug};

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use points_target::PointsTargetTermination;
pub use time::TimeTermination;

/// Why a search stopped before exhausting the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    NodeLimit,
    TimeLimit,
    TargetReached,
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NodeLimit => write!(f, "node limit"),
            StopReason::TimeLimit => write!(f, "time limit"),
            StopReason::TargetReached => write!(f, "points target reached"),
            StopReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop now, or `None` to keep searching.
    fn check(&self, scope: &SearchScope) -> Option<StopReason>;

    /// Returns true if the search should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.check(scope).is_some()
    }
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, scope: &SearchScope) -> Option<StopReason> {
        self.as_ref().and_then(|t| t.check(scope))
    }
}

#[cfg(test)]
mod tests;
