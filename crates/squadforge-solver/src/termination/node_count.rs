//! Node-count based termination.

use super::{StopReason, Termination};
use crate::scope::SearchScope;

/// Terminates once the search has explored a number of nodes.
///
/// # Example
///
/// ```
/// use squadforge_solver::termination::NodeCountTermination;
///
/// let term = NodeCountTermination::new(2_000_000);
/// assert_eq!(term.limit(), 2_000_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for NodeCountTermination {
    fn check(&self, scope: &SearchScope) -> Option<StopReason> {
        (scope.nodes_explored() >= self.limit).then_some(StopReason::NodeLimit)
    }
}
