//! External termination via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{StopReason, Termination};
use crate::scope::SearchScope;

/// Terminates when an external flag is set.
///
/// Allows another thread to cancel a running search by setting the flag.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use squadforge_solver::termination::ExternalTermination;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(Arc::clone(&flag));
///
/// // Later, from any thread:
/// flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination {
    fn check(&self, _scope: &SearchScope) -> Option<StopReason> {
        self.flag
            .load(Ordering::Relaxed)
            .then_some(StopReason::Cancelled)
    }
}
