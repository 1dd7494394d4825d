//! Composite OR termination.
//!
//! Uses macro-generated tuple implementations so every child keeps its
//! concrete type.

use super::{StopReason, Termination};
use crate::scope::SearchScope;

/// Combines multiple terminations with OR logic.
///
/// Wraps a tuple of terminations. Terminates when ANY child terminates and
/// reports the reason of the first child, in tuple order, that fired.
///
/// # Examples
///
/// ```
/// use squadforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR 100 000 nodes
/// let termination = OrTermination::new((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(100_000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, scope: &SearchScope) -> Option<StopReason> {
                None$(.or_else(|| (self.0).$idx.check(scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
