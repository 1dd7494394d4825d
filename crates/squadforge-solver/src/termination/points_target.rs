//! Terminates once a squad reaches a points target.

use rust_decimal::Decimal;

use super::{StopReason, Termination};
use crate::scope::SearchScope;

/// Terminates when the best squad found scores at least `target` points.
#[derive(Debug, Clone, Copy)]
pub struct PointsTargetTermination {
    target: Decimal,
}

impl PointsTargetTermination {
    pub fn new(target: Decimal) -> Self {
        Self { target }
    }
}

impl Termination for PointsTargetTermination {
    fn check(&self, scope: &SearchScope) -> Option<StopReason> {
        scope
            .best_score()
            .filter(|best| best.points() >= self.target)
            .map(|_| StopReason::TargetReached)
    }
}
