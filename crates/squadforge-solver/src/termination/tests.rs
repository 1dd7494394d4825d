//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;
use squadforge_core::{Squad, SquadScore};

use super::*;

fn scope_with_best(points: i64) -> SearchScope {
    let mut scope = SearchScope::new();
    scope.set_best(
        SquadScore::of(Decimal::from(points), Decimal::from(200), 20, 100),
        Squad::new(),
    );
    scope
}

#[test]
fn test_node_count_termination() {
    let mut scope = SearchScope::new();
    let term = NodeCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_nodes();
    scope.increment_nodes();
    assert!(!term.is_terminated(&scope));
    scope.increment_nodes();
    assert_eq!(term.check(&scope), Some(StopReason::NodeLimit));
}

#[test]
fn test_time_termination() {
    let scope = SearchScope::new();

    assert_eq!(
        TimeTermination::millis(0).check(&scope),
        Some(StopReason::TimeLimit)
    );
    assert!(!TimeTermination::seconds(3600).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = SearchScope::new();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert_eq!(term.check(&scope), Some(StopReason::Cancelled));
}

#[test]
fn test_points_target_termination() {
    let term = PointsTargetTermination::new(Decimal::from(300));

    assert!(!term.is_terminated(&SearchScope::new()));
    assert!(!term.is_terminated(&scope_with_best(299)));
    assert_eq!(
        term.check(&scope_with_best(300)),
        Some(StopReason::TargetReached)
    );
}

#[test]
fn test_or_termination_reports_first_fired() {
    let mut scope = SearchScope::new();
    let term = OrTermination::new((
        TimeTermination::seconds(3600),
        NodeCountTermination::new(1),
        TimeTermination::millis(0),
    ));

    assert_eq!(term.check(&scope), Some(StopReason::TimeLimit));

    scope.increment_nodes();
    let term = OrTermination::new((
        NodeCountTermination::new(1),
        TimeTermination::millis(0),
    ));
    assert_eq!(term.check(&scope), Some(StopReason::NodeLimit));
}

#[test]
fn test_or_termination_none_fired() {
    let scope = SearchScope::new();
    let term = OrTermination::new((
        TimeTermination::seconds(3600),
        NodeCountTermination::new(10),
    ));

    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_optional_termination() {
    let scope = SearchScope::new();
    let absent: Option<TimeTermination> = None;
    let present = Some(TimeTermination::millis(0));

    assert!(!absent.is_terminated(&scope));
    assert!(present.is_terminated(&scope));
}

#[test]
fn test_nested_or_termination() {
    let flag = Arc::new(AtomicBool::new(true));
    let term = OrTermination::new((
        ExternalTermination::new(flag),
        OrTermination::new((NodeCountTermination::new(0),)),
    ));

    assert_eq!(term.check(&SearchScope::new()), Some(StopReason::Cancelled));
}
