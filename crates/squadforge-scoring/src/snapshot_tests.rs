//! Tests for squad snapshots

use squadforge_core::{ConstraintSet, Country, Position, Squad};
use squadforge_test::{fillers_except, projected, squad_of, stars};

use super::*;

#[test]
fn test_empty_snapshot() {
    let snapshot = SquadSnapshot::capture(&Squad::new(), &ConstraintSet::default());

    assert_eq!(snapshot.state, BuildState::Empty);
    assert_eq!(snapshot.total_cost, stars(0));
    assert_eq!(snapshot.remaining_budget, stars(230));
    assert_eq!(snapshot.total_points, stars(0));
    assert_eq!(snapshot.empty_slots.len(), 15);
}

#[test]
fn test_partial_snapshot_accounting() {
    let mut squad = squad_of(
        &[
            projected(1, Country::Ireland, Position::OutHalf, 16, 22),
            projected(2, Country::Ireland, Position::Prop, 10, 12),
        ],
        &[projected(3, Country::Wales, Position::ScrumHalf, 8, 8)],
    );
    squad.set_captain_unchecked(Some(1));
    squad.set_super_sub_unchecked(Some(3));

    let snapshot = SquadSnapshot::capture(&squad, &ConstraintSet::default());

    assert_eq!(snapshot.state, BuildState::Partial);
    assert_eq!(snapshot.total_cost, stars(34));
    assert_eq!(snapshot.remaining_budget, stars(196));
    assert_eq!(snapshot.country_counts.get(Country::Ireland), 2);
    assert_eq!(snapshot.points.starting, stars(34));
    assert_eq!(snapshot.points.bench, stars(4));
    assert_eq!(snapshot.points.captain_bonus, stars(22));
    assert_eq!(snapshot.points.super_sub_bonus, stars(20));
    assert_eq!(snapshot.total_points, stars(80));
    assert_eq!(snapshot.empty_slots.len(), 13);
}

#[test]
fn test_complete_without_bench() {
    let squad = squad_of(&fillers_except(&[], 1), &[]);
    let no_bench = ConstraintSet::new().with_bench(false);

    assert_eq!(build_state(&squad, &no_bench), BuildState::Complete);
    assert_eq!(build_state(&squad, &ConstraintSet::new()), BuildState::Partial);
}
