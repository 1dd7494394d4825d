//! Tests for the interactive squad builder.

use squadforge_core::{ConstraintSet, Country, Position, Squad};
use squadforge_scoring::{BuildState, Rejection, Violation};
use squadforge_test::{fillers_except, player, projected, squad_of, stars};

use super::*;

fn builder(budget: i64) -> SquadBuilder {
    SquadBuilder::new(ConstraintSet::new().with_budget(stars(budget)))
}

#[test]
fn test_state_transitions() {
    let mut b = SquadBuilder::new(ConstraintSet::new().with_bench(false));
    assert_eq!(b.state(), BuildState::Empty);

    let fillers = fillers_except(&[], 1);
    for p in &fillers[..14] {
        assert!(b.add_player(p, false).is_valid());
        assert_eq!(b.state(), BuildState::Partial);
    }
    let outcome = b.add_player(&fillers[14], false);
    assert!(outcome.is_valid());
    assert_eq!(outcome.snapshot.state, BuildState::Complete);

    assert_eq!(b.remove_player(fillers[0].id).snapshot.state, BuildState::Partial);
    assert_eq!(b.clear().snapshot.state, BuildState::Empty);
}

#[test]
fn test_rejected_add_leaves_squad_unchanged() {
    let mut b = builder(20);
    assert!(b.add_player(&player(1, Country::France, Position::Hooker, 12), false).is_valid());
    let before = b.squad().clone();

    let outcome = b.add_player(&player(2, Country::France, Position::Prop, 9), false);
    assert_eq!(
        outcome.rejection,
        Some(Rejection::OverBudget {
            price: stars(9),
            remaining: stars(8)
        })
    );
    assert!(outcome.reason().is_some());
    assert_eq!(b.squad(), &before);
    assert_eq!(outcome.snapshot.squad, before);
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut b = builder(230);
    let p = player(1, Country::Italy, Position::Centre, 10);

    assert!(b.add_player(&p, false).is_valid());
    assert_eq!(
        b.add_player(&p, true).rejection,
        Some(Rejection::AlreadySelected(1))
    );
    assert_eq!(b.squad().len(), 1);
}

#[test]
fn test_add_then_remove_restores_squad() {
    let mut b = builder(230);
    b.add_player(&player(1, Country::Wales, Position::Prop, 10), false);
    b.add_player(&player(2, Country::Wales, Position::Centre, 11), true);
    b.set_captain(1);
    b.set_super_sub(2);
    let before = b.squad().clone();

    let added = player(3, Country::Scotland, Position::Prop, 7);
    assert!(b.add_player(&added, false).is_valid());
    assert_ne!(b.squad(), &before);
    b.remove_player(3);

    assert_eq!(b.squad(), &before);
    assert_eq!(b.snapshot().total_cost, stars(21));
}

#[test]
fn test_remove_non_member_is_noop() {
    let mut b = builder(230);
    b.add_player(&player(1, Country::Wales, Position::Prop, 10), false);
    let before = b.squad().clone();

    let outcome = b.remove_player(99);
    assert!(outcome.is_valid());
    assert_eq!(b.squad(), &before);

    b.remove_player(1);
    let emptied = b.squad().clone();
    b.remove_player(1);
    assert_eq!(b.squad(), &emptied);
}

#[test]
fn test_removing_role_holder_clears_role() {
    let mut b = builder(230);
    b.add_player(&projected(1, Country::Ireland, Position::OutHalf, 16, 22), false);
    b.add_player(&projected(2, Country::Wales, Position::ScrumHalf, 8, 8), true);
    assert!(b.set_captain(1).is_valid());
    assert!(b.set_super_sub(2).is_valid());

    b.remove_player(1);
    b.remove_player(2);
    b.add_player(&projected(1, Country::Ireland, Position::OutHalf, 16, 22), false);

    assert_eq!(b.squad().captain_id(), None);
    assert_eq!(b.squad().super_sub_id(), None);
}

#[test]
fn test_role_rules() {
    let mut b = builder(230);
    b.add_player(&projected(1, Country::Ireland, Position::OutHalf, 16, 22), false);
    b.add_player(&projected(2, Country::Wales, Position::ScrumHalf, 8, 8), true);

    assert_eq!(b.set_captain(2).rejection, Some(Rejection::NotInStartingXv(2)));
    assert_eq!(b.set_super_sub(1).rejection, Some(Rejection::NotOnBench(1)));
    assert_eq!(b.squad().captain_id(), None);

    let outcome = b.set_captain(1);
    assert!(outcome.is_valid());
    assert_eq!(outcome.snapshot.total_points, stars(48));

    let outcome = b.set_super_sub(2);
    assert_eq!(outcome.snapshot.total_points, stars(68));
}

#[test]
fn test_country_cap_applies_across_bench() {
    let mut b = SquadBuilder::new(ConstraintSet::new().with_max_per_country(1));
    assert!(b.add_player(&player(1, Country::Italy, Position::Prop, 5), true).is_valid());

    let outcome = b.add_player(&player(2, Country::Italy, Position::Hooker, 5), false);
    assert_eq!(
        outcome.rejection,
        Some(Rejection::CountryFull {
            country: Country::Italy,
            max: 1
        })
    );
}

#[test]
fn test_from_squad_validates() {
    let legal = squad_of(&[player(1, Country::France, Position::Prop, 10)], &[]);
    let b = SquadBuilder::from_squad(legal.clone(), ConstraintSet::default()).unwrap();
    assert_eq!(b.into_squad(), legal);

    let mut broken = Squad::new();
    broken.set_captain_unchecked(Some(5));
    let violations = SquadBuilder::from_squad(broken, ConstraintSet::default()).unwrap_err();
    assert_eq!(violations, vec![Violation::CaptainNotStarting(5)]);
}
