//! Tests for legality predicates and full validation

use squadforge_core::{ConstraintSet, Country, Player, Position, SlotKind, Squad};
use squadforge_test::{fillers_except, player, projected, six_nations_pool, squad_of, stars};

use super::*;

fn budget(value: i64) -> ConstraintSet {
    ConstraintSet::new().with_budget(stars(value))
}

/// A complete, legal 18-player squad drawn from the six nations pool.
fn legal_squad() -> Squad {
    let pool = six_nations_pool();
    let by_id = |id: u32| pool.iter().find(|p| p.id == id).cloned().unwrap();
    let starting: Vec<Player> = [1, 2, 5, 6, 8, 9, 11, 12, 14, 16, 18, 19, 20, 22, 23]
        .into_iter()
        .map(by_id)
        .collect();
    let bench: Vec<Player> = [24, 25, 3].into_iter().map(by_id).collect();
    squad_of(&starting, &bench)
}

#[test]
fn test_can_add_to_empty_squad() {
    let squad = Squad::new();
    let p = player(1, Country::Ireland, Position::Prop, 10);
    assert_eq!(can_add(&squad, &p, SlotKind::Starting, &budget(230)), Ok(()));
    assert_eq!(can_add(&squad, &p, SlotKind::Bench, &budget(230)), Ok(()));
}

#[test]
fn test_price_equal_to_remaining_is_allowed() {
    let squad = squad_of(&[player(1, Country::Ireland, Position::Prop, 16)], &[]);
    let exact = player(2, Country::France, Position::Prop, 10);
    let over = player(3, Country::France, Position::Prop, 11);

    assert_eq!(can_add(&squad, &exact, SlotKind::Starting, &budget(26)), Ok(()));
    assert_eq!(
        can_add(&squad, &over, SlotKind::Starting, &budget(26)),
        Err(Rejection::OverBudget {
            price: stars(11),
            remaining: stars(10)
        })
    );
}

#[test]
fn test_rejections_follow_check_order() {
    let first = player(1, Country::Wales, Position::Hooker, 10);
    let squad = squad_of(&[first.clone()], &[]);
    let constraints = budget(10).with_max_per_country(1);

    // Duplicate beats every other failure.
    assert_eq!(
        can_add(&squad, &first, SlotKind::Starting, &constraints),
        Err(Rejection::AlreadySelected(1))
    );

    // Budget is checked before country and capacity.
    let pricey = player(2, Country::Wales, Position::Hooker, 5);
    assert!(matches!(
        can_add(&squad, &pricey, SlotKind::Starting, &constraints),
        Err(Rejection::OverBudget { .. })
    ));

    // Country before position capacity.
    let free = player(3, Country::Wales, Position::Hooker, 0);
    assert_eq!(
        can_add(&squad, &free, SlotKind::Starting, &constraints),
        Err(Rejection::CountryFull {
            country: Country::Wales,
            max: 1
        })
    );

    let other_nation = player(4, Country::Italy, Position::Hooker, 0);
    assert_eq!(
        can_add(&squad, &other_nation, SlotKind::Starting, &constraints),
        Err(Rejection::PositionFull(Position::Hooker))
    );
    assert_eq!(
        can_add(&squad, &other_nation, SlotKind::Bench, &constraints),
        Ok(())
    );
}

#[test]
fn test_bench_full() {
    let bench = [
        player(1, Country::Ireland, Position::Prop, 1),
        player(2, Country::England, Position::Prop, 1),
        player(3, Country::France, Position::Prop, 1),
    ];
    let squad = squad_of(&[], &bench);
    let fourth = player(4, Country::Italy, Position::Centre, 1);

    assert_eq!(
        can_add(&squad, &fourth, SlotKind::Bench, &budget(230)),
        Err(Rejection::BenchFull)
    );
    assert_eq!(can_add(&squad, &fourth, SlotKind::Starting, &budget(230)), Ok(()));
}

#[test]
fn test_country_cap_counts_bench() {
    let squad = squad_of(
        &[player(1, Country::Scotland, Position::Prop, 1)],
        &[player(2, Country::Scotland, Position::Prop, 1)],
    );
    let third = player(3, Country::Scotland, Position::Centre, 1);
    let constraints = budget(230).with_max_per_country(2);

    assert!(matches!(
        can_add(&squad, &third, SlotKind::Starting, &constraints),
        Err(Rejection::CountryFull { .. })
    ));
}

#[test]
fn test_role_predicates() {
    let squad = squad_of(
        &[projected(1, Country::Ireland, Position::OutHalf, 16, 22)],
        &[projected(2, Country::Wales, Position::ScrumHalf, 8, 8)],
    );

    assert_eq!(can_set_captain(&squad, 1), Ok(()));
    assert_eq!(can_set_captain(&squad, 2), Err(Rejection::NotInStartingXv(2)));
    assert_eq!(can_set_captain(&squad, 99), Err(Rejection::NotInStartingXv(99)));
    assert_eq!(can_set_super_sub(&squad, 2), Ok(()));
    assert_eq!(can_set_super_sub(&squad, 1), Err(Rejection::NotOnBench(1)));
}

#[test]
fn test_completeness() {
    let squad = legal_squad();
    assert!(is_starting_complete(&squad));
    assert!(is_complete(&squad));

    let xv = squad_of(&fillers_except(&[], 100), &[]);
    assert!(is_starting_complete(&xv));
    assert!(!is_complete(&xv));
    assert!(is_complete_for(&xv, &ConstraintSet::new().with_bench(false)));
    assert!(!is_complete_for(&xv, &ConstraintSet::new()));
}

#[test]
fn test_legal_squad_has_no_violations() {
    let mut squad = legal_squad();
    squad.set_captain_unchecked(Some(22));
    squad.set_super_sub_unchecked(Some(3));

    assert_eq!(validate_full(&squad, &budget(230)), vec![]);
    assert!(is_legal(&squad, &budget(230)));
}

#[test]
fn test_validate_full_reports_every_violation() {
    let mut squad = legal_squad();
    squad.set_captain_unchecked(Some(24));
    squad.set_super_sub_unchecked(Some(1));

    let constraints = budget(100).with_max_per_country(3).with_excluded(vec![9]);
    let violations = validate_full(&squad, &constraints);

    assert!(violations
        .iter()
        .any(|v| matches!(v, Violation::OverBudget { .. })));
    assert!(violations.contains(&Violation::CaptainNotStarting(24)));
    assert!(violations.contains(&Violation::SuperSubNotOnBench(1)));
    assert!(violations.contains(&Violation::ExcludedPresent(9)));
    assert!(violations
        .iter()
        .any(|v| matches!(v, Violation::CountryOverCap { .. })));
}

#[test]
fn test_validate_full_detects_structural_breakage() {
    let prop = player(1, Country::Ireland, Position::Prop, 1);
    let squad = squad_of(
        &[
            prop.clone(),
            player(2, Country::England, Position::Prop, 1),
            player(3, Country::France, Position::Prop, 1),
        ],
        &[prop],
    );

    let violations = validate_full(&squad, &budget(230));
    assert!(violations.contains(&Violation::DuplicatePlayer(1)));
    assert!(violations.contains(&Violation::PositionOverQuota {
        position: Position::Prop,
        count: 3,
        quota: 2
    }));
}

#[test]
fn test_locked_only_required_when_complete() {
    let partial = squad_of(&[player(1, Country::Ireland, Position::Prop, 1)], &[]);
    let constraints = budget(230).with_locked(vec![77]);
    assert!(validate_full(&partial, &constraints).is_empty());

    let complete = legal_squad();
    assert_eq!(
        validate_full(&complete, &constraints),
        vec![Violation::LockedMissing(77)]
    );
}

#[test]
fn test_min_players() {
    let partial = squad_of(&[player(1, Country::Ireland, Position::Prop, 1)], &[]);
    let constraints = budget(230).with_min_players(5);
    assert_eq!(
        validate_full(&partial, &constraints),
        vec![Violation::BelowMinimum { count: 1, min: 5 }]
    );
}

#[test]
fn test_empty_squad_is_legal() {
    assert!(is_legal(&Squad::new(), &ConstraintSet::default()));
}
