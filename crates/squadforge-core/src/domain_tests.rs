//! Tests for positions, players, squads and constraint sets

use rust_decimal::Decimal;

use super::*;

fn player(id: PlayerId, country: Country, position: Position, price: i64) -> Player {
    Player::new(id, format!("Player {}", id), country, position, Decimal::from(price))
}

#[test]
fn test_quota_table_sums_to_fifteen() {
    let total: usize = Position::ALL.iter().map(|p| p.quota()).sum();
    assert_eq!(total, STARTING_XV_SIZE);
    assert_eq!(SQUAD_SIZE, 18);
}

#[test]
fn test_position_parsing_collapses_props() {
    assert_eq!("loosehead_prop".parse::<Position>(), Ok(Position::Prop));
    assert_eq!("Tighthead Prop".parse::<Position>(), Ok(Position::Prop));
    assert_eq!("back_3".parse::<Position>(), Ok(Position::BackThree));
    assert_eq!("fly-half".parse::<Position>(), Ok(Position::OutHalf));
    assert!("winger".parse::<Position>().is_err());
}

#[test]
fn test_forward_positions() {
    let forwards: Vec<_> = Position::ALL.into_iter().filter(|p| p.is_forward()).collect();
    assert_eq!(
        forwards,
        vec![
            Position::Prop,
            Position::Hooker,
            Position::SecondRow,
            Position::BackRow
        ]
    );
}

#[test]
fn test_country_parsing() {
    assert_eq!("scotland".parse::<Country>(), Ok(Country::Scotland));
    assert_eq!(Country::Italy.to_string(), "Italy");
    assert!("Georgia".parse::<Country>().is_err());
}

#[test]
fn test_compare_projected_puts_absent_last_both_ways() {
    use std::cmp::Ordering;

    let high = Some(Decimal::from(10));
    let low = Some(Decimal::from(2));

    assert_eq!(compare_projected(high, low, SortDirection::Descending), Ordering::Less);
    assert_eq!(compare_projected(high, low, SortDirection::Ascending), Ordering::Greater);
    assert_eq!(compare_projected(None, low, SortDirection::Descending), Ordering::Greater);
    assert_eq!(compare_projected(None, low, SortDirection::Ascending), Ordering::Greater);
    assert_eq!(compare_projected(low, None, SortDirection::Ascending), Ordering::Less);
}

#[test]
fn test_rank_players_orders_best_first() {
    let a = player(1, Country::Ireland, Position::Prop, 10).with_projected_points(Decimal::from(8));
    let b = player(2, Country::Ireland, Position::Prop, 12);
    let c = player(3, Country::Ireland, Position::Prop, 9).with_projected_points(Decimal::from(8));
    let d = player(4, Country::Ireland, Position::Prop, 14).with_projected_points(Decimal::from(12));

    let mut ranked = vec![&a, &b, &c, &d];
    rank_players(&mut ranked);

    let ids: Vec<_> = ranked.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 3, 1, 2]);
}

#[test]
fn test_points_per_star() {
    let p = player(1, Country::Wales, Position::Centre, 10).with_projected_points(Decimal::from(15));
    assert_eq!(p.points_per_star(), Some(Decimal::new(15, 1)));
    assert_eq!(player(2, Country::Wales, Position::Centre, 10).points_per_star(), None);
    let free = player(3, Country::Wales, Position::Centre, 0).with_projected_points(Decimal::ONE);
    assert_eq!(free.points_per_star(), None);
}

#[test]
fn test_player_filter() {
    let pool = vec![
        player(1, Country::France, Position::Prop, 10),
        player(2, Country::France, Position::Centre, 15),
        player(3, Country::England, Position::Prop, 8).with_availability(false),
    ];

    let props = PlayerFilter::new().with_position(Position::Prop).apply(&pool);
    assert_eq!(props.len(), 2);

    let available_french = PlayerFilter::new()
        .with_country(Country::France)
        .with_price_range(Some(Decimal::from(12)), None)
        .with_availability(true)
        .apply(&pool);
    assert_eq!(available_french.len(), 1);
    assert_eq!(available_french[0].id, 2);
}

#[test]
fn test_squad_derived_values() {
    let mut squad = Squad::new();
    assert_eq!(squad.total_cost(), Decimal::ZERO);
    assert_eq!(squad.empty_slots().len(), STARTING_XV_SIZE);

    squad.place(player(1, Country::France, Position::Prop, 10), SlotKind::Starting);
    squad.place(player(2, Country::France, Position::Hooker, 12), SlotKind::Starting);
    squad.place(player(3, Country::Italy, Position::Prop, 5), SlotKind::Bench);

    assert_eq!(squad.len(), 3);
    assert_eq!(squad.starting_len(), 2);
    assert_eq!(squad.total_cost(), Decimal::from(27));
    assert_eq!(squad.remaining_budget(Decimal::from(30)), Decimal::from(3));
    assert_eq!(squad.country_counts().get(Country::France), 2);
    assert_eq!(squad.country_counts().get(Country::Italy), 1);
    assert_eq!(squad.slot_of(3), Some(SlotKind::Bench));
    assert_eq!(squad.slot_of(9), None);

    let empty = squad.empty_slots();
    assert_eq!(empty.iter().filter(|p| **p == Position::Prop).count(), 1);
    assert!(!empty.contains(&Position::Hooker));
}

#[test]
fn test_remove_clears_roles() {
    let mut squad = Squad::new();
    squad.place(player(1, Country::France, Position::Prop, 10), SlotKind::Starting);
    squad.place(player(2, Country::Wales, Position::Prop, 10), SlotKind::Bench);
    squad.set_captain_unchecked(Some(1));
    squad.set_super_sub_unchecked(Some(2));

    assert_eq!(squad.remove(1).map(|p| p.id), Some(1));
    assert_eq!(squad.captain_id(), None);
    assert_eq!(squad.super_sub_id(), Some(2));

    assert!(squad.remove(2).is_some());
    assert_eq!(squad.super_sub_id(), None);
    assert!(squad.is_empty());
}

#[test]
fn test_remove_non_member_is_noop() {
    let mut squad = Squad::new();
    squad.place(player(1, Country::France, Position::Prop, 10), SlotKind::Starting);
    let before = squad.clone();

    assert!(squad.remove(42).is_none());
    assert_eq!(squad, before);
}

#[test]
fn test_country_tally_concentration() {
    let tally: CountryTally = [Country::Ireland, Country::Ireland, Country::Wales]
        .iter()
        .collect();
    assert_eq!(tally.max(), 2);
    assert_eq!(tally.concentration(), 5);
}

#[test]
fn test_constraint_defaults() {
    let constraints = ConstraintSet::default();
    assert_eq!(constraints.budget, Decimal::from(230));
    assert_eq!(constraints.max_per_country, 4);
    assert!(constraints.include_bench);
    assert!(constraints.validate().is_ok());
}

#[test]
fn test_constraint_validation() {
    let negative = ConstraintSet::new().with_budget(Decimal::from(-1));
    assert!(matches!(
        negative.validate(),
        Err(SquadForgeError::InvalidConstraints(_))
    ));

    let overlap = ConstraintSet::new()
        .with_locked(vec![1, 2])
        .with_excluded(vec![2]);
    assert_eq!(overlap.validate(), Err(SquadForgeError::LockedAndExcluded(2)));

    let too_many = ConstraintSet::new().with_min_players(19);
    assert!(too_many.validate().is_err());
}
