//! Tests for the projected-points objective

use rust_decimal::Decimal;
use squadforge_core::{Country, Position, SlotKind, Squad};
use squadforge_test::{player, projected, squad_of, stars};

use super::*;

#[test]
fn test_empty_squad_scores_zero() {
    let squad = Squad::new();
    assert_eq!(total_points(&squad), stars(0));
    assert_eq!(points_breakdown(&squad), PointsBreakdown::default());
}

#[test]
fn test_captain_doubles_points() {
    let captain = projected(1, Country::Ireland, Position::OutHalf, 16, 10);
    let mut squad = squad_of(&[captain], &[]);
    squad.set_captain_unchecked(Some(1));

    let breakdown = points_breakdown(&squad);
    assert_eq!(breakdown.starting, stars(10));
    assert_eq!(breakdown.captain_bonus, stars(10));
    assert_eq!(total_points(&squad), stars(20));
}

#[test]
fn test_super_sub_triples_points() {
    let sub = projected(2, Country::Wales, Position::ScrumHalf, 8, 8);
    let mut squad = squad_of(&[], &[sub]);
    squad.set_super_sub_unchecked(Some(2));

    let breakdown = points_breakdown(&squad);
    assert_eq!(breakdown.bench, stars(4));
    assert_eq!(breakdown.super_sub_bonus, stars(20));
    assert_eq!(total_points(&squad), stars(24));
}

#[test]
fn test_bench_counts_half() {
    let squad = squad_of(
        &[projected(1, Country::France, Position::Prop, 10, 12)],
        &[projected(2, Country::Italy, Position::Hooker, 6, 5)],
    );
    assert_eq!(total_points(&squad), Decimal::new(145, 1));
}

#[test]
fn test_unprojected_players_score_zero() {
    let squad = squad_of(
        &[player(1, Country::Scotland, Position::Centre, 11)],
        &[player(2, Country::Scotland, Position::Centre, 7)],
    );
    assert_eq!(total_points(&squad), stars(0));
}

#[test]
fn test_misplaced_roles_earn_no_bonus() {
    let starter = projected(1, Country::England, Position::BackRow, 14, 17);
    let bench = projected(2, Country::England, Position::BackRow, 8, 6);
    let mut squad = squad_of(&[starter], &[bench]);
    squad.set_captain_unchecked(Some(2));
    squad.set_super_sub_unchecked(Some(1));

    let breakdown = points_breakdown(&squad);
    assert_eq!(breakdown.captain_bonus, stars(0));
    assert_eq!(breakdown.super_sub_bonus, stars(0));
    assert_eq!(breakdown.total(), stars(20));
}

#[test]
fn test_squad_score_prefers_cheaper_on_equal_points() {
    let mut cheap = Squad::new();
    cheap.place(projected(1, Country::Italy, Position::Prop, 10, 12), SlotKind::Starting);
    let mut pricey = Squad::new();
    pricey.place(projected(2, Country::Italy, Position::Prop, 14, 12), SlotKind::Starting);

    assert_eq!(squad_score(&cheap).points(), squad_score(&pricey).points());
    assert!(squad_score(&cheap) > squad_score(&pricey));
}
