//! Player constructors and deterministic pools.

use rust_decimal::Decimal;
use squadforge_core::{Country, Player, PlayerId, Position};

/// Shorthand for a whole-star price or points value.
pub fn stars(value: i64) -> Decimal {
    Decimal::from(value)
}

/// An available player with no projection.
pub fn player(id: PlayerId, country: Country, position: Position, price: i64) -> Player {
    Player::new(id, format!("Player {}", id), country, position, stars(price))
}

/// An available player projected to score `points`.
pub fn projected(
    id: PlayerId,
    country: Country,
    position: Position,
    price: i64,
    points: i64,
) -> Player {
    player(id, country, position, price).with_projected_points(stars(points))
}

/// Twenty-six players across all positions and the six nations.
///
/// Ids run 1..=26. Ids 24 to 26 are cheap depth players named outside the
/// match-day XV.
pub fn six_nations_pool() -> Vec<Player> {
    use Country::*;
    use Position::*;

    let rows: [(PlayerId, &str, Country, Position, i64, i64, bool); 26] = [
        (1, "Prop 1", Ireland, Prop, 10, 12, true),
        (2, "Prop 2", England, Prop, 9, 10, true),
        (3, "Prop 3", France, Prop, 8, 9, true),
        (4, "Hooker 1", Ireland, Hooker, 12, 15, true),
        (5, "Hooker 2", Wales, Hooker, 10, 12, true),
        (6, "Lock 1", Ireland, SecondRow, 11, 13, true),
        (7, "Lock 2", England, SecondRow, 10, 11, true),
        (8, "Lock 3", Scotland, SecondRow, 9, 10, true),
        (9, "Flanker 1", France, BackRow, 13, 18, true),
        (10, "Flanker 2", Ireland, BackRow, 12, 16, true),
        (11, "Number 8", England, BackRow, 14, 17, true),
        (12, "Flanker 3", Italy, BackRow, 8, 9, true),
        (13, "Scrum Half 1", France, ScrumHalf, 15, 20, true),
        (14, "Scrum Half 2", Wales, ScrumHalf, 12, 15, true),
        (15, "Out Half 1", Ireland, OutHalf, 16, 22, true),
        (16, "Out Half 2", England, OutHalf, 14, 18, true),
        (17, "Centre 1", France, Centre, 13, 16, true),
        (18, "Centre 2", Scotland, Centre, 11, 13, true),
        (19, "Centre 3", Wales, Centre, 10, 12, true),
        (20, "Wing 1", France, BackThree, 14, 19, true),
        (21, "Wing 2", Ireland, BackThree, 13, 17, true),
        (22, "Fullback 1", England, BackThree, 15, 21, true),
        (23, "Wing 3", Italy, BackThree, 9, 11, true),
        (24, "Bench Prop", Scotland, Prop, 7, 6, false),
        (25, "Bench Hooker", Italy, Hooker, 6, 5, false),
        (26, "Bench Scrum Half", Wales, ScrumHalf, 8, 8, false),
    ];

    rows.into_iter()
        .map(|(id, name, country, position, price, points, starting)| {
            Player::new(id, name, country, position, stars(price))
                .with_projected_points(stars(points))
                .with_starting(starting)
        })
        .collect()
}

/// Free, unprojected players filling the quota of every position not in
/// `skip`, with ids counting up from `first_id`.
///
/// Countries rotate so no nation receives more than three fillers.
pub fn fillers_except(skip: &[Position], first_id: PlayerId) -> Vec<Player> {
    let mut id = first_id;
    let mut fillers = Vec::new();
    for position in Position::ALL {
        if skip.contains(&position) {
            continue;
        }
        for _ in 0..position.quota() {
            let country = Country::ALL[(id - first_id) as usize % Country::ALL.len()];
            fillers.push(player(id, country, position, 0));
            id += 1;
        }
    }
    fillers
}

/// `per_position` players at every position with varied prices, points
/// and countries. Ids are `position_index * 100 + k + 1`.
pub fn balanced_pool(per_position: usize) -> Vec<Player> {
    let mut pool = Vec::with_capacity(per_position * Position::ALL.len());
    for position in Position::ALL {
        for k in 0..per_position {
            let id = (position.index() * 100 + k + 1) as PlayerId;
            let seed = i64::from(id);
            let country = Country::ALL[(position.index() + k) % Country::ALL.len()];
            let price = 6 + (seed * 7) % 9;
            let points = 4 + (seed * 11) % 13;
            pool.push(projected(id, country, position, price, points));
        }
    }
    pool
}

/// Thirty players per nation, 180 in all, at catalog scale.
///
/// Every nation lists 4 props, 3 hookers, 4 second rows, 5 back rows,
/// 3 scrum halves, 3 out halves, 4 centres and 4 back threes. Ids run
/// 1..=180 nation by nation in [`Country::ALL`] order. Prices fall in
/// 6..=20 and projections in 0..=30, both scrambled from the id.
pub fn catalog_pool() -> Vec<Player> {
    const PER_NATION: [usize; 8] = [4, 3, 4, 5, 3, 3, 4, 4];

    let mut pool = Vec::with_capacity(180);
    let mut id: PlayerId = 0;
    for country in Country::ALL {
        for (position, count) in Position::ALL.into_iter().zip(PER_NATION) {
            for _ in 0..count {
                id += 1;
                let hash = scramble(u64::from(id));
                let price = 6 + (hash % 15) as i64;
                let points = (price - 10 + ((hash >> 8) % 21) as i64).max(0);
                pool.push(projected(id, country, position, price, points));
            }
        }
    }
    pool
}

fn scramble(mut x: u64) -> u64 {
    x = x.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 31;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^ (x >> 27)
}
