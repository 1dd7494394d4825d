//! Player records supplied by the catalog for one competition round.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::country::Country;
use crate::position::Position;

/// Unique player identity.
pub type PlayerId = u32;

/// A selectable player for one round.
///
/// Immutable for the duration of a build or optimization session; a later
/// round supplies fresh records with updated price, availability and points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub country: Country,
    #[cfg_attr(feature = "serde", serde(alias = "fantasy_position"))]
    pub position: Position,
    /// Price in stars.
    pub price: Decimal,
    /// Projected fantasy points for the round; `None` when unknown.
    #[cfg_attr(feature = "serde", serde(default, alias = "predicted_points"))]
    pub projected_points: Option<Decimal>,
    #[cfg_attr(feature = "serde", serde(default = "default_available"))]
    pub is_available: bool,
    /// Named in the match-day starting XV. Informational only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_starting: Option<bool>,
}

#[cfg(feature = "serde")]
fn default_available() -> bool {
    true
}

impl Player {
    /// Creates an available player with no projection.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        country: Country,
        position: Position,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country,
            position,
            price,
            projected_points: None,
            is_available: true,
            is_starting: None,
        }
    }

    pub fn with_projected_points(mut self, points: Decimal) -> Self {
        self.projected_points = Some(points);
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    pub fn with_starting(mut self, starting: bool) -> Self {
        self.is_starting = Some(starting);
        self
    }

    /// Projected points with unknown treated as zero, as scoring requires.
    #[inline]
    pub fn points_or_zero(&self) -> Decimal {
        self.projected_points.unwrap_or(Decimal::ZERO)
    }

    /// Projected points per star of price.
    ///
    /// Absent when the projection is unknown or the player is free.
    pub fn points_per_star(&self) -> Option<Decimal> {
        let points = self.projected_points?;
        if self.price.is_zero() {
            return None;
        }
        points.checked_div(self.price)
    }
}

/// Sort direction for projected-points ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Orders two projections in the given direction.
///
/// Absent projections sort last in both directions.
pub fn compare_projected(
    a: Option<Decimal>,
    b: Option<Decimal>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts players best-first: projected points descending (unknown last),
/// then cheaper first, then lower id.
pub fn rank_players(players: &mut [&Player]) {
    players.sort_by(|a, b| {
        compare_projected(
            a.projected_points,
            b.projected_points,
            SortDirection::Descending,
        )
        .then_with(|| a.price.cmp(&b.price))
        .then_with(|| a.id.cmp(&b.id))
    });
}

/// Catalog query applied to a player pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub country: Option<Country>,
    pub position: Option<Position>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = Some(available);
        self
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.country.map_or(true, |c| c == player.country)
            && self.position.map_or(true, |p| p == player.position)
            && self.min_price.map_or(true, |min| player.price >= min)
            && self.max_price.map_or(true, |max| player.price <= max)
            && self.is_available.map_or(true, |a| a == player.is_available)
    }

    /// Returns the matching players in pool order.
    pub fn apply<'a>(&self, pool: &'a [Player]) -> Vec<&'a Player> {
        pool.iter().filter(|p| self.matches(p)).collect()
    }
}
