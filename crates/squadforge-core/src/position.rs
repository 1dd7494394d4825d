//! Fantasy positions and the starting-XV quota table.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Number of starting slots across all position buckets.
pub const STARTING_XV_SIZE: usize = 15;

/// Number of bench slots.
pub const BENCH_SIZE: usize = 3;

/// Starting XV plus bench.
pub const SQUAD_SIZE: usize = STARTING_XV_SIZE + BENCH_SIZE;

/// Eligible fantasy position of a player.
///
/// Loosehead and tighthead props share the [`Position::Prop`] bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Position {
    Prop,
    Hooker,
    SecondRow,
    BackRow,
    ScrumHalf,
    OutHalf,
    Centre,
    #[cfg_attr(feature = "serde", serde(rename = "back_3", alias = "back_three"))]
    BackThree,
}

impl Position {
    /// All positions in starting-XV order.
    pub const ALL: [Position; 8] = [
        Position::Prop,
        Position::Hooker,
        Position::SecondRow,
        Position::BackRow,
        Position::ScrumHalf,
        Position::OutHalf,
        Position::Centre,
        Position::BackThree,
    ];

    /// Number of starting slots for this position.
    #[inline]
    pub const fn quota(self) -> usize {
        match self {
            Position::Prop => 2,
            Position::Hooker => 1,
            Position::SecondRow => 2,
            Position::BackRow => 3,
            Position::ScrumHalf => 1,
            Position::OutHalf => 1,
            Position::Centre => 2,
            Position::BackThree => 3,
        }
    }

    /// Dense index into [`Position::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the front five and back row.
    pub const fn is_forward(self) -> bool {
        matches!(
            self,
            Position::Prop | Position::Hooker | Position::SecondRow | Position::BackRow
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Prop => "prop",
            Position::Hooker => "hooker",
            Position::SecondRow => "second_row",
            Position::BackRow => "back_row",
            Position::ScrumHalf => "scrum_half",
            Position::OutHalf => "out_half",
            Position::Centre => "centre",
            Position::BackThree => "back_3",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a position label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "prop" | "loosehead_prop" | "tighthead_prop" => Ok(Position::Prop),
            "hooker" => Ok(Position::Hooker),
            "second_row" | "lock" => Ok(Position::SecondRow),
            "back_row" => Ok(Position::BackRow),
            "scrum_half" => Ok(Position::ScrumHalf),
            "out_half" | "fly_half" => Ok(Position::OutHalf),
            "centre" => Ok(Position::Centre),
            "back_3" | "back_three" => Ok(Position::BackThree),
            _ => Err(ParsePositionError(s.to_string())),
        }
    }
}

/// A dense map from [`Position`] to `T`.
///
/// Backs the starting-XV buckets so that validation can walk the quota
/// table generically instead of naming each position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionMap<T>([T; 8]);

impl<T> PositionMap<T> {
    /// Builds a map by calling `f` once per position.
    pub fn from_fn(mut f: impl FnMut(Position) -> T) -> Self {
        Self(Position::ALL.map(&mut f))
    }

    pub fn get(&self, position: Position) -> &T {
        &self.0[position.index()]
    }

    pub fn get_mut(&mut self, position: Position) -> &mut T {
        &mut self.0[position.index()]
    }

    /// Iterates entries in starting-XV order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.iter_mut()
    }
}

impl<T> Index<Position> for PositionMap<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        self.get(position)
    }
}

impl<T> IndexMut<Position> for PositionMap<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        self.get_mut(position)
    }
}
