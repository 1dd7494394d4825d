//! The squad container: starting buckets, bench and the two roles.
//!
//! `Squad` stores what was chosen and derives everything else (cost,
//! remaining budget, per-country tally). Its mutators are unchecked; legality
//! is decided by the validator in `squadforge-scoring`, which every builder
//! and optimizer mutation goes through.

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::country::CountryTally;
use crate::player::{Player, PlayerId};
use crate::position::{Position, PositionMap, BENCH_SIZE};

/// Fixed-capacity list of players for one bucket. No quota exceeds three.
pub type Bucket = SmallVec<[Player; 3]>;

/// Which part of the squad a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotKind {
    /// The bucket for the player's own position.
    Starting,
    Bench,
}

/// A starting XV split into position buckets, a bench, and optional
/// captain and super-sub references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squad {
    starting: PositionMap<Bucket>,
    bench: Bucket,
    captain: Option<PlayerId>,
    super_sub: Option<PlayerId>,
}

impl Squad {
    /// Creates an empty squad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Players in the starting bucket for `position`.
    pub fn starting(&self, position: Position) -> &[Player] {
        &self.starting[position]
    }

    /// All starting players in position order.
    pub fn starting_players(&self) -> impl Iterator<Item = &Player> {
        self.starting.values().flat_map(|bucket| bucket.iter())
    }

    pub fn bench(&self) -> &[Player] {
        &self.bench
    }

    /// Every player, starting XV first, then bench.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.starting_players().chain(self.bench.iter())
    }

    pub fn starting_len(&self) -> usize {
        self.starting.values().map(|b| b.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.starting_len() + self.bench.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players().any(|p| p.id == id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players().find(|p| p.id == id)
    }

    /// Where `id` currently sits, if anywhere.
    pub fn slot_of(&self, id: PlayerId) -> Option<SlotKind> {
        if self.starting_players().any(|p| p.id == id) {
            Some(SlotKind::Starting)
        } else if self.bench.iter().any(|p| p.id == id) {
            Some(SlotKind::Bench)
        } else {
            None
        }
    }

    pub fn captain_id(&self) -> Option<PlayerId> {
        self.captain
    }

    pub fn super_sub_id(&self) -> Option<PlayerId> {
        self.super_sub
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captain.and_then(|id| self.get(id))
    }

    pub fn super_sub(&self) -> Option<&Player> {
        self.super_sub.and_then(|id| self.get(id))
    }

    /// Sum of all selected players' prices. Zero for an empty squad.
    pub fn total_cost(&self) -> Decimal {
        self.players().map(|p| p.price).sum()
    }

    pub fn remaining_budget(&self, budget: Decimal) -> Decimal {
        budget - self.total_cost()
    }

    pub fn country_counts(&self) -> CountryTally {
        self.players().map(|p| &p.country).collect()
    }

    /// Sum of player ids, the last tie-break between equal squads.
    pub fn id_sum(&self) -> u64 {
        self.players().map(|p| u64::from(p.id)).sum()
    }

    /// Starting positions still short of quota, one entry per empty slot.
    pub fn empty_slots(&self) -> Vec<Position> {
        self.starting
            .iter()
            .flat_map(|(position, bucket)| {
                std::iter::repeat(position).take(position.quota().saturating_sub(bucket.len()))
            })
            .collect()
    }

    pub fn bench_is_full(&self) -> bool {
        self.bench.len() >= BENCH_SIZE
    }

    pub fn bucket_is_full(&self, position: Position) -> bool {
        self.starting[position].len() >= position.quota()
    }

    /// Appends `player` to its position bucket or the bench without any
    /// legality check.
    pub fn place(&mut self, player: Player, slot: SlotKind) {
        match slot {
            SlotKind::Starting => self.starting[player.position].push(player),
            SlotKind::Bench => self.bench.push(player),
        }
    }

    /// Removes `id` from wherever it sits, clearing any role it held.
    ///
    /// Returns `None` and leaves the squad untouched for non-members.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let removed = self
            .starting
            .values_mut()
            .chain(std::iter::once(&mut self.bench))
            .find_map(|bucket| {
                let index = bucket.iter().position(|p| p.id == id)?;
                Some(bucket.remove(index))
            })?;

        if self.captain == Some(id) {
            self.captain = None;
        }
        if self.super_sub == Some(id) {
            self.super_sub = None;
        }
        Some(removed)
    }

    /// Sets the captain reference without checking membership.
    pub fn set_captain_unchecked(&mut self, id: Option<PlayerId>) {
        self.captain = id;
    }

    /// Sets the super-sub reference without checking membership.
    pub fn set_super_sub_unchecked(&mut self, id: Option<PlayerId>) {
        self.super_sub = id;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
