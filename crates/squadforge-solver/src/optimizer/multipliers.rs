//! Lagrangian prices for the budget and the country cap.
//!
//! Dropping the budget and the per-country cap leaves a problem that splits
//! by stage: each bucket takes its best players and the bench takes its best
//! three. Charging `budget` points per star and `country[c]` points per
//! player from country `c`, and crediting the unused budget and cap at the
//! same rates, turns the split problem into an upper bound on every legal
//! squad. The prices are tuned by subgradient descent so that bound is as
//! low as a few hundred cheap evaluations can make it.

use rust_decimal::Decimal;

use squadforge_core::{ConstraintSet, Country, CountryTally, Player, SlotKind, Squad};
use squadforge_scoring::{BENCH_WEIGHT, CAPTAIN_BONUS, SUPER_SUB_BONUS};

use super::candidates::{seated_captain, seated_super_sub, Stage, StageKind};

const MAX_ITERATIONS: usize = 150;
const STALL_LIMIT: usize = 10;
const PRICE_SCALE: u32 = 4;

/// Points charged per star and per player of each country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Multipliers {
    pub budget: Decimal,
    pub country: [Decimal; 6],
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            budget: Decimal::ONE,
            country: [Decimal::ZERO; 6],
        }
    }
}

impl Multipliers {
    /// Adjusted value of `player` picked with `weight`.
    pub fn key(&self, player: &Player, weight: Decimal) -> Decimal {
        weight * player.points_or_zero()
            - self.budget * player.price
            - self.country[player.country.index()]
    }

    /// Credit for the budget and cap a squad has not used yet.
    pub fn credit(&self, budget: Decimal, cap: u32, cost: Decimal, counts: &CountryTally) -> Decimal {
        let cap = Decimal::from(cap);
        Country::ALL.into_iter().fold(self.budget * (budget - cost), |acc, country| {
            acc + self.country[country.index()] * (cap - Decimal::from(counts.get(country)))
        })
    }
}

/// Relaxed optimum for one set of prices.
struct Relaxed {
    value: Decimal,
    /// Unused budget, negative when the relaxed squad overspends.
    budget_slack: Decimal,
    /// Unused cap per country.
    country_slack: [Decimal; 6],
}

/// Tunes the prices for the squad `base` with `stages` still open.
///
/// `seated` is the points the base already earns, role bonuses included.
/// Returns the best prices found and the bound they give.
pub(crate) fn tune(
    stages: &[Stage<'_>],
    base: &Squad,
    seated: Decimal,
    constraints: &ConstraintSet,
) -> (Multipliers, Decimal) {
    let cost = base.total_cost();
    let counts = base.country_counts();

    let mut current = Multipliers::default();
    let first = relax(stages, &current, constraints, cost, &counts);
    let mut best = (current.clone(), first.value);
    let mut relaxed = first;
    let mut step = Decimal::TWO;
    let mut stalled = 0;

    for _ in 0..MAX_ITERATIONS {
        let norm = relaxed.budget_slack * relaxed.budget_slack
            + relaxed.country_slack.iter().map(|g| g * g).sum::<Decimal>();
        if norm.is_zero() || step < Decimal::new(1, 3) {
            break;
        }

        let gap = (best.1.abs() / Decimal::from(20)).max(Decimal::ONE);
        let target = best.1 - gap;
        let Some(t) = (step * (relaxed.value - target)).checked_div(norm) else {
            break;
        };

        current.budget = (current.budget - t * relaxed.budget_slack)
            .max(Decimal::ZERO)
            .round_dp(PRICE_SCALE);
        for (price, slack) in current.country.iter_mut().zip(relaxed.country_slack) {
            *price = (*price - t * slack).max(Decimal::ZERO).round_dp(PRICE_SCALE);
        }

        relaxed = relax(stages, &current, constraints, cost, &counts);
        if relaxed.value < best.1 {
            best = (current.clone(), relaxed.value);
            stalled = 0;
        } else {
            stalled += 1;
            if stalled >= STALL_LIMIT {
                step /= Decimal::TWO;
                stalled = 0;
            }
        }
    }

    let (multipliers, bound) = best;
    (multipliers, seated + bound)
}

/// Best split squad under `prices`, excluding the points the base already
/// earns.
///
/// Buckets and bench take their best keys. The captain bonus goes to the
/// starter whose bonus adds most, either one already picked or one swapped
/// in for its bucket's weakest pick; the super-sub bonus likewise on the
/// bench. A seated role holder keeps its bonus when nothing beats it.
fn relax(
    stages: &[Stage<'_>],
    prices: &Multipliers,
    constraints: &ConstraintSet,
    cost: Decimal,
    counts: &CountryTally,
) -> Relaxed {
    let mut value = prices.credit(constraints.budget, constraints.max_per_country, cost, counts);
    let mut spend = Decimal::ZERO;
    let mut used = [0u32; 6];
    let mut captain = RoleGain::seated(stages, StageKind::Captain);
    let mut super_sub = RoleGain::seated(stages, StageKind::SuperSub);

    for stage in stages.iter().filter(|s| !s.kind.is_role()) {
        let weight = stage.kind.weight();
        let mut keyed: Vec<(Decimal, &Player)> = stage
            .players
            .iter()
            .map(|&p| (prices.key(p, weight), p))
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        let picks = &keyed[..stage.needed.min(keyed.len())];

        for (key, player) in picks {
            value += *key;
            spend += player.price;
            used[player.country.index()] += 1;
        }

        let (role, bonus) = match stage.kind.slot() {
            SlotKind::Starting => (&mut captain, CAPTAIN_BONUS),
            SlotKind::Bench => (&mut super_sub, SUPER_SUB_BONUS),
        };
        let Some(&(weakest, dropped)) = picks.last() else {
            continue;
        };
        for (index, &(key, player)) in keyed.iter().enumerate() {
            let extra = bonus * player.points_or_zero();
            if index < picks.len() {
                role.offer(extra, None);
            } else {
                role.offer(key + extra - weakest, Some((player, dropped)));
            }
        }
    }

    for role in [&captain, &super_sub] {
        value += role.gain;
        if let Some((added, dropped)) = role.swap {
            spend += added.price - dropped.price;
            used[added.country.index()] += 1;
            used[dropped.country.index()] -= 1;
        }
    }

    let cap = Decimal::from(constraints.max_per_country);
    let mut country_slack = [Decimal::ZERO; 6];
    for country in Country::ALL {
        let taken = counts.get(country) + used[country.index()];
        country_slack[country.index()] = cap - Decimal::from(taken);
    }

    Relaxed {
        value,
        budget_slack: constraints.budget - cost - spend,
        country_slack,
    }
}

/// Best bonus found so far for one role.
struct RoleGain<'a> {
    gain: Decimal,
    swap: Option<(&'a Player, &'a Player)>,
}

impl<'a> RoleGain<'a> {
    /// Starts from the bonus of the seated holder of a role still open.
    fn seated(stages: &[Stage<'_>], kind: StageKind) -> Self {
        let gain = stages
            .iter()
            .find(|s| s.kind == kind)
            .and_then(|s| s.fallback)
            .map_or(Decimal::ZERO, |holder| kind.role_bonus() * holder.points);
        Self { gain, swap: None }
    }

    fn offer(&mut self, gain: Decimal, swap: Option<(&'a Player, &'a Player)>) {
        if gain > self.gain {
            self.gain = gain;
            self.swap = swap;
        }
    }
}

/// Points the base earns before any pick, with the bonus of every role
/// whose stage is absent because its slot is already full.
pub(crate) fn seated_points(base: &Squad, stages: &[Stage<'_>]) -> Decimal {
    let starting: Decimal = base.starting_players().map(|p| p.points_or_zero()).sum();
    let bench: Decimal = base.bench().iter().map(|p| p.points_or_zero()).sum();
    let mut points = starting + bench * BENCH_WEIGHT;

    let has = |kind: StageKind| stages.iter().any(|s| s.kind == kind);
    if !has(StageKind::Captain) {
        if let Some(holder) = seated_captain(base) {
            points += CAPTAIN_BONUS * holder.points;
        }
    }
    if !has(StageKind::SuperSub) {
        if let Some(holder) = seated_super_sub(base) {
            points += SUPER_SUB_BONUS * holder.points;
        }
    }
    points
}
