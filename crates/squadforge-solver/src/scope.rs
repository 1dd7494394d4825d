//! Search scope: counters and incumbent for one optimization run.

use std::time::{Duration, Instant};

use squadforge_core::{Squad, SquadScore};

/// Mutable state shared by every node of one branch-and-bound search.
///
/// Terminations read it to decide whether to stop; the search writes the
/// counters and the best complete squad found so far.
#[derive(Debug, Clone)]
pub struct SearchScope {
    start_time: Instant,
    nodes_explored: u64,
    leaves_evaluated: u64,
    pruned: u64,
    best: Option<(SquadScore, Squad)>,
}

impl SearchScope {
    /// Creates a scope whose clock starts now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_explored: 0,
            leaves_evaluated: 0,
            pruned: 0,
            best: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    pub fn leaves_evaluated(&self) -> u64 {
        self.leaves_evaluated
    }

    pub fn pruned(&self) -> u64 {
        self.pruned
    }

    pub fn increment_nodes(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn increment_leaves(&mut self) {
        self.leaves_evaluated += 1;
    }

    pub fn increment_pruned(&mut self) {
        self.pruned += 1;
    }

    pub fn best_score(&self) -> Option<SquadScore> {
        self.best.as_ref().map(|(score, _)| *score)
    }

    pub fn best_squad(&self) -> Option<&Squad> {
        self.best.as_ref().map(|(_, squad)| squad)
    }

    /// True when `score` strictly beats the incumbent (or there is none).
    pub fn improves_on_best(&self, score: &SquadScore) -> bool {
        self.best.as_ref().map_or(true, |(best, _)| score > best)
    }

    /// Replaces the incumbent unconditionally.
    pub fn set_best(&mut self, score: SquadScore, squad: Squad) {
        self.best = Some((score, squad));
    }

    pub fn take_best(&mut self) -> Option<(SquadScore, Squad)> {
        self.best.take()
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
