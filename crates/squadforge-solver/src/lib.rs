//! SquadForge Solver Engine
//!
//! This crate provides the stateful layers on top of the scoring predicates:
//! - [`SquadBuilder`]: interactive, one-mutation-at-a-time squad construction
//! - [`Optimizer`]: branch-and-bound search for the best legal squad
//! - Termination conditions for bounding the search
//! - [`OptimizerManager`]: background optimization with cancellation

pub mod builder;
pub mod manager;
pub mod optimizer;
pub mod scope;
pub mod termination;

pub use builder::{BuildOutcome, SquadBuilder};
pub use manager::{OptimizationHandle, OptimizerManager};
pub use optimizer::{
    ConfiguredTermination, Infeasibility, Optimization, OptimizedSquad, Optimizer, SearchStats,
    SolveStatus,
};
pub use scope::SearchScope;
pub use termination::{
    ExternalTermination, NodeCountTermination, OrTermination, PointsTargetTermination, StopReason,
    Termination, TimeTermination,
};
