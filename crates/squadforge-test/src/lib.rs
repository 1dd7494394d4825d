//! Shared test fixtures for SquadForge crates.
//!
//! This crate provides player pools and squad helpers for testing.
//! It depends only on `squadforge-core` so that the scoring and solver
//! crates can both use it as a dev-dependency.
//!
//! - [`pool`] - Player constructors and ready-made pools
//! - [`squads`] - Helpers that assemble squads without legality checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! squadforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use squadforge_test::pool::{six_nations_pool, projected};
//! use squadforge_test::squads::squad_of;
//! ```

pub mod pool;
pub mod squads;

pub use pool::{
    balanced_pool, catalog_pool, fillers_except, player, projected, six_nations_pool, stars,
};
pub use squads::squad_of;
