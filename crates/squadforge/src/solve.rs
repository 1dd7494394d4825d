//! Optimizer entry point that hides the config wiring.

use std::path::Path;

use squadforge_config::OptimizerConfig;
use squadforge_core::error::Result;
use squadforge_core::{Player, SquadForgeError};
use squadforge_solver::{Optimization, Optimizer};

/// Configuration file read by [`solve`] from the working directory.
pub const CONFIG_FILE: &str = "squadforge.toml";

/// Optimizes `pool` under the constraints and limits in [`CONFIG_FILE`].
///
/// A missing file falls back to the defaults: budget 230, four players per
/// country, bench included, two million search nodes.
///
/// # Errors
///
/// Returns [`SquadForgeError::InvalidConfig`] when the file exists but cannot
/// be read, parsed or validated, and an error when the pool repeats a
/// player id.
pub fn solve(pool: &[Player]) -> Result<Optimization> {
    solve_with_file(pool, CONFIG_FILE)
}

fn solve_with_file(pool: &[Player], path: impl AsRef<Path>) -> Result<Optimization> {
    let config = OptimizerConfig::load_or_default(path)
        .map_err(|e| SquadForgeError::InvalidConfig(e.to_string()))?;
    solve_with_config(pool, &config)
}

/// Optimizes `pool` under an explicit configuration.
///
/// With the `console` feature enabled, the first call installs the console
/// logging layer.
pub fn solve_with_config(pool: &[Player], config: &OptimizerConfig) -> Result<Optimization> {
    #[cfg(feature = "console")]
    crate::console::init();

    Optimizer::from_config(config).optimize(pool)
}
