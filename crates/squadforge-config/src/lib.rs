//! Configuration system for SquadForge.
//!
//! Load optimizer configuration from TOML or YAML to control default
//! constraints and search limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use squadforge_config::OptimizerConfig;
//! use std::time::Duration;
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     [constraints]
//!     budget = 225.5
//!     max_per_country = 3
//!     include_bench = false
//!
//!     [search]
//!     node_limit = 500000
//!     seconds_spent_limit = 10
//! "#).unwrap();
//!
//! assert_eq!(config.constraints.max_per_country, 3);
//! assert_eq!(config.search.time_limit(), Some(Duration::from_secs(10)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use squadforge_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::load_or_default("/nonexistent/squadforge.toml").unwrap();
//! assert_eq!(config, OptimizerConfig::default());
//! ```

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use squadforge_core::ConstraintSet;
use thiserror::Error;

/// Default cap on explored search nodes.
pub const DEFAULT_NODE_LIMIT: u64 = 2_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// True when the configuration file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Main optimizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Default constraints for requests that do not supply their own.
    #[serde(default)]
    pub constraints: ConstraintSet,

    /// Branch-and-bound search limits.
    #[serde(default)]
    pub search: SearchConfig,
}

impl OptimizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// describes invalid constraints.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file, or the defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Any failure other than a missing file: unreadable file, invalid
    /// TOML, or invalid constraints.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(e) if e.is_not_found() => Ok(Self::default()),
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validated()
    }

    /// Sets the default constraints.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the search time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.search.seconds_spent_limit = Some(seconds);
        self
    }

    /// Sets the node limit.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.search.node_limit = limit;
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.constraints
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.search.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "node_limit must be positive".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Search limits for the branch-and-bound optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum number of nodes to explore (None = unlimited).
    pub node_limit: Option<u64>,

    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Stop as soon as a squad reaching this many points is found.
    pub points_target: Option<Decimal>,

    /// Whether to prune branches whose bound cannot beat the incumbent.
    pub enable_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: Some(DEFAULT_NODE_LIMIT),
            seconds_spent_limit: None,
            millis_spent_limit: None,
            points_target: None,
            enable_pruning: true,
        }
    }
}

impl SearchConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }

    /// A configuration with no node or time limit.
    pub fn unlimited() -> Self {
        Self {
            node_limit: None,
            ..Self::default()
        }
    }
}
