//! JSON configuration for two-jug runs.
//!
//! Every field is optional; omitted fields fall back to the reference
//! instance and the default (unbounded) search policy.
//!
//! ```json
//! {
//!   "capacities": [4, 3],
//!   "initial": [0, 0],
//!   "goal": { "jug": "x", "quantity": 2 },
//!   "search": { "max_expansions": null, "max_depth": null }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use decant_kernel::carrier::jug_state::{Capacities, Jug, JugState};
use decant_search::policy::SearchPolicy;

use crate::worlds::two_jugs::{JugGoal, TwoJugs};

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {detail}")]
    Invalid { detail: String },
}

/// Which jug a goal refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JugName {
    X,
    Y,
}

impl From<JugName> for Jug {
    fn from(name: JugName) -> Self {
        match name {
            JugName::X => Jug::X,
            JugName::Y => Jug::Y,
        }
    }
}

/// Goal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalConfig {
    pub jug: JugName,
    pub quantity: u32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            jug: JugName::X,
            quantity: 2,
        }
    }
}

/// Search section, mapped onto [`SearchPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub max_expansions: Option<u64>,
    pub max_depth: Option<u32>,
    pub goal_test_root: bool,
    pub record_graph: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let policy = SearchPolicy::default();
        Self {
            max_expansions: policy.max_expansions,
            max_depth: policy.max_depth,
            goal_test_root: policy.goal_test_root,
            record_graph: policy.record_graph,
        }
    }
}

/// Top-level configuration of a two-jug run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwoJugsConfig {
    /// `[capacity_x, capacity_y]`.
    pub capacities: [u32; 2],
    /// `[x, y]` at the start of the search.
    pub initial: [u32; 2],
    pub goal: GoalConfig,
    pub search: SearchConfig,
}

impl Default for TwoJugsConfig {
    fn default() -> Self {
        Self {
            capacities: [Capacities::REFERENCE.x, Capacities::REFERENCE.y],
            initial: [0, 0],
            goal: GoalConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl TwoJugsConfig {
    /// Parse and validate a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed JSON or unknown fields, and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`TwoJugsConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Check capacities, initial state, and search policy.
    ///
    /// A goal quantity above the jug's capacity is accepted: it simply has no
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacities = self.capacities();
        if capacities.x == 0 || capacities.y == 0 {
            return Err(ConfigError::Invalid {
                detail: format!("capacities must be positive, got {:?}", self.capacities),
            });
        }
        if !self.initial_state().is_within(capacities) {
            return Err(ConfigError::Invalid {
                detail: format!(
                    "initial state {:?} exceeds capacities {:?}",
                    self.initial, self.capacities
                ),
            });
        }
        self.search_policy()
            .validate()
            .map_err(|e| ConfigError::Invalid {
                detail: e.to_string(),
            })
    }

    #[must_use]
    pub fn capacities(&self) -> Capacities {
        Capacities::new(self.capacities[0], self.capacities[1])
    }

    #[must_use]
    pub fn initial_state(&self) -> JugState {
        JugState::new(self.initial[0], self.initial[1])
    }

    #[must_use]
    pub fn goal(&self) -> JugGoal {
        JugGoal {
            jug: self.goal.jug.into(),
            quantity: self.goal.quantity,
        }
    }

    /// The world described by this configuration.
    #[must_use]
    pub fn world(&self) -> TwoJugs {
        TwoJugs::new(self.capacities(), self.initial_state(), self.goal())
    }

    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.search.max_expansions,
            max_depth: self.search.max_depth,
            goal_test_root: self.search.goal_test_root,
            record_graph: self.search.record_graph,
        }
    }
}
