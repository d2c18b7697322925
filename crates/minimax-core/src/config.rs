//! Search configuration
//!
//! Plain data, deserializable from TOML:
//!
//! ```toml
//! depth = 6
//! pruning = true
//! tt_policy = "depth_and_side"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};
use crate::tt::TtPolicy;
use crate::types::Depth;

/// Search settings for one top-level call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth budget in plies
    pub depth: Depth,
    /// Alpha-beta cutoffs; `false` runs plain minimax
    pub pruning: bool,
    /// Transposition table key policy
    pub tt_policy: TtPolicy,
}

impl SearchConfig {
    /// Largest accepted depth. Bounds the recursion and therefore the stack.
    pub const MAX_DEPTH: Depth = 64;
    pub const DEFAULT_DEPTH: Depth = 4;

    /// Plain minimax: no pruning, no memoization.
    pub fn plain(depth: Depth) -> Self {
        Self {
            depth,
            pruning: false,
            tt_policy: TtPolicy::Disabled,
        }
    }

    /// Alpha-beta without a transposition table.
    pub fn alpha_beta(depth: Depth) -> Self {
        Self {
            depth,
            pruning: true,
            tt_policy: TtPolicy::Disabled,
        }
    }

    /// Alpha-beta with the default transposition table policy.
    pub fn full(depth: Depth) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Same settings with another depth
    pub fn with_depth(self, depth: Depth) -> Self {
        Self { depth, ..self }
    }

    /// Check the depth budget.
    pub fn validate(&self) -> SearchResult<()> {
        if self.depth == 0 || self.depth > Self::MAX_DEPTH {
            return Err(SearchError::InvalidDepth {
                depth: self.depth,
                max: Self::MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> SearchResult<Self> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            pruning: true,
            tt_policy: TtPolicy::default(),
        }
    }
}

/// Fluent construction of a [`SearchConfig`]
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn depth(mut self, depth: Depth) -> Self {
        self.config.depth = depth;
        self
    }

    pub fn pruning(mut self, enabled: bool) -> Self {
        self.config.pruning = enabled;
        self
    }

    pub fn tt_policy(mut self, policy: TtPolicy) -> Self {
        self.config.tt_policy = policy;
        self
    }

    /// Disable the transposition table
    pub fn no_tt(self) -> Self {
        self.tt_policy(TtPolicy::Disabled)
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}
