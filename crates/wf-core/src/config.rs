//! Engine configuration.
//!
//! # Pacing
//!
//! Every strategy yields twice per expanded city and once per highlighted
//! path step.  At each yield the engine waits `step_delay_ms` so a renderer
//! can animate the run.  The delay has no effect on which path is found;
//! headless callers and tests use [`EngineConfig::headless`].
//!
//! # Depth defaults
//!
//! Depth-limited search and iterative deepening take explicit bounds.  When a
//! request leaves them out, `default_depth_limit` and `max_iterative_depth`
//! fill in.

use std::time::Duration;

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Wait at each yield point, in milliseconds.  Default: 500.
    pub step_delay_ms: u64,
    /// Bound used by depth-limited search when the request has none.
    pub default_depth_limit: u32,
    /// Deepest iteration iterative deepening will attempt.  Default: 5.
    pub max_iterative_depth: u32,
}

impl EngineConfig {
    /// Configuration with no pacing delay, for tests and batch runs.
    pub fn headless() -> Self {
        Self { step_delay_ms: 0, ..Self::default() }
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Reject bounds that would make the depth-bounded strategies meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_depth_limit == 0 {
            return Err(CoreError::Config("default_depth_limit must be at least 1".into()));
        }
        if self.max_iterative_depth == 0 {
            return Err(CoreError::Config("max_iterative_depth must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_delay_ms:       500,
            default_depth_limit: 3,
            max_iterative_depth: 5,
        }
    }
}
