//! Run configuration

use serde::{Deserialize, Serialize};

/// Configuration applied to every run of a graph
///
/// ```ignore
/// let config = RunConfig::new().with_max_steps(50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Maximum number of node executions per run. `None` never stops a run
    /// that keeps transitioning.
    #[serde(default)]
    pub max_steps: Option<usize>,
}

impl RunConfig {
    /// Create an unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of node executions per run
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = Some(max);
        self
    }

    /// Set or clear the step limit
    pub fn with_step_limit(mut self, max: Option<usize>) -> Self {
        self.max_steps = max;
        self
    }

    /// Check whether `steps` executions already reached the limit
    pub(crate) fn limit_reached(&self, steps: usize) -> Option<usize> {
        self.max_steps.filter(|&limit| steps >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = RunConfig::new();
        assert_eq!(config.max_steps, None);
        assert_eq!(config.limit_reached(usize::MAX), None);
    }

    #[test]
    fn test_limit_reached() {
        let config = RunConfig::new().with_max_steps(3);
        assert_eq!(config.limit_reached(2), None);
        assert_eq!(config.limit_reached(3), Some(3));

        let cleared = config.with_step_limit(None);
        assert_eq!(cleared.limit_reached(10), None);
    }

    #[test]
    fn test_deserialize() {
        let config: RunConfig = serde_json::from_str(r#"{"max_steps": 12}"#).unwrap();
        assert_eq!(config, RunConfig::new().with_max_steps(12));

        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_steps, None);
    }
}
