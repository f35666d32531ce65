//! Timings and policies of the mock workflow.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::jobs::ProgressPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Wait before each generation step.
    pub step_delay_ms: u64,
    /// Simulated latency of a Studio save.
    pub save_latency_ms: u64,
    /// Simulated latency of a Studio export.
    pub export_latency_ms: u64,
    pub progress_policy: ProgressPolicy,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 2000,
            save_latency_ms: 1500,
            export_latency_ms: 800,
            progress_policy: ProgressPolicy::Stepwise,
        }
    }
}

impl WorkflowConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }

    pub fn export_latency(&self) -> Duration {
        Duration::from_millis(self.export_latency_ms)
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_progress_policy(mut self, policy: ProgressPolicy) -> Self {
        self.progress_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: WorkflowConfig = serde_json::from_str(r#"{"step_delay_ms": 10}"#).unwrap();
        assert_eq!(config.step_delay(), Duration::from_millis(10));
        assert_eq!(config.save_latency(), Duration::from_millis(1500));
        assert_eq!(config.progress_policy, ProgressPolicy::Stepwise);
    }

    #[test]
    fn test_policy_names() {
        let config: WorkflowConfig =
            serde_json::from_str(r#"{"progress_policy": "complete-at-hundred"}"#).unwrap();
        assert_eq!(config.progress_policy, ProgressPolicy::CompleteAtHundred);
    }
}
