use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single setup hook invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookOutcome {
    /// Registered name of the participant that owns the hook
    pub participant: String,
    /// Whether the hook completed without panicking or erring
    pub success: bool,
    /// Invocation time in milliseconds
    pub execution_time_ms: u64,
    /// Error message (if failed)
    pub error: Option<String>,
}

/// Record of one completed setup pass.
///
/// Diagnostic only: nothing awaits the pass, so the report never blocks or
/// fails anything downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupPassReport {
    /// One entry per invoked hook, in invocation order
    pub outcomes: Vec<HookOutcome>,
    /// Participants enumerated but skipped for lack of a hook
    pub skipped: Vec<String>,
    /// Wall-clock time the pass finished
    pub completed_at: DateTime<Utc>,
    /// Total pass duration in milliseconds
    pub total_time_ms: u64,
}

impl SetupPassReport {
    pub(crate) fn new(outcomes: Vec<HookOutcome>, skipped: Vec<String>, elapsed: Duration) -> Self {
        Self {
            outcomes,
            skipped,
            completed_at: Utc::now(),
            total_time_ms: elapsed.as_millis() as u64,
        }
    }

    /// Number of hooks that completed successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.success).count()
    }

    /// Number of hooks that panicked or erred
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Looks up the outcome recorded for a participant's hook
    pub fn outcome_for(&self, participant: &str) -> Option<&HookOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.participant == participant)
    }

    /// Whether every invoked hook succeeded
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Serializes the report for diagnostic logging
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize setup pass report")
    }
}
