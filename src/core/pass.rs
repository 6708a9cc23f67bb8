use anyhow::Result;
use std::any::Any;
use std::panic;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::participant::{HookBinding, ParticipantRegistry};
use crate::core::report::{HookOutcome, SetupPassReport};
use crate::symbols::*;

/// Normalized form of a panic raised inside a setup hook
#[derive(Debug, Error)]
#[error("setup hook panicked: {message}")]
pub(crate) struct HookPanic {
    message: String,
}

impl HookPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        };

        Self { message }
    }
}

/// Runs every registered hook once, isolating each failure at that hook's
/// boundary. The pass itself cannot fail; it always sweeps the whole
/// registry and returns what happened.
pub(crate) fn execute_pass(registry: &ParticipantRegistry) -> SetupPassReport {
    let pass_start = Instant::now();
    let total_hooks = registry.hooked_count();

    info!(
        "{} Running before-test setup pass ({} hooks across {} participants)",
        SYMBOL_ACTION_LAUNCH,
        total_hooks,
        registry.len()
    );

    let mut outcomes = Vec::new();
    let mut skipped = Vec::new();
    let mut index = 0usize;

    for descriptor in registry.participants() {
        match descriptor.hook {
            HookBinding::Absent => {
                debug!(
                    "  {} Skipping '{}': no before-test hook",
                    SYMBOL_CONTENT_SKIP, descriptor.name
                );
                skipped.push(descriptor.name.to_string());
            }
            HookBinding::Setup(hook) => {
                index += 1;
                outcomes.push(invoke_hook(descriptor.name, index, total_hooks, || {
                    panic::catch_unwind(hook)
                        .map_err(|payload| HookPanic::from_payload(payload).into())
                }));
            }
            HookBinding::TrySetup(hook) => {
                index += 1;
                outcomes.push(invoke_hook(descriptor.name, index, total_hooks, || {
                    panic::catch_unwind(hook)
                        .map_err(|payload| anyhow::Error::from(HookPanic::from_payload(payload)))
                        .and_then(|result| result)
                }));
            }
        }
    }

    let report = SetupPassReport::new(outcomes, skipped, pass_start.elapsed());

    if report.is_clean() {
        info!(
            "{} Before-test setup pass completed: {} hooks in {}ms",
            SYMBOL_INDICATOR_SUCCESS,
            report.succeeded(),
            report.total_time_ms
        );
    } else {
        warn!(
            "{} Before-test setup pass completed with {} failed of {} hooks ({}ms)",
            SYMBOL_INDICATOR_WARNING,
            report.failed(),
            report.outcomes.len(),
            report.total_time_ms
        );
    }

    report
}

fn invoke_hook(
    name: &str,
    index: usize,
    total: usize,
    run: impl FnOnce() -> Result<()>,
) -> HookOutcome {
    let start_time = Instant::now();

    info!(
        "  {} [{}/{}] Running setup hook: {name}",
        SYMBOL_ACTION_HOOK, index, total
    );

    match run() {
        Ok(()) => {
            let execution_time_ms = start_time.elapsed().as_millis() as u64;
            info!(
                "  {} [{}/{}] Setup hook completed: {name} ({}ms)",
                SYMBOL_INDICATOR_SUCCESS, index, total, execution_time_ms
            );

            HookOutcome {
                participant: name.to_string(),
                success: true,
                execution_time_ms,
                error: None,
            }
        }
        Err(e) => {
            let execution_time_ms = start_time.elapsed().as_millis() as u64;
            error!(
                "  {} [{}/{}] Setup hook failed: {name} ({}ms)",
                SYMBOL_INDICATOR_ERROR, index, total, execution_time_ms
            );
            error!("     Error: {e}");

            HookOutcome {
                participant: name.to_string(),
                success: false,
                execution_time_ms,
                error: Some(e.to_string()),
            }
        }
    }
}
