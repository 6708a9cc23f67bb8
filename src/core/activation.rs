use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::core::participant::ParticipantRegistry;
use crate::core::pass::execute_pass;
use crate::core::report::SetupPassReport;

/// Two-state machine guarding the once-per-process setup pass.
///
/// Starts idle; the first `fire` wins the transition and every later call
/// is absorbed. The check-and-set is atomic so racing call sites still
/// resolve to exactly one winner.
#[derive(Debug)]
pub struct ActivationGuard {
    fired: AtomicBool,
}

impl ActivationGuard {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Attempts the idle-to-fired transition. Returns true exactly once.
    pub fn fire(&self) -> bool {
        self.fired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Default for ActivationGuard {
    fn default() -> Self {
        Self::new()
    }
}

static ACTIVATION: ActivationGuard = ActivationGuard::new();
static PASS_REPORT: OnceLock<SetupPassReport> = OnceLock::new();

/// Signals that the test process is starting.
///
/// The first call discovers every registered participant and runs their
/// setup hooks; any number of further calls are no-ops, so multiple test
/// targets linking the same participant set can all signal safely. Nothing
/// is ever surfaced to the caller: a broken hook shows up later as an
/// ordinary test failure, not as an error from here.
///
/// The report is stored before the activating call returns; a call site
/// that loses the activation race returns immediately and must not assume
/// the pass has finished.
pub fn activate() {
    if !ACTIVATION.fire() {
        debug!("Activation already handled, ignoring duplicate signal");
        return;
    }

    let registry = ParticipantRegistry::discover();
    let report = execute_pass(&registry);

    match report.to_json() {
        Ok(json) => debug!("Setup pass report: {json}"),
        Err(e) => warn!("Could not serialize setup pass report: {e}"),
    }

    let _ = PASS_REPORT.set(report);
}

/// Whether an activation signal has been handled in this process
pub fn has_activated() -> bool {
    ACTIVATION.has_fired()
}

/// Report recorded by the single setup pass, if one has run
pub fn activation_report() -> Option<&'static SetupPassReport> {
    PASS_REPORT.get()
}
