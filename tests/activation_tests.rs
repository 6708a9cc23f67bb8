use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use preflight::{activate, activation_report, has_activated};
use preflight::{BeforeTestExecution, TryBeforeTestExecution};

static SEEDED: AtomicUsize = AtomicUsize::new(0);

struct CounterFixture;

impl BeforeTestExecution for CounterFixture {
    fn before_test_execution() {
        SEEDED.fetch_add(1, Ordering::SeqCst);
    }
}

preflight::register_hook!(CounterFixture, "counter_fixture");

// Enumerated by the pass but never invoked
preflight::register_participant!("bystander");

struct ExplodingFixture;

impl BeforeTestExecution for ExplodingFixture {
    fn before_test_execution() {
        panic!("exploding fixture is broken");
    }
}

preflight::register_hook!(ExplodingFixture, "exploding_fixture");

struct RefusingFixture;

impl TryBeforeTestExecution for RefusingFixture {
    fn try_before_test_execution() -> Result<()> {
        anyhow::bail!("refusing to seed")
    }
}

preflight::register_try_hook!(RefusingFixture, "refusing_fixture");

// Single test on purpose: the activation flag is process-wide, and a second
// test racing the first could observe the pass mid-flight.
#[test]
fn activation_runs_every_hook_exactly_once() -> Result<()> {
    assert!(!has_activated());
    assert!(activation_report().is_none());

    activate();
    activate();

    assert!(has_activated());
    assert_eq!(SEEDED.load(Ordering::SeqCst), 1);

    let report = activation_report().expect("report is stored once activation returns");

    let counter = report
        .outcome_for("counter_fixture")
        .expect("counter fixture was invoked");
    assert!(counter.success);
    assert!(counter.error.is_none());

    let exploding = report
        .outcome_for("exploding_fixture")
        .expect("exploding fixture was invoked");
    assert!(!exploding.success);
    assert!(exploding
        .error
        .as_deref()
        .is_some_and(|message| message.contains("exploding fixture is broken")));

    let refusing = report
        .outcome_for("refusing_fixture")
        .expect("refusing fixture was invoked");
    assert!(!refusing.success);
    assert_eq!(refusing.error.as_deref(), Some("refusing to seed"));

    assert!(report.skipped.contains(&"bystander".to_string()));
    assert!(report.outcome_for("bystander").is_none());

    // The built-in logging hook rides along in every pass
    assert!(report
        .outcome_for("test_logging")
        .is_some_and(|outcome| outcome.success));

    assert_eq!(report.failed(), 2);
    Ok(())
}
