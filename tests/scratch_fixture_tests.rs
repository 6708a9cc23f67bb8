use std::fs;
use std::sync::OnceLock;

use anyhow::Result;
use preflight::{activate, BeforeTestExecution};
use tempfile::TempDir;

static SCRATCH: OnceLock<TempDir> = OnceLock::new();

/// Seeds a scratch directory every test in this target can lean on
struct ScratchSpace;

impl BeforeTestExecution for ScratchSpace {
    fn before_test_execution() {
        if let Ok(dir) = TempDir::new() {
            let _ = SCRATCH.set(dir);
        }
    }
}

preflight::register_hook!(ScratchSpace, "scratch_space");

#[test]
fn scratch_space_is_seeded_before_tests() -> Result<()> {
    activate();

    let dir = SCRATCH.get().expect("scratch dir seeded during activation");
    assert!(dir.path().is_dir());

    let probe = dir.path().join("probe.txt");
    fs::write(&probe, "ready")?;
    assert_eq!(fs::read_to_string(&probe)?, "ready");
    Ok(())
}
