//! Re-apply schedule for the hook override.
//!
//! The host's own proxy init runs asynchronously after geo-detection and
//! overwrites installed hooks, so the integration layer re-asserts the
//! override at fixed delays. The rewrite functions themselves stay pure and
//! unaware of timing; only this runner sleeps.

use std::time::Duration;

/// Offsets (from install time) at which the hook override is asserted.
/// The first entry fires immediately.
pub const REAPPLY_DELAYS: [Duration; 3] = [
    Duration::ZERO,
    Duration::from_millis(2000),
    Duration::from_millis(5000),
];

/// Extra assert delay after the host signals application-ready.
pub const READY_REAPPLY_DELAY: Duration = Duration::from_millis(500);

/// Runs `action` once per entry in `delays`. Entries are offsets from the
/// start of the schedule, so the runner sleeps only the gap between
/// consecutive entries. Offsets are expected in ascending order; an entry
/// not later than its predecessor fires immediately.
pub fn run_schedule<F>(delays: &[Duration], mut action: F)
where
    F: FnMut(),
{
    let mut elapsed = Duration::ZERO;
    for &at in delays {
        if at > elapsed {
            std::thread::sleep(at - elapsed);
            elapsed = at;
        }
        action();
    }
}
