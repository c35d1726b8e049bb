//! Process-wide constructor hook.
//!
//! Bridges the extra-depth wrapping entry point in `causetrace-report`
//! to this crate's constructor without a dependency cycle: this module
//! owns a function-valued slot, [`crate::init`] fills it exactly once
//! at program start, and the report crate only ever calls through it.
//!
//! Not intended for direct use outside the two causetrace crates.

use crate::{Cause, Error};
use once_cell::sync::OnceCell;

/// Constructor signature stored in the hook slot.
pub type NewErrorFn = fn(String, Option<Cause>) -> Error;

static NEW_ERROR: OnceCell<NewErrorFn> = OnceCell::new();

/// Install the hook. The first installation wins; later calls are
/// no-ops, which keeps repeated initialization harmless.
pub fn install(f: NewErrorFn) {
    NEW_ERROR.get_or_init(|| f);
}

/// Fetch the installed constructor.
///
/// Callers invoke the returned function themselves so the call through
/// this module adds no stack frame of its own; the installed
/// constructor's skip depth already accounts for exactly one bridging
/// call.
///
/// # Panics
///
/// Panics when no hook has been installed. That is a contract
/// violation in the host program (initialization was skipped), not a
/// recoverable condition.
pub fn constructor() -> NewErrorFn {
    *NEW_ERROR
        .get()
        .expect("constructor hook not installed; call causetrace_error::init() at startup")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_round_trip() {
        crate::init();
        crate::init(); // repeated init keeps the first installation
        let cause = Error::new("a");
        let err = constructor()("b".to_string(), Some(cause.into()));
        assert_eq!(err.to_string(), "b: a");
    }

    #[test]
    fn test_hook_constructor_captures_a_frame() {
        crate::init();
        let err = constructor()("x".to_string(), None);
        // The test stack is deeper than the extra skip, so the hook
        // entry still records frames.
        assert!(!err.frame().is_empty());
    }
}
