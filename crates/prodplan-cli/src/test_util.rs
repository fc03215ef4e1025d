//! Helpers shared by unit tests in this crate.

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or mutate process environment variables.
///
/// A test that panicked while holding the lock poisons it; the guard is
/// recovered so later tests still run.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Point `XDG_CONFIG_HOME` at a fresh temp dir and clear the plan env vars.
///
/// Call with the [`lock_env`] guard held. The returned dir must outlive the
/// test body.
pub fn isolated_env() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };
    unsafe { std::env::remove_var(crate::config::MONTHS_ENV) };
    unsafe { std::env::remove_var(crate::config::PERCENT_ENV) };
    tmp
}
