//! Diagnostic warnings with colored terminal output.
//!
//! Each unique `(component, message)` pair is printed once per process, so a
//! bad selector evaluated in a loop does not flood stderr. Warnings never
//! influence results; they only report input that was ignored.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set inconsistent.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about ignored input (prints once per unique message).
///
/// # Example
/// ```
/// use sprig_common::warning::warn_once;
///
/// warn_once("Select", "ignoring invalid selector: UnexpectedChar");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Sprig {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already reported this exact message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings, so every message will print again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the set is process-wide and tests run in parallel.
    #[test]
    fn records_once_until_cleared() {
        warn_once("Test", "records-once");
        warn_once("Test", "records-once");
        assert!(was_warned("Test", "records-once"));
        assert!(!was_warned("Other", "records-once"));

        clear_warnings();
        assert!(!was_warned("Test", "records-once"));
    }
}
