//! Markup warnings, reported once per unique message.
//!
//! Provides deduplication to avoid spamming the same warning for every
//! fragment a renderer builds. Warnings are emitted as `tracing` events at
//! `WARN` level; installing a subscriber is up to the application.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a lossy or unsupported construct (emits once per unique message)
///
/// # Example
/// ```
/// use woodstock_common::warning::warn_once;
///
/// warn_once("URI", "character U+4E2D truncated to its low byte");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        tracing::warn!(component, "{message}");
    }
}

/// Clear all recorded warnings so they can be reported again
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
