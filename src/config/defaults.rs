// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: How many toasts may be on screen at once
//! - **Removal**: Delay between dismissal and purge from the queue
//! - **Tick**: Maintenance tick interval for deadline processing
//! - **Journal**: Bounds for the dispatch journal ring buffer

// ==========================================================================
// Visibility
// ==========================================================================

/// Maximum number of toasts visible at once.
///
/// One toast at a time: a newly shown toast immediately evicts whatever
/// was on screen. Not configurable.
pub const MAX_VISIBLE_TOASTS: usize = 1;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Default delay between dismissing a toast and purging it from the queue
/// (in milliseconds). The window exists so exit transitions can play out
/// on a record that is still present but closed.
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000;

/// Minimum removal delay (in milliseconds).
pub const MIN_REMOVE_DELAY_MS: u64 = 100;

/// Maximum removal delay (in milliseconds).
pub const MAX_REMOVE_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default maintenance tick interval (in milliseconds).
///
/// Auto-dismiss and removal deadlines are resolved at tick granularity,
/// so this bounds how late a deadline can fire.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 5_000;

// ==========================================================================
// Journal Defaults
// ==========================================================================

/// Default capacity of the dispatch journal ring buffer (in entries).
pub const DEFAULT_JOURNAL_CAPACITY: usize = 1_000;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = 10;

/// Maximum journal capacity.
pub const MAX_JOURNAL_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Visibility validation
    assert!(MAX_VISIBLE_TOASTS == 1);

    // Removal delay validation
    assert!(MIN_REMOVE_DELAY_MS > 0);
    assert!(MAX_REMOVE_DELAY_MS >= MIN_REMOVE_DELAY_MS);
    assert!(DEFAULT_REMOVE_DELAY_MS >= MIN_REMOVE_DELAY_MS);
    assert!(DEFAULT_REMOVE_DELAY_MS <= MAX_REMOVE_DELAY_MS);

    // Tick interval validation
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // Journal capacity validation
    assert!(MIN_JOURNAL_CAPACITY > 0);
    assert!(MAX_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY <= MAX_JOURNAL_CAPACITY);
};
