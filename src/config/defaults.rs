// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: How many toasts may be live at once
//! - **Timing**: Auto-dismiss and exit-phase durations, tick cadence
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of live notifications.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Minimum allowed maximum (at least one toast must fit).
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum allowed maximum.
pub const MAX_MAX_VISIBLE: usize = 20;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Auto-dismiss duration for error notifications (in milliseconds).
/// Errors stay on screen longer so the user has time to read them.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 8_000;

/// Minimum auto-dismiss duration (in milliseconds).
pub const MIN_DURATION_MS: u64 = 1_000;

/// Maximum auto-dismiss duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = 60_000;

/// Default exit-phase delay before a dismissed toast is removed
/// (in milliseconds).
pub const DEFAULT_EXIT_DELAY_MS: u64 = 400;

/// Maximum exit-phase delay (in milliseconds).
pub const MAX_EXIT_DELAY_MS: u64 = 2_000;

/// Cadence at which the application ticks the notification manager
/// (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics event buffer capacity.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1_000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Capacity of the bounded channel between diagnostics handles and the
/// collector. Events past this are dropped rather than blocking the UI.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;
