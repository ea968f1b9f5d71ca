// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Bounds for clamped values are owned by the
//! domain newtypes and re-exported here.
//!
//! # Categories
//!
//! - **Generator**: Synthetic notification tick period and probability
//! - **Display**: Header dropdown size
//! - **Diagnostics**: Activity log capacity

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::feed::{dropdown_limit_bounds, tick_period_bounds, Probability};

// ==========================================================================
// Generator Defaults
// ==========================================================================

/// Whether the synthetic notification generator runs by default.
pub const DEFAULT_GENERATOR_ENABLED: bool = true;

/// Default interval between generator ticks (in seconds).
pub const DEFAULT_TICK_PERIOD_SECS: u64 = tick_period_bounds::DEFAULT;

/// Minimum generator tick period (in seconds).
pub const MIN_TICK_PERIOD_SECS: u64 = tick_period_bounds::MIN;

/// Maximum generator tick period (in seconds).
pub const MAX_TICK_PERIOD_SECS: u64 = tick_period_bounds::MAX;

/// Default chance that a tick adds a notification.
pub const DEFAULT_TICK_PROBABILITY: f64 = Probability::DEFAULT;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default number of notifications listed in the header dropdown.
pub const DEFAULT_DROPDOWN_LIMIT: usize = dropdown_limit_bounds::DEFAULT;

/// Minimum dropdown size.
pub const MIN_DROPDOWN_LIMIT: usize = dropdown_limit_bounds::MIN;

/// Maximum dropdown size.
pub const MAX_DROPDOWN_LIMIT: usize = dropdown_limit_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum activity log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum activity log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TICK_PERIOD_SECS > 0);
    assert!(MAX_TICK_PERIOD_SECS >= MIN_TICK_PERIOD_SECS);
    assert!(DEFAULT_TICK_PERIOD_SECS >= MIN_TICK_PERIOD_SECS);
    assert!(DEFAULT_TICK_PERIOD_SECS <= MAX_TICK_PERIOD_SECS);

    assert!(DEFAULT_TICK_PROBABILITY >= 0.0);
    assert!(DEFAULT_TICK_PROBABILITY <= 1.0);

    assert!(MIN_DROPDOWN_LIMIT > 0);
    assert!(DEFAULT_DROPDOWN_LIMIT >= MIN_DROPDOWN_LIMIT);
    assert!(DEFAULT_DROPDOWN_LIMIT <= MAX_DROPDOWN_LIMIT);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
