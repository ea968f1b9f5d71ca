// SPDX-License-Identifier: MPL-2.0
//! Feed newtypes.
//!
//! This module provides type-safe wrappers for feed tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Tick Period Bounds
// =============================================================================

/// Generator tick period bounds in seconds (1 to 3600).
pub mod tick_period_bounds {
    /// Minimum tick period.
    pub const MIN: u64 = 1;
    /// Maximum tick period.
    pub const MAX: u64 = 3600;
    /// Default tick period.
    pub const DEFAULT: u64 = 30;
}

// =============================================================================
// TickPeriod
// =============================================================================

/// Interval between two synthetic generator ticks.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–3600 seconds).
///
/// # Example
///
/// ```
/// use pilgrim_feed::domain::feed::TickPeriod;
///
/// let period = TickPeriod::new(30);
/// assert_eq!(period.value(), 30);
///
/// // Values outside range are clamped
/// let too_low = TickPeriod::new(0);
/// assert_eq!(too_low.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPeriod(u64);

impl TickPeriod {
    /// Creates a new tick period, clamping to valid range.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(tick_period_bounds::MIN, tick_period_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        Self(tick_period_bounds::DEFAULT)
    }
}

// =============================================================================
// Probability
// =============================================================================

/// Chance that one generator tick produces an event (0.0–1.0).
///
/// `NaN` is treated as 0.0 so a broken settings file silences the
/// generator rather than flooding the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probability(f64);

impl Probability {
    /// Default per-tick probability.
    pub const DEFAULT: f64 = 0.3;

    /// A probability that never fires.
    pub const NEVER: Self = Self(0.0);

    /// A probability that fires on every tick.
    pub const ALWAYS: Self = Self(1.0);

    /// Creates a new probability, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEVER;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if a uniform sample in `[0, 1)` falls under this probability.
    #[must_use]
    pub fn admits(self, sample: f64) -> bool {
        sample < self.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// =============================================================================
// Dropdown Limit Bounds
// =============================================================================

/// Dropdown limit bounds (1 to 50 entries).
pub mod dropdown_limit_bounds {
    /// Minimum number of visible entries.
    pub const MIN: usize = 1;
    /// Maximum number of visible entries.
    pub const MAX: usize = 50;
    /// Default number of visible entries.
    pub const DEFAULT: usize = 10;
}

// =============================================================================
// DropdownLimit
// =============================================================================

/// Number of notifications listed in the header dropdown before the
/// "+N more" overflow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownLimit(usize);

impl DropdownLimit {
    /// Creates a new dropdown limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(dropdown_limit_bounds::MIN, dropdown_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for DropdownLimit {
    fn default() -> Self {
        Self(dropdown_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_period_clamps() {
        assert_eq!(TickPeriod::new(0).value(), tick_period_bounds::MIN);
        assert_eq!(TickPeriod::new(100_000).value(), tick_period_bounds::MAX);
    }

    #[test]
    fn tick_period_default_is_thirty_seconds() {
        assert_eq!(TickPeriod::default().as_duration(), Duration::from_secs(30));
    }

    #[test]
    fn probability_clamps_and_rejects_nan() {
        assert_eq!(Probability::new(-0.5).value(), 0.0);
        assert_eq!(Probability::new(1.5).value(), 1.0);
        assert_eq!(Probability::new(f64::NAN), Probability::NEVER);
        assert_eq!(Probability::default().value(), 0.3);
    }

    #[test]
    fn probability_extremes_are_deterministic() {
        for sample in [0.0, 0.29, 0.5, 0.999_999] {
            assert!(Probability::ALWAYS.admits(sample));
            assert!(!Probability::NEVER.admits(sample));
        }
    }

    #[test]
    fn probability_admits_below_threshold_only() {
        let p = Probability::new(0.3);
        assert!(p.admits(0.29));
        assert!(!p.admits(0.3));
        assert!(!p.admits(0.9));
    }

    #[test]
    fn dropdown_limit_clamps() {
        assert_eq!(DropdownLimit::new(0).value(), dropdown_limit_bounds::MIN);
        assert_eq!(DropdownLimit::new(500).value(), dropdown_limit_bounds::MAX);
        assert_eq!(DropdownLimit::default().value(), 10);
    }
}
