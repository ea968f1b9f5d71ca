// SPDX-License-Identifier: MPL-2.0
//! Feed domain types.
//!
//! This module provides pure domain types for the notification feed:
//! - [`TickPeriod`]: Interval between synthetic generator ticks
//! - [`Probability`]: Per-tick chance of generating an event
//! - [`DropdownLimit`]: Number of events shown in the header dropdown

mod newtypes;

pub use newtypes::{
    dropdown_limit_bounds, tick_period_bounds, DropdownLimit, Probability, TickPeriod,
};
