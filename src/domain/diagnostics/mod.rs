// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: How many feed activity events the log retains

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
