// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their bounds. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`feed`]: Feed tuning types ([`TickPeriod`](feed::TickPeriod),
//!   [`Probability`](feed::Probability), [`DropdownLimit`](feed::DropdownLimit))

pub mod diagnostics;
pub mod feed;
