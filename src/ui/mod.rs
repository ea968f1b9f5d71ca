// SPDX-License-Identifier: MPL-2.0
//! Presentation models consumed by the portal's pages.
//!
//! Following the "state down, messages up" pattern, views here are plain
//! data built from feed snapshots, and user input flows back as messages.
//!
//! - [`notifications`] - Header bell badge and notification dropdown

pub mod notifications;
