// SPDX-License-Identifier: MPL-2.0
//! `pilgrim_feed` is the session notification feed of a pilgrimage portal.
//!
//! It keeps an in-memory, newest-first log of crowd, traffic and emergency
//! alerts with read tracking, feeds it from a synthetic background
//! generator, and renders the header bell dropdown from it.

#![doc(html_root_url = "https://docs.rs/pilgrim_feed/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod feed;
pub mod ui;
