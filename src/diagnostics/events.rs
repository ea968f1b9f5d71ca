// SPDX-License-Identifier: MPL-2.0
//! Feed activity event types.
//!
//! This module defines what the diagnostics log records about a feed
//! session: lifecycle changes, additions, read-state changes, generator
//! ticks and errors.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::feed::{Category, NotificationId, Priority};

/// Who created a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddSource {
    /// A host surface called `add`.
    Host,
    /// The synthetic generator fired.
    Generator,
}

/// A single diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for offsets)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The session was seeded and went live.
    SessionInitialized {
        seeded: usize,
        generator_enabled: bool,
    },

    /// A notification was added at the head of the feed.
    NotificationAdded {
        id: NotificationId,
        category: Category,
        priority: Priority,
        source: AddSource,
    },

    /// `mark_as_read` was called. `found` is false for stale ids.
    ///
    /// `id` is kept as the host passed it, so ids that never parsed are
    /// recorded too.
    MarkedRead { id: String, found: bool },

    /// `mark_all_as_read` was called.
    MarkedAllRead { changed: usize },

    /// One generator tick ran.
    GeneratorTick { fired: bool },

    /// The session was torn down.
    SessionTornDown,

    /// An operation failed.
    Error { message: String },
}

impl DiagnosticEventKind {
    /// Short stable name used for per-kind counts in reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticEventKind::SessionInitialized { .. } => "session_initialized",
            DiagnosticEventKind::NotificationAdded { .. } => "notification_added",
            DiagnosticEventKind::MarkedRead { .. } => "marked_read",
            DiagnosticEventKind::MarkedAllRead { .. } => "marked_all_read",
            DiagnosticEventKind::GeneratorTick { .. } => "generator_tick",
            DiagnosticEventKind::SessionTornDown => "session_torn_down",
            DiagnosticEventKind::Error { .. } => "error",
        }
    }
}
