// SPDX-License-Identifier: MPL-2.0
//! Activity report generation and JSON export.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

// =============================================================================
// Report Metadata
// =============================================================================

/// Metadata about an activity report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    /// Version of `pilgrim_feed` that generated the report
    pub pilgrim_feed_version: String,
    /// When collection started (ISO 8601)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            pilgrim_feed_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Per-kind event counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub counts: BTreeMap<String, usize>,
    /// Notifications added by the generator.
    pub generated: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            *summary
                .counts
                .entry(event.kind.name().to_string())
                .or_insert(0) += 1;
            if let DiagnosticEventKind::NotificationAdded {
                source: super::AddSource::Generator,
                ..
            } = event.kind
            {
                summary.generated += 1;
            }
        }
        summary
    }
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::AddSource;
    use crate::feed::{Category, NotificationId, Priority};
    use std::time::Duration;

    fn added(source: AddSource) -> DiagnosticEventKind {
        DiagnosticEventKind::NotificationAdded {
            id: NotificationId::new(9),
            category: Category::Queue,
            priority: Priority::Medium,
            source,
        }
    }

    #[test]
    fn serializable_event_flattens_kind() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(1500),
            start,
            DiagnosticEventKind::GeneratorTick { fired: true },
        );
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["offset_ms"], 1500);
        assert_eq!(json["type"], "generator_tick");
        assert_eq!(json["fired"], true);
    }

    #[test]
    fn event_before_start_has_zero_offset() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(Instant::now(), start, DiagnosticEventKind::SessionTornDown);
        assert_eq!(event.offset_ms, 0);
    }

    #[test]
    fn summary_counts_kinds_and_generated_additions() {
        let start = Instant::now();
        let events: Vec<_> = [
            added(AddSource::Host),
            added(AddSource::Generator),
            added(AddSource::Generator),
            DiagnosticEventKind::GeneratorTick { fired: false },
        ]
        .into_iter()
        .map(|kind| SerializableEvent::new(start, start, kind))
        .collect();

        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.counts["notification_added"], 3);
        assert_eq!(summary.counts["generator_tick"], 1);
        assert_eq!(summary.generated, 2);
    }

    #[test]
    fn metadata_records_version_and_count() {
        let metadata = ReportMetadata::new(Utc::now(), 42, 7);
        assert_eq!(metadata.pilgrim_feed_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.event_count, 7);
        assert_eq!(metadata.collection_duration_ms, 42);
    }
}
