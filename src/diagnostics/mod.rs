// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording feed session activity.
//!
//! Activity (initialization, additions, read-state changes, generator ticks,
//! teardown, errors) is captured into a memory-bounded circular buffer and
//! can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender used by the feed
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained by the host
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEventKind`]: What happened

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AddSource, DiagnosticEvent, DiagnosticEventKind};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
