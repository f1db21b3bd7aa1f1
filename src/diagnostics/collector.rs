// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from the
//! notification system and stores them in a circular buffer, plus the cheap
//! cloneable handle used to send them.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel and
/// dropped under backpressure so senders never block.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event. Non-blocking.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event. Non-blocking.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }
}

/// An event as it appears in an exported report.
///
/// Monotonic timestamps become offsets from collector start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// An exported diagnostics report.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Wall-clock generation time, RFC 3339.
    pub generated_at: String,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

/// Central store of diagnostic events.
///
/// Call [`DiagnosticsCollector::drain`] periodically (the demo app does so on
/// its tick) to move events from the channel into the bounded buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a collector and the handle that feeds it.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);
        let collector = Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            started_at: Instant::now(),
        };
        (collector, DiagnosticsHandle { event_tx })
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Returns the number of events drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Returns the buffered events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Builds a serializable snapshot of the buffered events.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                elapsed_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();
        DiagnosticReport {
            generated_at: Utc::now().to_rfc3339(),
            event_count: events.len(),
            events,
        }
    }

    /// Writes the current report as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.report())?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
