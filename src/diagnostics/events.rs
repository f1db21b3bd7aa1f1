// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the notification system.
//!
//! Events are recorded whenever the notification manager swallows a failure
//! (per its no-crash contract) or surfaces a warning/error-severity toast,
//! so that "silently handled" never means "unobservable".

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Categories of warnings the notification system can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// An action referenced a handler name with no registry entry.
    UnregisteredAction,
    /// A configuration issue was detected and defaults were used.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors the notification system can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A registered action handler returned an error.
    ActionFailed,
    /// Diagnostics export failed.
    ExportError,
    /// Other error type not covered by specific categories.
    Other,
}

/// A warning with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Non-critical issue; the operation continued.
    Warning { event: WarningEvent },

    /// Failure that was caught and swallowed.
    Error { event: ErrorEvent },
}

/// A diagnostic event with timestamp.
///
/// The timestamp is monotonic; exported reports convert it to an offset
/// from the collector's start.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
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
