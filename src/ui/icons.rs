// SPDX-License-Identifier: MPL-2.0
//! Text glyph icons.
//!
//! Toasts use Unicode glyphs rather than bitmap assets, so they render at
//! any scale, inherit the severity accent color, and need no build-time
//! asset pipeline.
//!
//! # Naming Convention
//!
//! Glyphs use generic visual names describing the icon's appearance, not the
//! action context (e.g., `CROSS` not `dismiss`).

use crate::notifications::Severity;

pub const CHECK: &str = "✓";
pub const CROSS: &str = "✕";
pub const TRIANGLE_BANG: &str = "⚠";
pub const CIRCLE_I: &str = "ℹ";

/// Returns the default glyph for a severity level.
#[must_use]
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => CHECK,
        Severity::Error => CROSS,
        Severity::Warning => TRIANGLE_BANG,
        Severity::Info => CIRCLE_I,
    }
}
