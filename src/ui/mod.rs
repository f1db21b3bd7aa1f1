// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module holds everything that turns manager state into pixels,
//! following the Elm-style "state down, messages up" pattern:
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Text glyph icons (visual primitives)
//! - [`toast`] - Toast card and overlay views

pub mod design_tokens;
pub mod icons;
pub mod toast;

pub use toast::Toast;
