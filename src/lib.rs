// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification system for Iced applications.
//!
//! It provides a render-agnostic notification manager (queueing, eviction,
//! auto-dismiss timers, pause-on-hover, action dispatch), an Iced widget
//! adapter that renders toasts, localized default titles via Fluent, and
//! persisted user configuration.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod ui;
