// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`action`] - Action buttons and the explicit handler registry
//! - [`manager`] - `Manager` for queuing, timing, and lifecycle management
//!
//! # Usage
//!
//! ```
//! use iced_toast::notifications::{Manager, Notification};
//! use std::time::Duration;
//!
//! // Constructed once by the application bootstrap
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! let id = manager.show(Notification::success("Changes saved"));
//!
//! // Drive timing from the event loop
//! manager.tick(Duration::from_millis(100));
//!
//! // Explicit dismissal is a silent no-op once the toast is gone
//! manager.dismiss(id);
//! ```
//!
//! # Design Considerations
//!
//! - Display duration: 5 s by default, 8 s for errors, manual for persistent
//! - Max live toasts: 5 (the oldest is evicted past that)
//! - Dismissed toasts linger ~400 ms for their exit animation
//! - Hovering the toast region pauses every countdown

pub mod action;
pub mod manager;
pub mod notification;

pub use action::{Action, ActionRegistry, Dispatch};
pub use manager::{Entry, Manager, Message, Stats};
pub use notification::{Notification, NotificationId, Severity};
