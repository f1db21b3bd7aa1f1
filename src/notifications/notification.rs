// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum used
//! throughout the notification system.

use std::time::Duration;

use super::action::Action;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// IDs are monotonically increasing for the lifetime of the process, so
    /// a lower id always means an earlier `show`.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines default title, icon, and display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Something failed; shown longer than the other levels.
    Error,
    /// Something needs attention but the operation continued.
    Warning,
    /// Neutral informational message.
    #[default]
    Info,
}

impl Severity {
    /// Returns the i18n key of the default title for this severity.
    ///
    /// Resolved at render time, so a locale switch retitles toasts that are
    /// already on screen.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Success => "notification-title-success",
            Severity::Error => "notification-title-error",
            Severity::Warning => "notification-title-warning",
            Severity::Info => "notification-title-info",
        }
    }
}

/// A notification to be displayed to the user.
///
/// Built with the constructor matching its severity plus chained options:
///
/// ```
/// use iced_toast::notifications::Notification;
/// use std::time::Duration;
///
/// let toast = Notification::error("Upload failed")
///     .with_title("Upload")
///     .with_duration(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    title: Option<String>,
    duration: Option<Duration>,
    persistent: bool,
    actions: Vec<Action>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    ///
    /// The message is literal display text; callers format it before showing
    /// (the manager performs no interpolation on it).
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            title: None,
            duration: None,
            persistent: false,
            actions: Vec::new(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets an explicit title, overriding the severity's localized default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    ///
    /// Ignored when the notification is persistent.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Marks the notification as persistent: it is never auto-dismissed and
    /// stays until closed explicitly (or evicted by newer toasts).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Appends an action button.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the explicit title, if one was set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the custom duration, if one was set.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique_and_increasing() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
        assert!(n1.id().value() < n2.id().value());
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::error("").severity(), Severity::Error);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::info("").severity(), Severity::Info);
    }

    #[test]
    fn title_keys_are_distinct() {
        let keys = [
            Severity::Success.title_key(),
            Severity::Error.title_key(),
            Severity::Warning.title_key(),
            Severity::Info.title_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn builder_options_accumulate() {
        let notification = Notification::warning("low disk space")
            .with_title("Storage")
            .with_duration(Duration::from_secs(10))
            .with_action(Action::new("open-settings", "Open settings"));

        assert_eq!(notification.title(), Some("Storage"));
        assert_eq!(notification.duration(), Some(Duration::from_secs(10)));
        assert_eq!(notification.actions().len(), 1);
        assert!(!notification.is_persistent());
    }

    #[test]
    fn default_notification_has_no_overrides() {
        let notification = Notification::info("plain");
        assert_eq!(notification.title(), None);
        assert_eq!(notification.duration(), None);
        assert!(notification.actions().is_empty());
        assert!(!notification.is_persistent());
    }
}
