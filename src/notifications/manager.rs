// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It caps the number of live toasts, drives auto-dismiss
//! countdowns and exit phases from a cooperative tick, and dispatches action
//! buttons through the [`ActionRegistry`].
//!
//! The manager never reads the wall clock: all timing flows in through
//! [`Manager::tick`], so every behavior is deterministic under test.
//!
//! One manager is constructed by the application bootstrap and owned by the
//! app state; callers reach it through their app, not through a global.

use std::collections::VecDeque;
use std::time::Duration;

use serde_json::Value;

use super::action::{ActionRegistry, Dispatch};
use super::notification::{Notification, NotificationId, Severity};
use crate::config::NotificationsConfig;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::error::Result;

/// Messages for notification state changes, for Elm-style wiring.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss every live notification, persistent ones included.
    DismissAll,
    /// Run a notification action: dismiss it, then dispatch its handler.
    RunAction {
        id: NotificationId,
        handler: String,
        params: Value,
    },
    /// Pointer entered the toast region; countdowns freeze.
    HoverEntered,
    /// Pointer left the toast region; countdowns resume.
    HoverExited,
    /// Time advanced by the given delta.
    Tick(Duration),
}

/// Lifecycle phase of a live notification.
#[derive(Debug, Clone)]
enum Phase {
    /// On screen; `remaining` counts down toward auto-dismiss
    /// (`None` for persistent notifications).
    Displayed {
        remaining: Option<Duration>,
        total: Option<Duration>,
    },
    /// Dismissed; lingers for the exit animation, then is removed.
    Dismissing { remaining: Duration },
}

/// A notification being tracked by the manager, with its timing state.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    phase: Phase,
}

impl Entry {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Fraction of the auto-dismiss countdown still left, in `0.0..=1.0`.
    ///
    /// `None` for persistent notifications and for entries in their exit
    /// phase (the countdown indicator disappears once dismissal begins).
    #[must_use]
    pub fn remaining_fraction(&self) -> Option<f32> {
        match &self.phase {
            Phase::Displayed {
                remaining: Some(remaining),
                total: Some(total),
            } if !total.is_zero() => Some(remaining.as_secs_f32() / total.as_secs_f32()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        matches!(self.phase, Phase::Dismissing { .. })
    }

    fn exit_elapsed(&self) -> bool {
        matches!(self.phase, Phase::Dismissing { remaining } if remaining.is_zero())
    }
}

/// Live counts per severity, plus the persistent total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub success: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub persistent: usize,
}

/// Manages the live notification collection.
#[derive(Debug)]
pub struct Manager {
    /// Live notifications in display order (oldest first).
    entries: VecDeque<Entry>,
    max_visible: usize,
    default_duration: Duration,
    error_duration: Duration,
    exit_delay: Duration,
    paused: bool,
    registry: ActionRegistry,
    /// Optional diagnostics handle for recording swallowed failures.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_config(&NotificationsConfig::default())
    }
}

impl Manager {
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager from a configuration section, clamping each value
    /// to its allowed range.
    #[must_use]
    pub fn with_config(config: &NotificationsConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            max_visible: config.clamped_max_visible(),
            default_duration: config.clamped_default_duration(),
            error_duration: config.clamped_error_duration(),
            exit_delay: config.clamped_exit_delay(),
            paused: false,
            registry: ActionRegistry::new(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used to record swallowed failures.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Registers an action handler under `name`.
    pub fn register_action(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Value) -> Result<()> + 'static,
    ) {
        self.registry.register(name, handler);
    }

    /// Removes the action handler registered under `name`.
    pub fn unregister_action(&mut self, name: &str) -> bool {
        self.registry.unregister(name)
    }

    /// Shows a notification and returns its id.
    ///
    /// If the collection is at capacity the oldest entry is evicted first:
    /// an immediate forced removal that bypasses the exit phase, so the
    /// capacity invariant holds at the moment of insertion.
    ///
    /// Warning and error toasts are also recorded to diagnostics.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(WarningEvent::new(
                    WarningType::Other,
                    notification.message(),
                )),
                Severity::Error => handle.log_error(ErrorEvent::new(
                    ErrorType::Other,
                    notification.message(),
                )),
                Severity::Success | Severity::Info => {}
            }
        }

        while self.entries.len() >= self.max_visible {
            self.entries.pop_front();
        }

        let id = notification.id();
        let total = self.resolve_duration(&notification);
        self.entries.push_back(Entry {
            notification,
            phase: Phase::Displayed {
                remaining: total,
                total,
            },
        });
        id
    }

    /// Dismisses a notification by its ID, beginning its exit phase.
    ///
    /// Returns `true` if the notification was displayed and is now exiting
    /// (or, with a zero exit delay, already removed). Unknown ids and
    /// already-exiting entries are a silent no-op returning `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self
            .entries
            .iter()
            .position(|entry| entry.notification.id() == id && !entry.is_dismissing())
        else {
            return false;
        };

        if self.exit_delay.is_zero() {
            self.entries.remove(pos);
        } else {
            self.entries[pos].phase = Phase::Dismissing {
                remaining: self.exit_delay,
            };
        }
        true
    }

    /// Dismisses every live notification.
    ///
    /// Explicit dismissal overrides persistence: persistent notifications
    /// are removed like any other.
    pub fn dismiss_all(&mut self) {
        let ids: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|entry| !entry.is_dismissing())
            .map(|entry| entry.notification.id())
            .collect();
        for id in ids {
            self.dismiss(id);
        }
    }

    /// Freezes all auto-dismiss countdowns (pointer hover).
    pub fn pause_auto_dismiss(&mut self) {
        self.paused = true;
    }

    /// Unfreezes auto-dismiss countdowns.
    pub fn resume_auto_dismiss(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances all timing state by `delta`.
    ///
    /// Exit phases always progress; auto-dismiss countdowns freeze while
    /// paused (the original hover contract: pausing extends display time but
    /// never resurrects an already-dismissed toast).
    pub fn tick(&mut self, delta: Duration) {
        for entry in &mut self.entries {
            if let Phase::Dismissing { remaining } = &mut entry.phase {
                *remaining = remaining.saturating_sub(delta);
            }
        }
        self.entries.retain(|entry| !entry.exit_elapsed());

        if self.paused {
            return;
        }

        let mut expired: Vec<NotificationId> = Vec::new();
        for entry in &mut self.entries {
            if let Phase::Displayed {
                remaining: Some(remaining),
                ..
            } = &mut entry.phase
            {
                *remaining = remaining.saturating_sub(delta);
                if remaining.is_zero() {
                    expired.push(entry.notification.id());
                }
            }
        }
        for id in expired {
            self.dismiss(id);
        }
    }

    /// Runs a notification action: the notification is dismissed first, then
    /// the handler is dispatched through the registry.
    ///
    /// An unregistered handler name and a failing handler are both recorded
    /// to diagnostics and swallowed; neither leaves the toast on screen.
    pub fn run_action(&mut self, id: NotificationId, handler: &str, params: &Value) {
        self.dismiss(id);

        match self.registry.dispatch(handler, params) {
            Dispatch::Completed => {}
            Dispatch::NotRegistered => {
                if let Some(diag) = &self.diagnostics {
                    diag.log_warning(WarningEvent::new(
                        WarningType::UnregisteredAction,
                        format!("no action handler registered under '{handler}'"),
                    ));
                }
            }
            Dispatch::Failed(err) => {
                if let Some(diag) = &self.diagnostics {
                    diag.log_error(ErrorEvent::new(
                        ErrorType::ActionFailed,
                        format!("action '{handler}' failed: {err}"),
                    ));
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => self.dismiss_all(),
            Message::RunAction {
                id,
                handler,
                params,
            } => self.run_action(*id, handler, params),
            Message::HoverEntered => self.pause_auto_dismiss(),
            Message::HoverExited => self.resume_auto_dismiss(),
            Message::Tick(delta) => self.tick(*delta),
        }
    }

    /// Returns the live entries in display order (oldest first).
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.notification.id() == id)
    }

    /// Returns live counts per severity.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        for entry in &self.entries {
            stats.total += 1;
            match entry.notification.severity() {
                Severity::Success => stats.success += 1,
                Severity::Error => stats.error += 1,
                Severity::Warning => stats.warning += 1,
                Severity::Info => stats.info += 1,
            }
            if entry.notification.is_persistent() {
                stats.persistent += 1;
            }
        }
        stats
    }

    /// Changes the capacity, clamped to the allowed range. Overflow is
    /// evicted immediately, oldest first.
    pub fn set_max_visible(&mut self, max: usize) {
        self.max_visible = max.clamp(
            crate::config::MIN_MAX_VISIBLE,
            crate::config::MAX_MAX_VISIBLE,
        );
        while self.entries.len() > self.max_visible {
            self.entries.pop_front();
        }
    }

    /// Changes the default auto-dismiss duration for subsequent shows,
    /// clamped to the allowed range.
    pub fn set_default_duration(&mut self, duration: Duration) {
        let ms = (duration.as_millis() as u64).clamp(
            crate::config::MIN_DURATION_MS,
            crate::config::MAX_DURATION_MS,
        );
        self.default_duration = Duration::from_millis(ms);
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    fn resolve_duration(&self, notification: &Notification) -> Option<Duration> {
        if notification.is_persistent() {
            return None;
        }
        Some(notification.duration().unwrap_or(match notification.severity() {
            Severity::Error => self.error_duration,
            _ => self.default_duration,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DURATION_MS, DEFAULT_ERROR_DURATION_MS, DEFAULT_EXIT_DELAY_MS};
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use crate::error::Error;
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::rc::Rc;

    const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_DURATION_MS);
    const ERROR_DURATION: Duration = Duration::from_millis(DEFAULT_ERROR_DURATION_MS);
    const EXIT_DELAY: Duration = Duration::from_millis(DEFAULT_EXIT_DELAY_MS);

    fn messages(manager: &Manager) -> Vec<String> {
        manager
            .visible()
            .map(|entry| entry.notification().message().to_string())
            .collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(!manager.is_paused());
    }

    #[test]
    fn show_preserves_display_order() {
        let mut manager = Manager::new();
        manager.show(Notification::success("first"));
        manager.show(Notification::info("second"));

        assert_eq!(messages(&manager), vec!["first", "second"]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut manager = Manager::new();
        for i in 1..=6 {
            manager.show(Notification::info(format!("toast-{i}")));
        }

        assert_eq!(manager.len(), 5);
        assert_eq!(
            messages(&manager),
            vec!["toast-2", "toast-3", "toast-4", "toast-5", "toast-6"]
        );
    }

    #[test]
    fn eviction_is_immediate_even_when_paused() {
        let mut manager = Manager::new();
        manager.pause_auto_dismiss();
        for i in 1..=6 {
            manager.show(Notification::info(format!("toast-{i}")));
        }

        // No exit phase for the evicted entry: it is gone outright.
        assert_eq!(manager.len(), 5);
        assert!(manager.visible().all(|entry| !entry.is_dismissing()));
    }

    #[test]
    fn dismiss_begins_exit_phase_then_removes() {
        let mut manager = Manager::new();
        let id = manager.show(Notification::success("bye"));

        assert!(manager.dismiss(id));
        assert_eq!(manager.len(), 1);
        assert!(manager.visible().next().unwrap().is_dismissing());

        manager.tick(EXIT_DELAY);
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_unknown_id_is_silent_noop() {
        let mut manager = Manager::new();
        manager.show(Notification::info("stays"));
        let unknown = Notification::info("never shown").id();

        assert!(!manager.dismiss(unknown));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn dismiss_twice_is_noop_the_second_time() {
        let mut manager = Manager::new();
        let id = manager.show(Notification::info("once"));

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn auto_dismiss_fires_after_default_duration() {
        let mut manager = Manager::new();
        manager.show(Notification::success("done"));

        manager.tick(DEFAULT_DURATION - Duration::from_millis(1));
        assert!(!manager.visible().next().unwrap().is_dismissing());

        manager.tick(Duration::from_millis(1));
        assert!(manager.visible().next().unwrap().is_dismissing());

        manager.tick(EXIT_DELAY);
        assert!(manager.is_empty());
    }

    #[test]
    fn errors_stay_longer_than_other_severities() {
        let mut manager = Manager::new();
        manager.show(Notification::error("failed"));

        manager.tick(DEFAULT_DURATION);
        assert!(!manager.visible().next().unwrap().is_dismissing());

        manager.tick(ERROR_DURATION - DEFAULT_DURATION);
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn custom_duration_overrides_severity_default() {
        let mut manager = Manager::new();
        manager.show(Notification::info("quick").with_duration(Duration::from_secs(1)));

        manager.tick(Duration::from_secs(1));
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn persistent_survives_arbitrary_ticking() {
        let mut manager = Manager::new();
        let id = manager.show(Notification::error("sticky").persistent());

        for _ in 0..100 {
            manager.tick(Duration::from_secs(60));
        }
        assert!(manager.contains(id));

        assert!(manager.dismiss(id));
        manager.tick(EXIT_DELAY);
        assert!(!manager.contains(id));
    }

    #[test]
    fn dismiss_all_overrides_persistence() {
        let mut manager = Manager::new();
        manager.show(Notification::error("oops").persistent());
        manager.show(Notification::info("fyi"));

        manager.dismiss_all();
        assert!(manager.visible().all(Entry::is_dismissing));

        manager.tick(EXIT_DELAY);
        assert!(manager.is_empty());
    }

    #[test]
    fn pause_freezes_countdowns() {
        let mut manager = Manager::new();
        manager.show(Notification::success("hovered"));

        manager.tick(DEFAULT_DURATION / 2);
        manager.pause_auto_dismiss();
        manager.tick(DEFAULT_DURATION * 10);
        assert!(!manager.visible().next().unwrap().is_dismissing());

        manager.resume_auto_dismiss();
        manager.tick(DEFAULT_DURATION / 2);
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn pause_does_not_freeze_exit_phase() {
        let mut manager = Manager::new();
        let id = manager.show(Notification::success("leaving"));
        manager.dismiss(id);

        manager.pause_auto_dismiss();
        manager.tick(EXIT_DELAY);
        assert!(manager.is_empty());
    }

    #[test]
    fn remaining_fraction_tracks_countdown() {
        use approx::assert_relative_eq;

        let mut manager = Manager::new();
        manager.show(Notification::info("half"));

        manager.tick(DEFAULT_DURATION / 2);
        let fraction = manager
            .visible()
            .next()
            .unwrap()
            .remaining_fraction()
            .expect("non-persistent entries have a fraction");
        assert_relative_eq!(fraction, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn persistent_entries_have_no_remaining_fraction() {
        let mut manager = Manager::new();
        manager.show(Notification::info("sticky").persistent());
        assert!(manager.visible().next().unwrap().remaining_fraction().is_none());
    }

    #[test]
    fn run_action_dismisses_and_invokes_handler() {
        let ran = Rc::new(Cell::new(false));
        let ran_clone = Rc::clone(&ran);

        let mut manager = Manager::new();
        manager.register_action("undo-delete", move |params| {
            assert_eq!(params["item_id"], 3);
            ran_clone.set(true);
            Ok(())
        });

        let id = manager.show(Notification::info("deleted"));
        manager.run_action(id, "undo-delete", &json!({ "item_id": 3 }));

        assert!(ran.get());
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn run_action_with_unregistered_handler_logs_warning() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(10));
        let mut manager = Manager::new();
        manager.set_diagnostics(handle);

        let id = manager.show(Notification::info("typo"));
        manager.run_action(id, "no-such-handler", &Value::Null);

        collector.drain();
        let warned = collector.events().any(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::Warning { event }
                    if event.warning_type == crate::diagnostics::WarningType::UnregisteredAction
            )
        });
        assert!(warned);
        // Still dismissed despite the missing handler.
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn run_action_handler_failure_is_logged_and_swallowed() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(10));
        let mut manager = Manager::new();
        manager.set_diagnostics(handle);
        manager.register_action("explode", |_| Err(Error::Action("refused".into())));

        let id = manager.show(Notification::info("doomed"));
        manager.run_action(id, "explode", &Value::Null);

        collector.drain();
        let logged = collector.events().any(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::Error { event }
                    if event.error_type == crate::diagnostics::ErrorType::ActionFailed
            )
        });
        assert!(logged);
        assert!(manager.visible().next().unwrap().is_dismissing());
    }

    #[test]
    fn warning_and_error_toasts_are_recorded_to_diagnostics() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(10));
        let mut manager = Manager::new();
        manager.set_diagnostics(handle);

        manager.show(Notification::warning("low disk"));
        manager.show(Notification::error("write failed"));
        manager.show(Notification::success("not recorded"));

        collector.drain();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn stats_counts_by_severity_and_persistence() {
        let mut manager = Manager::new();
        manager.show(Notification::success("a"));
        manager.show(Notification::error("b").persistent());
        manager.show(Notification::warning("c"));
        manager.show(Notification::info("d"));

        let stats = manager.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 1);
        assert_eq!(stats.error, 1);
        assert_eq!(stats.warning, 1);
        assert_eq!(stats.info, 1);
        assert_eq!(stats.persistent, 1);
    }

    #[test]
    fn set_max_visible_clamps_and_evicts() {
        let mut manager = Manager::new();
        for i in 1..=5 {
            manager.show(Notification::info(format!("toast-{i}")));
        }

        manager.set_max_visible(2);
        assert_eq!(manager.max_visible(), 2);
        assert_eq!(messages(&manager), vec!["toast-4", "toast-5"]);

        manager.set_max_visible(0);
        assert_eq!(manager.max_visible(), crate::config::MIN_MAX_VISIBLE);
    }

    #[test]
    fn zero_exit_delay_removes_on_dismiss() {
        let config = NotificationsConfig {
            exit_delay_ms: 0,
            ..NotificationsConfig::default()
        };
        let mut manager = Manager::with_config(&config);

        let id = manager.show(Notification::info("instant"));
        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_routes_operations() {
        let mut manager = Manager::new();
        let id = manager.show(Notification::info("routed"));

        manager.handle_message(&Message::HoverEntered);
        assert!(manager.is_paused());
        manager.handle_message(&Message::HoverExited);
        assert!(!manager.is_paused());

        manager.handle_message(&Message::Dismiss(id));
        manager.handle_message(&Message::Tick(EXIT_DELAY));
        assert!(manager.is_empty());
    }
}
