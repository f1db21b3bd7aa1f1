// SPDX-License-Identifier: MPL-2.0
//! Demo application: a playground window that exercises the toast system.
//!
//! The app owns the single [`Manager`] instance (constructed here, at
//! bootstrap) together with the i18n state and the diagnostics collector,
//! and drives the manager with a periodic time subscription. Escape
//! dismisses every toast.

use std::time::{Duration, Instant};

use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{event, keyboard, time, Element, Length, Subscription, Task, Theme};
use serde_json::json;

use crate::config::{self, TICK_INTERVAL_MS};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, WarningEvent, WarningType};
use crate::error::Error;
use crate::i18n::I18n;
use crate::notifications::{self, Action, Manager, Notification};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::Toast;

/// Launch options collected by `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    pub lang: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::Message),
    ShowSuccess,
    ShowError,
    ShowWarning,
    ShowInfo,
    ShowPersistent,
    ShowWithActions,
    ExportDiagnostics,
    EscapePressed,
    Tick(Instant),
}

pub struct App {
    i18n: I18n,
    notifications: Manager,
    diagnostics: DiagnosticsCollector,
    shown_count: u64,
    last_tick: Option<Instant>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(iced::window::Settings {
            size: iced::Size::new(560.0, 640.0),
            ..iced::window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the app state: config, i18n, diagnostics, manager, and
    /// the demo's action handlers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let (diagnostics, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let mut manager = Manager::with_config(&config.notifications);
        manager.set_diagnostics(handle.clone());

        // Demo handlers: one that succeeds, one that fails so the
        // caught-and-logged path is visible in the exported report.
        manager.register_action("undo-delete", |_params| Ok(()));
        manager.register_action("show-details", |_params| {
            Err(Error::Action("details view not implemented".into()))
        });

        if let Some(warning) = config_warning {
            handle.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                warning.clone(),
            ));
            manager.show(Notification::warning(warning));
        }

        (
            Self {
                i18n,
                notifications: manager,
                diagnostics,
                shown_count: 0,
                last_tick: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(inner) => self.notifications.handle_message(&inner),
            Message::ShowSuccess => {
                self.show(Notification::success(self.i18n.tr("demo-message-saved")));
            }
            Message::ShowError => {
                self.show(Notification::error(self.i18n.tr("demo-message-failed")));
            }
            Message::ShowWarning => {
                self.show(Notification::warning(self.i18n.tr("demo-message-warning")));
            }
            Message::ShowInfo => {
                self.show(Notification::info(self.i18n.tr("demo-message-info")));
            }
            Message::ShowPersistent => {
                self.show(
                    Notification::error(self.i18n.tr("demo-message-persistent")).persistent(),
                );
            }
            Message::ShowWithActions => {
                let notification =
                    Notification::warning(self.i18n.tr("demo-message-actions"))
                        .with_action(
                            Action::new("undo-delete", self.i18n.tr("demo-action-undo"))
                                .with_icon("↩")
                                .with_params(json!({ "item_id": self.shown_count })),
                        )
                        .with_action(Action::new(
                            "show-details",
                            self.i18n.tr("demo-action-details"),
                        ));
                self.show(notification);
            }
            Message::ExportDiagnostics => {
                let path = std::env::temp_dir().join("iced_toast-diagnostics.json");
                match self.diagnostics.export_json(&path) {
                    Ok(()) => {
                        let message = self.i18n.tr_with_args(
                            "demo-export-done",
                            &[("path", path.display().to_string().as_str())],
                        );
                        self.show(Notification::success(message));
                    }
                    Err(_) => {
                        self.show(Notification::error(self.i18n.tr("demo-export-failed")));
                    }
                }
            }
            Message::EscapePressed => self.notifications.dismiss_all(),
            Message::Tick(now) => {
                let delta = match self.last_tick {
                    Some(last) => now.saturating_duration_since(last),
                    None => Duration::from_millis(TICK_INTERVAL_MS),
                };
                self.last_tick = Some(now);
                self.diagnostics.drain();
                self.notifications.tick(delta);
            }
        }
        Task::none()
    }

    fn show(&mut self, notification: Notification) {
        self.notifications.show(notification);
        self.shown_count += 1;
    }

    fn view(&self) -> Element<'_, Message> {
        let mut controls = Column::new()
            .spacing(spacing::SM)
            .push(demo_button(self.i18n.tr("demo-show-success"), Message::ShowSuccess))
            .push(demo_button(self.i18n.tr("demo-show-error"), Message::ShowError))
            .push(demo_button(self.i18n.tr("demo-show-warning"), Message::ShowWarning))
            .push(demo_button(self.i18n.tr("demo-show-info"), Message::ShowInfo))
            .push(demo_button(
                self.i18n.tr("demo-show-persistent"),
                Message::ShowPersistent,
            ))
            .push(demo_button(
                self.i18n.tr("demo-show-actions"),
                Message::ShowWithActions,
            ))
            .push(demo_button(
                self.i18n.tr("demo-export-diagnostics"),
                Message::ExportDiagnostics,
            ));

        let count_line = self.i18n.tr_with_args(
            "demo-shown-count",
            &[("count", self.shown_count.to_string().as_str())],
        );
        controls = controls.push(text(count_line).size(typography::CAPTION));

        let stats = self.notifications.stats();
        controls = controls.push(
            text(format!(
                "live: {} (persistent: {})",
                stats.total, stats.persistent
            ))
            .size(typography::CAPTION),
        );

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        let overlay = Toast::view_overlay(&self.notifications, &self.i18n)
            .map(Message::Notification);

        Stack::new().push(content).push(overlay).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);

        let keys = event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        });

        Subscription::batch([tick, keys])
    }
}

fn demo_button(label: String, message: Message) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_app_starts_with_no_toasts() {
        let app = app();
        assert!(app.notifications.is_empty());
        assert_eq!(app.shown_count, 0);
    }

    #[test]
    fn show_messages_increment_count() {
        let mut app = app();
        let _ = app.update(Message::ShowSuccess);
        let _ = app.update(Message::ShowError);

        assert_eq!(app.shown_count, 2);
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn escape_dismisses_everything() {
        let mut app = app();
        let _ = app.update(Message::ShowPersistent);
        let _ = app.update(Message::ShowInfo);

        let _ = app.update(Message::EscapePressed);
        let _ = app.update(Message::Tick(Instant::now()));
        // First tick establishes the baseline; the second advances past the
        // exit delay.
        let exit = Duration::from_millis(config::DEFAULT_EXIT_DELAY_MS);
        let _ = app.update(Message::Tick(Instant::now() + exit));

        assert!(app.notifications.is_empty());
    }

    #[test]
    fn action_failure_lands_in_diagnostics() {
        let mut app = app();
        let _ = app.update(Message::ShowWithActions);
        let id = app
            .notifications
            .visible()
            .next()
            .expect("toast was shown")
            .notification()
            .id();

        let _ = app.update(Message::Notification(notifications::Message::RunAction {
            id,
            handler: "show-details".to_string(),
            params: serde_json::Value::Null,
        }));
        app.diagnostics.drain();

        let failure_logged = app.diagnostics.events().any(|event| {
            matches!(
                &event.kind,
                crate::diagnostics::DiagnosticEventKind::Error { .. }
            )
        });
        assert!(failure_logged);
    }

    #[test]
    fn title_is_localized() {
        let app = App::new(Flags {
            lang: Some("es-ES".to_string()),
        })
        .0;
        assert_eq!(app.title(), "Banco de pruebas de notificaciones");
    }
}
