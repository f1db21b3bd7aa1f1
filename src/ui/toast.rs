// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications, appearing as small
//! cards with severity-colored accents, optional action buttons, and a
//! countdown bar for auto-dismissing entries. The manager itself never
//! touches widget code; these views consume its state read-only, so the
//! queueing/eviction/timer logic stays testable without a GUI runtime.

use crate::i18n::I18n;
use crate::notifications::{Entry, Manager, Message, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color for a severity level.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Error => palette::ERROR_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Info => palette::INFO_500,
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
        let notification = entry.notification();
        let severity = notification.severity();

        // Exiting toasts fade their accent as a dismissal cue.
        let accent_color = if entry.is_dismissing() {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..severity_color(severity)
            }
        } else {
            severity_color(severity)
        };

        // Title: explicit override, or the severity's localized default.
        let title_text = match notification.title() {
            Some(title) => title.to_string(),
            None => i18n.tr(severity.title_key()),
        };

        let icon_widget = Text::new(icons::severity_glyph(severity))
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let title_widget = Text::new(title_text)
            .size(typography::TITLE)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new(icons::CROSS).size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(title_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut content = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(message_widget);

        if !notification.actions().is_empty() {
            let mut actions_row = Row::new().spacing(spacing::XS);
            for action in notification.actions() {
                let label = match action.icon() {
                    Some(glyph) => format!("{} {}", glyph, action.label()),
                    None => action.label().to_string(),
                };
                let action_button = button(Text::new(label).size(typography::CAPTION))
                    .on_press(Message::RunAction {
                        id: notification_id,
                        handler: action.handler().to_string(),
                        params: action.params().clone(),
                    })
                    .padding(spacing::XS)
                    .style(move |theme: &Theme, status| {
                        action_button_style(theme, status, accent_color)
                    });
                actions_row = actions_row.push(action_button);
            }
            content = content.push(actions_row);
        }

        if let Some(fraction) = entry.remaining_fraction() {
            content = content.push(countdown_bar(fraction, accent_color));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically in
    /// display order. The whole region is wrapped in a mouse area so
    /// hovering any toast pauses every countdown.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|entry| Self::view(entry, i18n))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space; the insertion point
            // always exists, there is no separate "mount" step.
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            let hover_region = mouse_area(toast_column)
                .on_enter(Message::HoverEntered)
                .on_exit(Message::HoverExited);

            Container::new(hover_region)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Builds the countdown bar showing the remaining display time.
fn countdown_bar<'a>(fraction: f32, accent_color: Color) -> Element<'a, Message> {
    let filled = sizing::TOAST_WIDTH * fraction.clamp(0.0, 1.0);
    let bar = Container::new(text(""))
        .width(Length::Fixed(filled))
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::TRACK,
                ..accent_color
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style function for action buttons, outlined with the severity accent.
fn action_button_style(theme: &Theme, status: button::Status, accent_color: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let wash = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent_color
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent_color
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: wash,
        text_color: base.text,
        border: iced::Border {
            color: accent_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
