// SPDX-License-Identifier: MPL-2.0
//! Layer-strategy demo: a single window whose view composes the banner as
//! its top stack layer.
//!
//! Run with `cargo run --example banner`. Persisted defaults, if any, are
//! picked up from the platform config directory.

use std::time::Duration;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{Element, Length, Subscription, Task, Theme};

use iced_toast::design_tokens::{palette, spacing};
use iced_toast::{config, Appearance, Event, FeedbackKind, Toast, ToastConfig};

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("iced_toast=debug"),
    )
    .format_timestamp(None)
    .init();

    iced::application(boot, Demo::update, Demo::view)
        .title("iced_toast demo")
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .run()
}

fn boot() -> (Demo, Task<Message>) {
    let defaults = config::load().unwrap_or_default();

    let mut toast = Toast::new(
        ToastConfig::new("Saved")
            .subtitle("All changes written to disk")
            .position(defaults.position()),
    );
    defaults.apply(toast.style_mut());
    apply_appearance(&mut toast, defaults.theme().appearance());

    (
        Demo {
            toast,
            last_event: None,
        },
        Task::none(),
    )
}

/// The banner keeps a single title color, so switching appearance also means
/// picking text colors that read against the new background.
fn apply_appearance(toast: &mut Toast, appearance: Appearance) {
    let style = toast.style_mut();
    if appearance.is_dark() {
        style.title_color = palette::WHITE;
        style.subtitle_color = palette::GRAY_400;
    } else {
        style.title_color = palette::BLACK;
        style.subtitle_color = palette::GRAY_700;
    }
    toast.set_appearance(appearance);
}

#[derive(Debug, Clone)]
enum Message {
    Show,
    ShowWithFeedback,
    Hide,
    HideDelayed,
    ToggleAppearance,
    Toast(iced_toast::Message),
}

struct Demo {
    toast: Toast,
    last_event: Option<Event>,
}

impl Demo {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show => self.toast.show().map(Message::Toast),
            Message::ShowWithFeedback => self
                .toast
                .show_with_feedback(FeedbackKind::Success)
                .map(Message::Toast),
            Message::Hide => {
                self.toast.hide();
                Task::none()
            }
            Message::HideDelayed => {
                self.toast.hide_after(Duration::from_secs(2));
                Task::none()
            }
            Message::ToggleAppearance => {
                let next = if self.toast.appearance().is_dark() {
                    Appearance::Light
                } else {
                    Appearance::Dark
                };
                apply_appearance(&mut self.toast, next);
                Task::none()
            }
            Message::Toast(message) => {
                let (event, task) = self.toast.update(message);
                if event != Event::None {
                    self.last_event = Some(event);
                }
                task.map(Message::Toast)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(button("Show").on_press(Message::Show))
            .push(button("Show with feedback").on_press(Message::ShowWithFeedback))
            .push(button("Hide").on_press(Message::Hide))
            .push(button("Hide in 2 s").on_press(Message::HideDelayed))
            .push(button("Toggle appearance").on_press(Message::ToggleAppearance));

        let status = match self.last_event {
            Some(event) => text(format!("Last event: {event:?}")),
            None => text("No events yet"),
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(text("iced_toast").size(24))
            .push(controls)
            .push(status);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let mut layers = Stack::new().push(base);
        if let Some(banner) = self.toast.view() {
            layers = layers.push(banner.map(Message::Toast));
        }
        layers.into()
    }

    fn theme(&self) -> Theme {
        if self.toast.appearance().is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toast.subscription().map(Message::Toast)
    }
}
