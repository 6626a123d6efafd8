use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use crate::app::{ListenState, Message, Playback};
use crate::views::{animation_panel, spelling_panel};

pub fn view<'a>(
    listen_state: ListenState,
    log: &'a [String],
    playback: &'a Playback,
    busy: bool,
) -> Element<'a, Message> {
    let title = text("SignBridge Hearing Assistant").size(22);

    let status_line = match listen_state {
        ListenState::Idle => "Press Start Listening to begin.",
        ListenState::Calibrating => "Calibrating for ambient noise...",
        ListenState::Listening => "Say something...",
    };
    let status = row![
        mic_indicator(listen_state != ListenState::Idle),
        text(status_line).size(14),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let controls = row![
        button(text("Start Listening").size(15))
            .padding([10, 24])
            .on_press_maybe((!busy).then_some(Message::StartListening)),
        button(text("Quit").size(15))
            .padding([10, 24])
            .style(button::secondary)
            .on_press(Message::Quit),
    ]
    .spacing(12);

    let log_lines: Vec<Element<'a, Message>> = log
        .iter()
        .map(|line| text(line.as_str()).size(14).into())
        .collect();
    let log_panel = container(
        scrollable(column(log_lines).spacing(4).width(Length::Fill))
            .height(Length::Fill)
            .anchor_bottom(),
    )
    .padding(10)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container::rounded_box);

    let playback_panel: Option<Element<'a, Message>> = match playback {
        Playback::Idle => None,
        Playback::Animation(p) => Some(animation_panel::view(p)),
        Playback::Spelling(p) => Some(spelling_panel::view(p)),
    };

    let content = column![title, status, controls, text("Recognized speech").size(14), log_panel]
        .extend(playback_panel)
        .spacing(12)
        .padding(16);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Small round lamp next to the status line; lit while a capture cycle
/// is in flight.
fn mic_indicator<'a>(active: bool) -> Element<'a, Message> {
    container(text(""))
        .width(18)
        .height(18)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let fill = if active {
                palette.success.base.color
            } else {
                Color {
                    a: 0.15,
                    ..palette.background.base.text
                }
            };
            container::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    radius: 9.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}
