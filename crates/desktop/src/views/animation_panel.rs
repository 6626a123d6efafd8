use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::{AnimationPlayback, Message};

/// The phrase-animation surface: current frame, caption, and a close
/// button that tears the playback loop down.
pub fn view(playback: &AnimationPlayback) -> Element<'_, Message> {
    let header = row![
        text("Sign language translation").size(15),
        Space::new().width(Length::Fill),
        button(text("Close").size(13))
            .padding([6, 14])
            .style(button::secondary)
            .on_press(Message::ClosePlayback),
    ]
    .align_y(Alignment::Center);

    let caption = text(format!(
        "\"{}\" (frame {} of {})",
        playback.phrase(),
        playback.current_index() + 1,
        playback.frame_count()
    ))
    .size(13);

    container(
        column![
            header,
            container(image(playback.current_handle())).center_x(Length::Fill),
            caption,
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
