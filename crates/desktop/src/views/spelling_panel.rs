use iced::widget::{column, container, image, text};
use iced::{Element, Length};

use crate::app::{Message, SpellingPlayback};

/// The letter-by-letter surface. It runs to completion on its own, so
/// unlike the animation panel there is nothing to dismiss.
pub fn view(playback: &SpellingPlayback) -> Element<'_, Message> {
    let mut content = column![text("Spelling it out").size(15)].spacing(8);

    if let Some(handle) = playback.current_handle() {
        content = content.push(container(image(handle)).center_x(Length::Fill));
    }
    if let Some(letter) = playback.current_letter() {
        content = content.push(
            text(format!(
                "Letter {} of {}: '{}'",
                playback.position() + 1,
                playback.total(),
                letter
            ))
            .size(13),
        );
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
