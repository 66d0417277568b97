use iced::widget::{mouse_area, text_input};
use iced::{Element, Fill};

use crate::field::Message;
use crate::ui::theme;

/// Build the query input.
///
/// A locked input gets no input handler, which makes iced render it disabled
/// and drop keystrokes.
pub fn view<'a>(
    query: &'a str,
    placeholder: &'a str,
    locked: bool,
    loading: bool,
) -> Element<'a, Message> {
    let style = if loading {
        theme::search_input_loading as fn(&iced::Theme, text_input::Status) -> text_input::Style
    } else {
        theme::search_input
    };

    let input = text_input(placeholder, query)
        .on_input_maybe((!locked).then_some(Message::QueryChanged))
        .padding(12)
        .size(18)
        .width(Fill)
        .style(style);

    mouse_area(input)
        .on_enter(Message::InputHovered(true))
        .on_exit(Message::InputHovered(false))
        .into()
}
