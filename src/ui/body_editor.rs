use iced::widget::{column, text, text_editor};
use iced::Element;

use crate::http::method::HttpMethod;
use crate::Message;

use super::style;

pub fn view<'a>(editor: &'a text_editor::Content, method: HttpMethod) -> Element<'a, Message> {
    let mut section = column![
        text("Body").size(14),
        text_editor(editor)
            .on_action(Message::BodyEdited)
            .style(style::editor_style)
            .height(170),
    ]
    .spacing(6);

    if !method.takes_body() {
        section = section.push(
            text(format!("{method} requests are sent without a body"))
                .size(12)
                .color(style::TEXT_MUTED),
        );
    }

    section.into()
}
