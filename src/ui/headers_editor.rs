use iced::widget::{button, column, row, scrollable, text, text_input};
use iced::{Element, Length};

use crate::http::headers::HeaderList;
use crate::Message;

use super::style;

pub fn view<'a>(headers: &'a HeaderList) -> Element<'a, Message> {
    let mut rows = column![].spacing(6);
    for (index, header) in headers.rows().iter().enumerate() {
        let key_input = text_input("Key", &header.key)
            .on_input(move |key| Message::HeaderKeyChanged(index, key))
            .style(style::input_style)
            .padding(8)
            .size(13)
            .width(Length::FillPortion(2));

        let value_input = text_input("Value", &header.value)
            .on_input(move |value| Message::HeaderValueChanged(index, value))
            .style(style::input_style)
            .padding(8)
            .size(13)
            .width(Length::FillPortion(3));

        let remove = button(text("✕").size(13))
            .on_press(Message::HeaderRemoved(index))
            .padding([8, 10])
            .style(style::ghost_button);

        rows = rows.push(row![key_input, value_input, remove].spacing(6));
    }

    let add = button(text("+ Add Header").size(13))
        .on_press(Message::HeaderAdded)
        .padding([8, 12])
        .style(style::subtle_button);

    column![
        text("Headers").size(14),
        text("Rows with an empty key or value are not sent")
            .size(12)
            .color(style::TEXT_MUTED),
        scrollable(rows).height(Length::Fill),
        add,
    ]
    .spacing(8)
    .into()
}
