use iced::widget::{checkbox, column, container, horizontal_space, row, scrollable, text};
use iced::{Color, Element, Length};

use crate::format;
use crate::http::response::ResponseRecord;
use crate::Message;

use super::style;

pub fn view<'a>(
    error: Option<&'a str>,
    response: Option<&'a ResponseRecord>,
    pretty_json: bool,
    loading: bool,
) -> Element<'a, Message> {
    let mut section = column![].spacing(0).height(Length::Fill);

    if let Some(err) = error {
        section = section.push(
            container(text(format!("Error: {err}")).size(12).color(style::DANGER)).padding([8, 10]),
        );
    }

    if loading {
        section = section.push(
            container(text("Sending request...").size(13).color(style::TEXT_MUTED))
                .padding(16)
                .center_x(Length::Fill)
                .height(Length::Fill),
        );
    } else if let Some(record) = response {
        let display = format::display(record);

        let summary = row![
            text(display.status_text)
                .size(13)
                .color(status_color(record.status)),
            text(format!(" | {} | {}", display.time_text, display.size_text))
                .size(12)
                .color(style::TEXT_MUTED),
            horizontal_space(),
            checkbox("Pretty JSON", pretty_json).on_toggle(Message::PrettyJsonToggled)
        ]
        .align_y(iced::alignment::Alignment::Center)
        .padding([8, 10])
        .spacing(10);

        let body_text = if pretty_json {
            display.body_text
        } else {
            record.data.clone()
        };

        let body = scrollable(
            container(text(body_text).size(13))
                .padding(10)
                .width(Length::Fill)
                .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
        )
        .height(Length::Fill);

        section = section
            .push(summary)
            .push(container(body).padding(10).height(Length::Fill));
    } else {
        section = section.push(
            container(text("No response yet").size(14).color(style::TEXT_MUTED))
                .padding(16)
                .center_x(Length::Fill)
                .height(Length::Fill),
        );
    }

    section.into()
}

/// Color for the status line: green for 2xx, yellow for 3xx, red for HTTP
/// errors and transport failures.
fn status_color(status: i32) -> Color {
    if (200..300).contains(&status) {
        style::SUCCESS
    } else if (300..400).contains(&status) {
        Color::from_rgb(0.95, 0.77, 0.06)
    } else if status >= 400 || status < 0 {
        style::DANGER
    } else {
        style::TEXT
    }
}
