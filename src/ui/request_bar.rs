use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::http::method::HttpMethod;
use crate::Message;

use super::style;

pub fn view<'a>(method: HttpMethod, url: &str, loading: bool) -> Element<'a, Message> {
    let method_picklist = pick_list(&HttpMethod::ALL[..], Some(method), Message::MethodSelected)
        .style(style::pick_list_style)
        .padding([8, 10])
        .width(110);

    let url_input = text_input("https://httpbin.org/get", url)
        .on_input(Message::UrlChanged)
        .style(style::input_style)
        .padding(10)
        .size(15)
        .width(Length::Fill);

    // No on_press while a request is in flight; a second click cannot fire.
    let send_button = if loading {
        button(text("Sending...").size(14))
            .padding([10, 18])
            .style(style::primary_button)
    } else {
        button(text("Send").size(14))
            .on_press(Message::SendPressed)
            .padding([10, 18])
            .style(style::primary_button)
    };

    row![method_picklist, url_input, send_button].spacing(10).into()
}
