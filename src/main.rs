mod format;
mod http;
mod ui;

use iced::widget::{column, container, text_editor};
use iced::{Element, Length, Task};
use tracing_subscriber::EnvFilter;

use http::client::{build_client, build_request, dispatch};
use http::headers::HeaderList;
use http::method::HttpMethod;
use http::request::RequestInput;
use http::response::ResponseRecord;
use ui::style;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    iced::application("Reqpad", update, view)
        .theme(|_| style::app_theme())
        .window_size((520.0, 840.0))
        .run_with(|| (App::default(), Task::none()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEditorTab {
    Headers,
    Body,
}

struct App {
    client: reqwest::Client,
    method: HttpMethod,
    url: String,
    request_tab: RequestEditorTab,
    headers: HeaderList,
    body_editor: text_editor::Content,
    pretty_json: bool,
    loading: bool,
    error: Option<String>,
    response: Option<ResponseRecord>,
}

impl Default for App {
    fn default() -> Self {
        let mut headers = HeaderList::new();
        headers.push();

        Self {
            client: build_client(),
            method: HttpMethod::default(),
            url: String::new(),
            request_tab: RequestEditorTab::Headers,
            headers,
            body_editor: text_editor::Content::new(),
            pretty_json: true,
            loading: false,
            error: None,
            response: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    MethodSelected(HttpMethod),
    UrlChanged(String),
    RequestTabSelected(RequestEditorTab),
    HeaderAdded,
    HeaderRemoved(usize),
    HeaderKeyChanged(usize, String),
    HeaderValueChanged(usize, String),
    BodyEdited(text_editor::Action),
    PrettyJsonToggled(bool),
    SendPressed,
    RequestFinished(ResponseRecord),
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::MethodSelected(method) => {
            app.method = method;
            Task::none()
        }
        Message::UrlChanged(url) => {
            app.url = url;
            Task::none()
        }
        Message::RequestTabSelected(tab) => {
            app.request_tab = tab;
            Task::none()
        }
        Message::HeaderAdded => {
            app.headers.push();
            Task::none()
        }
        Message::HeaderRemoved(index) => {
            app.headers.remove(index);
            Task::none()
        }
        Message::HeaderKeyChanged(index, key) => {
            app.headers.set_key(index, key);
            Task::none()
        }
        Message::HeaderValueChanged(index, value) => {
            app.headers.set_value(index, value);
            Task::none()
        }
        Message::BodyEdited(action) => {
            app.body_editor.perform(action);
            Task::none()
        }
        Message::PrettyJsonToggled(enabled) => {
            app.pretty_json = enabled;
            Task::none()
        }
        Message::SendPressed => {
            if app.loading {
                return Task::none();
            }

            let body = app.method.takes_body().then(|| app.body_editor.text());
            let input = RequestInput {
                method: app.method,
                url: app.url.clone(),
                headers: app.headers.clone(),
                body,
            };

            // Validation failures surface as a notice; nothing is sent.
            let request = match build_request(&app.client, &input) {
                Ok(request) => request,
                Err(err) => {
                    app.error = Some(err);
                    return Task::none();
                }
            };

            app.loading = true;
            app.error = None;
            app.response = None;

            Task::perform(dispatch(app.client.clone(), request), Message::RequestFinished)
        }
        Message::RequestFinished(record) => {
            app.loading = false;
            app.response = Some(record);
            Task::none()
        }
    }
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view();

    let request_bar = container(ui::request_bar::view(app.method, &app.url, app.loading))
        .padding(12)
        .style(|_| style::surface_style(style::SURFACE_1, 0.0));

    let request_editor =
        ui::request_editor::view(app.request_tab, &app.headers, &app.body_editor, app.method);

    let request_section = container(column![request_bar, request_editor].spacing(0).height(Length::Fill))
        .height(Length::FillPortion(45))
        .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    let response_section = container(ui::response_panel::view(
        app.error.as_deref(),
        app.response.as_ref(),
        app.pretty_json,
        app.loading,
    ))
    .height(Length::FillPortion(55))
    .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    let layout = column![header, request_section, response_section]
        .spacing(1)
        .height(Length::Fill)
        .width(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}
