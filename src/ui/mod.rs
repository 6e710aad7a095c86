pub mod body_editor;
pub mod header;
pub mod headers_editor;
pub mod request_bar;
pub mod request_editor;
pub mod response_panel;
pub mod style;
