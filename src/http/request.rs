use super::headers::HeaderList;
use super::method::HttpMethod;

/// Everything the user entered for one send action. Built fresh per send and
/// handed to the builder read-only.
#[derive(Debug, Clone)]
pub struct RequestInput {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderList,
    pub body: Option<String>,
}
