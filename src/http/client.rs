use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, Request, Url};

use super::method::HttpMethod;
use super::request::RequestInput;
use super::response::ResponseRecord;

/// Applied independently to connection establishment and response reads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type for any non-empty request body. Never content-sniffed.
const BODY_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Build the shared client. Constructed once at startup and reused for every
/// request so the connection pool survives across sends.
pub fn build_client() -> Client {
    Client::builder()
        .connect_timeout(REQUEST_TIMEOUT)
        .read_timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to initialize HTTP client")
}

/// Validate the input and construct the outbound request. Runs entirely
/// before any network activity; an `Err` means nothing was sent.
pub fn build_request(client: &Client, input: &RequestInput) -> Result<Request, String> {
    let raw_url = input.url.trim();
    if raw_url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    let url = Url::parse(raw_url).map_err(|e| format!("Invalid URL: {e}"))?;
    if url.host_str().is_none() {
        return Err(format!("Invalid URL: `{raw_url}` has no host"));
    }

    let mut builder = client.request(input.method.into(), url);

    for header in input.headers.attachable() {
        let name = HeaderName::from_bytes(header.key.as_bytes())
            .map_err(|e| format!("Invalid header name `{}`: {e}", header.key))?;
        let value = HeaderValue::from_str(&header.value)
            .map_err(|e| format!("Invalid header value `{}`: {e}", header.value))?;
        builder = builder.header(name, value);
    }

    let body = input.body.as_deref().map(str::trim).filter(|body| !body.is_empty());
    builder = match (input.method, body) {
        (HttpMethod::Get, _) => builder,
        (HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete, Some(body)) => builder
            .header(CONTENT_TYPE, BODY_CONTENT_TYPE)
            .body(body.to_string()),
        // POST and PUT carry an empty body rather than none at all, with no
        // content type attached.
        (HttpMethod::Post | HttpMethod::Put, None) => builder.body(Vec::<u8>::new()),
        (HttpMethod::Delete, None) => builder,
    };

    builder.build().map_err(|e| format!("Failed to build request: {e}"))
}

/// Send the request and resolve to exactly one record, whatever happens on
/// the wire. Transport failures of any kind collapse into a record with
/// status -1; received responses are reported as-is, 4xx and 5xx included.
pub async fn dispatch(client: Client, request: Request) -> ResponseRecord {
    let method = request.method().clone();
    let url = request.url().clone();
    tracing::debug!("dispatching {method} {url}");

    let started = Instant::now();
    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("request to {url} failed: {e}");
            return ResponseRecord::failure(
                format!("Request failed: {e}"),
                started.elapsed().as_millis(),
            );
        }
    };

    let status = response.status();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("reading response from {url} failed: {e}");
            return ResponseRecord::failure(
                format!("Failed to read response: {e}"),
                started.elapsed().as_millis(),
            );
        }
    };
    let duration_ms = started.elapsed().as_millis();
    tracing::info!("{method} {url} -> {} in {duration_ms}ms", status.as_u16());

    ResponseRecord {
        success: status.is_success(),
        status: i32::from(status.as_u16()),
        size_bytes: bytes.len() as i64,
        data: String::from_utf8_lossy(&bytes).into_owned(),
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers::HeaderList;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn input(method: HttpMethod, url: &str) -> RequestInput {
        RequestInput {
            method,
            url: url.to_string(),
            headers: HeaderList::new(),
            body: None,
        }
    }

    #[test]
    fn rejects_urls_without_scheme_or_host() {
        let client = build_client();
        assert!(build_request(&client, &input(HttpMethod::Get, "")).is_err());
        assert!(build_request(&client, &input(HttpMethod::Get, "   ")).is_err());
        assert!(build_request(&client, &input(HttpMethod::Get, "not a url")).is_err());
        assert!(build_request(&client, &input(HttpMethod::Get, "mailto:user@example.com")).is_err());
    }

    #[test]
    fn accepts_absolute_urls() {
        let client = build_client();
        assert!(build_request(&client, &input(HttpMethod::Get, "https://example.com")).is_ok());
        assert!(build_request(&client, &input(HttpMethod::Get, "http://a.b/c?d=e")).is_ok());
    }

    #[test]
    fn incomplete_header_rows_are_filtered_out() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Get, "https://example.com");
        request_input.headers.push();
        let index = request_input.headers.push();
        request_input.headers.set_key(index, "A".to_string());
        request_input.headers.set_value(index, "1".to_string());
        let index = request_input.headers.push();
        request_input.headers.set_key(index, "B".to_string());

        let request = build_request(&client, &request_input).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.headers().get("A").unwrap(), "1");
    }

    #[test]
    fn duplicate_header_keys_are_all_attached() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Get, "https://example.com");
        for value in ["1", "2"] {
            let index = request_input.headers.push();
            request_input.headers.set_key(index, "X-Dup".to_string());
            request_input.headers.set_value(index, value.to_string());
        }

        let request = build_request(&client, &request_input).unwrap();

        let values: Vec<_> = request.headers().get_all("X-Dup").iter().collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn invalid_header_names_are_rejected() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Get, "https://example.com");
        let index = request_input.headers.push();
        request_input.headers.set_key(index, "bad name".to_string());
        request_input.headers.set_value(index, "1".to_string());

        assert!(build_request(&client, &request_input).is_err());
    }

    #[test]
    fn get_never_attaches_a_body() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Get, "https://example.com");
        request_input.body = Some("{\"a\":1}".to_string());

        let request = build_request(&client, &request_input).unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn post_with_blank_body_attaches_empty_bytes() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Post, "https://example.com");
        request_input.body = Some("  \n".to_string());

        let request = build_request(&client, &request_input).unwrap();

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        assert!(body.is_empty());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn post_body_carries_the_fixed_json_content_type() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Post, "https://example.com");
        request_input.body = Some("{\"a\":1}".to_string());

        let request = build_request(&client, &request_input).unwrap();

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        assert_eq!(body, b"{\"a\":1}");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn put_follows_the_same_body_rules_as_post() {
        let client = build_client();
        let mut request_input = input(HttpMethod::Put, "https://example.com");
        request_input.body = None;

        let request = build_request(&client, &request_input).unwrap();

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn delete_attaches_a_body_only_when_provided() {
        let client = build_client();

        let request_input = input(HttpMethod::Delete, "https://example.com");
        let request = build_request(&client, &request_input).unwrap();
        assert!(request.body().is_none());

        let mut request_input = input(HttpMethod::Delete, "https://example.com");
        request_input.body = Some("{\"gone\":true}".to_string());
        let request = build_request(&client, &request_input).unwrap();
        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        assert_eq!(body, b"{\"gone\":true}");
    }

    #[tokio::test]
    async fn dispatch_returns_a_success_record_for_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .mount(&server)
            .await;

        let client = build_client();
        let request =
            build_request(&client, &input(HttpMethod::Get, &format!("{}/ok", server.uri()))).unwrap();
        let record = dispatch(client, request).await;

        assert!(record.success);
        assert_eq!(record.status, 200);
        assert_eq!(record.size_bytes, 11);
        assert_eq!(record.data, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn dispatch_treats_http_errors_as_completed_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = build_client();
        let request = build_request(
            &client,
            &input(HttpMethod::Get, &format!("{}/boom", server.uri())),
        )
        .unwrap();
        let record = dispatch(client, request).await;

        assert!(!record.success);
        assert_eq!(record.status, 500);
        assert_eq!(record.data, "boom");
        assert_eq!(record.size_bytes, 4);
    }

    #[tokio::test]
    async fn dispatch_maps_transport_failure_to_an_error_record() {
        // Bind then drop a listener so the port is known to refuse connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = build_client();
        let request = build_request(
            &client,
            &input(HttpMethod::Get, &format!("http://127.0.0.1:{port}/")),
        )
        .unwrap();
        let record = dispatch(client, request).await;

        assert!(!record.success);
        assert_eq!(record.status, -1);
        assert_eq!(record.size_bytes, -1);
        assert!(!record.data.is_empty());
    }

    #[tokio::test]
    async fn post_body_and_headers_reach_the_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("X-Token", "abc"))
            .and(body_string("{\"a\":1}"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client();
        let mut request_input = input(HttpMethod::Post, &format!("{}/submit", server.uri()));
        let index = request_input.headers.push();
        request_input.headers.set_key(index, "X-Token".to_string());
        request_input.headers.set_value(index, "abc".to_string());
        request_input.body = Some("{\"a\":1}".to_string());

        let request = build_request(&client, &request_input).unwrap();
        let record = dispatch(client, request).await;

        assert_eq!(record.status, 201);
    }
}
