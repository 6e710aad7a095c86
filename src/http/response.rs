/// Outcome of one dispatched request, success or not. Produced exactly once
/// per send and consumed by the response formatter.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    /// True only for responses in the 2xx range.
    pub success: bool,
    /// HTTP status code, or -1 when the transport failed.
    pub status: i32,
    /// Byte length of the response body, or -1 when the transport failed.
    pub size_bytes: i64,
    /// Response body text, or the failure message.
    pub data: String,
    /// Wall-clock time from dispatch until the body was read.
    pub duration_ms: u128,
}

impl ResponseRecord {
    /// Record for a request that never produced an HTTP response.
    pub fn failure(message: String, duration_ms: u128) -> Self {
        Self {
            success: false,
            status: -1,
            size_bytes: -1,
            data: message,
            duration_ms,
        }
    }
}
