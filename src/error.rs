//! Error taxonomy for resource fetches.
//!
//! An unauthenticated identity check is not represented here: the session
//! query resolves a 401 to "no session" before it ever becomes an error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single HTTP-backed resource read or mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build a status error, falling back to the reason phrase for empty bodies.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() { reason_phrase(status).to_owned() } else { body.to_owned() };
        Self::Status { status, message }
    }

    /// True when the server rejected the request for lack of a session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// HTTP status code, if the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Request Failed",
    }
}
