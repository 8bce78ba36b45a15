//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every backend call resolves to `Result<_, ApiError>`. Identity checks fold
//! any error into "no user"; form submissions show `user_message` in a toast.
//! Nothing here is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("network request failed: {0}")]
    Network(String),
    /// 401/403 on a credentialed call.
    #[error("not authorized ({status})")]
    Unauthorized { status: u16, detail: Option<String> },
    /// Non-2xx carrying a server-provided `detail` message.
    #[error("{detail}")]
    Validation { status: u16, detail: String },
    /// Non-2xx without a usable body.
    #[error("unexpected status {status}")]
    Status { status: u16 },
    /// 2xx whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: serde_json::Value,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        match (status, detail) {
            (401 | 403, detail) => Self::Unauthorized { status, detail },
            (_, Some(detail)) => Self::Validation { status, detail },
            (_, None) => Self::Status { status },
        }
    }

    /// HTTP status, when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Validation { status, .. } | Self::Status { status } => {
                Some(*status)
            }
            Self::Network(_) | Self::Decode(_) | Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text for a toast: the server's `detail` (or the local validation
    /// message) when there is one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation { detail, .. } | Self::Unauthorized { detail: Some(detail), .. } => detail.clone(),
            Self::Invalid(message) => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a human-readable message out of a FastAPI-style error body.
///
/// `detail` is either a string or a list of `{loc, msg, type}` entries; for
/// the list form the first `msg` wins.
fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}
