use thiserror::Error;

/// Longest slice of an error response body kept in the message.
pub const MAX_ERROR_BODY_CHARS: usize = 800;

/// Failure of one request against the portfolio API.
///
/// `resource` names what was being fetched ("Profile", "Articles", ...) so the
/// rendered message reads on its own, e.g.
/// `Articles fetch failed (503). URL: https://.../api/articles. upstream down`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{resource} fetch failed (network). URL: {url}. {message}")]
    Network {
        resource: &'static str,
        url: String,
        message: String,
    },

    #[error("{resource} fetch failed ({status}). URL: {url}. {body}")]
    Status {
        resource: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{resource} response was not valid JSON. URL: {url}. {source}")]
    Decode {
        resource: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Raised before any request is sent.
    #[error("Article slug '{slug}' cannot be used as a URL path segment")]
    InvalidSlug { slug: String },
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Cuts a response body down to `MAX_ERROR_BODY_CHARS` characters.
pub fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
