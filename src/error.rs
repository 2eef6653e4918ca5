use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the API.
///
/// The [`Display`](std::fmt::Display) text of each variant is the
/// message a caller would show to a user.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (unreachable host, aborted request, ...).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Decode(String),

    /// The response was valid JSON but did not have the expected shape.
    #[error("Response validation failed: {0}")]
    Validation(String),

    /// The endpoint needs an API key and the client was built without one.
    #[error("API key is required for {0}")]
    MissingKey(Privilege),

    /// The base URL and request path did not form a valid URL.
    #[error("{0}")]
    Url(String),

    /// The request body could not be serialized.
    #[error("{0}")]
    Encode(String),
}

/// Endpoint families that refuse to run without an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Fetching a user profile.
    UserRetrieval,
    /// Listing the filters owned by the key's user.
    UserFilters,
    /// Uploading an image.
    ImageUpload,
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self {
            Privilege::UserRetrieval => "user retrieval",
            Privilege::UserFilters => "user filters retrieval",
            Privilege::ImageUpload => "image upload",
        };
        f.write_str(what)
    }
}

impl Error {
    /// Returns the HTTP status if the server rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_uses_numeric_code() {
        let err = Error::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn missing_key_messages() {
        assert_eq!(
            Error::MissingKey(Privilege::UserRetrieval).to_string(),
            "API key is required for user retrieval"
        );
        assert_eq!(
            Error::MissingKey(Privilege::UserFilters).to_string(),
            "API key is required for user filters retrieval"
        );
        assert_eq!(
            Error::MissingKey(Privilege::ImageUpload).to_string(),
            "API key is required for image upload"
        );
    }

    #[test]
    fn validation_is_prefixed() {
        let err = Error::Validation("missing field `id`".into());
        assert_eq!(
            err.to_string(),
            "Response validation failed: missing field `id`"
        );
    }
}
