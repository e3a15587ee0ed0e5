use thiserror::Error;

/// Failure of a backend call, as seen by the pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status. `message` is the `error` field of the body, if any.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Generic rejection raised by the dashboard-server client, which never
    /// reads error bodies.
    #[error("{0}")]
    Rejected(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user, or `None` when only a fallback fits.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            Self::Rejected(message) => Some(message),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub fn user_message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user_message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(fallback)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::Server {
            status: 500,
            message: Some("LLM provider unavailable".to_string()),
        };
        assert_eq!(err.user_message_or("fallback"), "LLM provider unavailable");
    }

    #[test]
    fn missing_or_blank_message_uses_fallback() {
        let bare = ApiError::Server {
            status: 502,
            message: None,
        };
        let blank = ApiError::Server {
            status: 400,
            message: Some("  ".to_string()),
        };
        let network = ApiError::Network("connection refused".to_string());

        assert_eq!(bare.user_message_or("Failed"), "Failed");
        assert_eq!(blank.user_message_or("Failed"), "Failed");
        assert_eq!(network.user_message_or("Failed"), "Failed");
    }

    #[test]
    fn rejection_carries_its_own_text() {
        let err = ApiError::Rejected("Failed to fetch dashboards".to_string());
        assert_eq!(err.to_string(), "Failed to fetch dashboards");
    }
}
