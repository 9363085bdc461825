//! Error types for the Gemini adapter

use scripture_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not found: environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Gemini returned no candidates")]
    NoCandidates,
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs stay out of error text.
        GeminiError::Http(err.without_url())
    }
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) if e.is_decode() => GatewayError::InvalidResponse(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            e @ (GeminiError::Status { .. } | GeminiError::NoCandidates) => {
                GatewayError::RequestFailed(e.to_string())
            }
            e @ GeminiError::MissingApiKey(_) => GatewayError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_request_failed() {
        let err: GatewayError = GeminiError::Status {
            status: 429,
            body: "quota".to_string(),
        }
        .into();
        match err {
            GatewayError::RequestFailed(msg) => assert!(msg.contains("429")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_candidates_maps_to_request_failed() {
        let err: GatewayError = GeminiError::NoCandidates.into();
        assert!(matches!(err, GatewayError::RequestFailed(_)));
    }
}
