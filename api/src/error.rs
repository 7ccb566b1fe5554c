use thiserror::Error;

/// Failure modes of a backend call. The navbar folds all of them into
/// "anonymous" or "keep the previous streak", but callers still get to log
/// which one happened.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated (401)")]
    Unauthorized,
    #[error("service unavailable (503)")]
    ServiceUnavailable,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API base url `{0}`")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Map a non-success HTTP status to its error variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            503 => Self::ServiceUnavailable,
            other => Self::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_named_variants() {
        assert!(matches!(ApiError::from_status(401), ApiError::Unauthorized));
        assert!(matches!(
            ApiError::from_status(503),
            ApiError::ServiceUnavailable
        ));
        assert!(matches!(ApiError::from_status(500), ApiError::Status(500)));
        assert!(matches!(ApiError::from_status(404), ApiError::Status(404)));
    }

    #[test]
    fn display_mentions_status_code() {
        assert_eq!(ApiError::from_status(418).to_string(), "unexpected status 418");
    }
}
