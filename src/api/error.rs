use thiserror::Error;

/// Errors surfaced by the transport and gateway layers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend rejected the bearer token (HTTP 401)
    #[error("unauthorized")]
    Unauthorized,

    /// Backend answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, timeout or body decoding failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Turn a 401 into a benign `None`, keeping every other outcome as is
pub fn unauthorized_as_none<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_unauthorized() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_becomes_none() {
        let result: Result<u8, ApiError> = Err(ApiError::Unauthorized);
        assert!(matches!(unauthorized_as_none(result), Ok(None)));

        let result: Result<u8, ApiError> = Err(ApiError::Status {
            status: 401,
            message: "expired".to_string(),
        });
        assert!(matches!(unauthorized_as_none(result), Ok(None)));
    }

    #[test]
    fn test_other_failures_are_kept() {
        let result: Result<u8, ApiError> = Err(ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        });
        let err = unauthorized_as_none(result).unwrap_err();
        assert_eq!(err.status(), Some(500));

        assert!(matches!(unauthorized_as_none(Ok(7u8)), Ok(Some(7))));
    }
}
