//! API Errors

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    Http { status: u16 },
    /// Request never completed (CORS, refused connection, ...)
    Network(String),
    /// Response body was not valid JSON
    Decode(String),
    /// Payload could not be serialized
    Encode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { status } => write!(f, "HTTP error! status: {}", status),
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::Decode(msg) => write!(f, "{}", msg),
            ApiError::Encode(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Turn a non-2xx status into an error
pub fn ensure_success(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success(200).is_ok());
        assert!(ensure_success(204).is_ok());
        assert_eq!(ensure_success(500), Err(ApiError::Http { status: 500 }));
        assert_eq!(ensure_success(404), Err(ApiError::Http { status: 404 }));
        assert_eq!(ensure_success(302), Err(ApiError::Http { status: 302 }));
    }

    #[test]
    fn test_http_error_message_carries_status() {
        let err = ApiError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_network_message_is_passed_through() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
