//! Transit client error types.

/// Errors from the transit path search HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered 200 with an error payload
    #[error("path search error {code}: {message}")]
    Provider { code: String, message: String },

    /// The response contained no usable path
    #[error("no route found")]
    NoRoute,

    /// Rate limited by the API
    #[error("rate limited by transit API")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransitError::Provider {
            code: "-98".into(),
            message: "too close".into(),
        };
        assert_eq!(err.to_string(), "path search error -98: too close");

        assert_eq!(TransitError::NoRoute.to_string(), "no route found");

        let err = TransitError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");
    }
}
