//! Retry policy for release-source requests, with error classification.

use reqwest::StatusCode;

/// Maximum number of attempts for one page request.
pub const MAX_RETRIES: usize = 3;

/// Delay between attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Page-request failures that retrying will not fix.
///
/// These abort the aggregation: in batch mode the whole run fails, in
/// streaming mode the snapshot sequence terminates with this error.
#[derive(Debug)]
pub enum FetchError {
    /// Rate limit exceeded (HTTP 403 with rate limit message or 429)
    RateLimited(String),
    /// Authentication failed (HTTP 401)
    AuthFailed(String),
    /// Repository or resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Other client errors that won't succeed on retry
    Client(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RateLimited(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or set GITHUB_TOKEN environment variable.",
                    msg
                )
            }
            FetchError::AuthFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            FetchError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            FetchError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}. You may need authentication.", msg)
            }
            FetchError::Client(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Classifies an error as retryable or not.
/// Returns Ok(()) if the error is retryable, Err with a user-friendly message if not.
pub fn classify_error(error: &reqwest::Error) -> Result<(), FetchError> {
    if let Some(status) = error.status() {
        match status {
            StatusCode::UNAUTHORIZED => {
                return Err(FetchError::AuthFailed(
                    "Invalid or missing authentication token".to_string(),
                ));
            }
            StatusCode::FORBIDDEN => {
                let msg = error.to_string();
                if msg.contains("rate limit") || msg.contains("API rate limit") {
                    return Err(FetchError::RateLimited(
                        "GitHub API rate limit exceeded".to_string(),
                    ));
                }
                return Err(FetchError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(FetchError::RateLimited("Too many requests".to_string()));
            }
            StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound(
                    "The requested resource was not found".to_string(),
                ));
            }
            // Other 4xx client errors are generally not retryable
            s if s.is_client_error() => {
                return Err(FetchError::Client(format!("HTTP {} error", s.as_u16())));
            }
            // 5xx server errors are retryable
            _ => {}
        }
    }

    // Connection errors, timeouts, etc. are retryable
    Ok(())
}

/// Checks if an error from `error_for_status()` should be retried.
/// Returns the original error if retryable, or a user-friendly FetchError if not.
pub fn check_retryable(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Ok(()) => anyhow::Error::from(error),
        Err(fatal) => anyhow::Error::from(fatal),
    }
}
