use crate::reframe::error::{ProviderError, ProviderErrorKind};

/// Maps a non-2xx provider response to an error, keeping a truncated body
/// excerpt for the logs.
pub fn map_http_error(status: u16, provider_id: &str, body: &str) -> ProviderError {
    let excerpt = body.chars().take(240).collect::<String>();

    let mut err = if status == 401 {
        ProviderError::new(ProviderErrorKind::Authentication, "authentication failed")
            .with_retryable(false)
    } else if status == 403 {
        ProviderError::new(ProviderErrorKind::Authorization, "authorization failed")
            .with_retryable(false)
    } else if status == 408 || status == 429 {
        ProviderError::new(
            ProviderErrorKind::RateLimited,
            format!("provider returned status {}", status),
        )
        .with_retryable(true)
    } else if (400..500).contains(&status) {
        ProviderError::new(
            ProviderErrorKind::Permanent,
            format!("provider returned status {}", status),
        )
        .with_retryable(false)
    } else {
        ProviderError::new(
            ProviderErrorKind::Transient,
            format!("provider returned status {}", status),
        )
        .with_retryable(true)
    };

    err = err.with_provider_id(provider_id).with_http_status(status);
    if !excerpt.is_empty() {
        err.message = format!("{}: {}", err.message, excerpt);
    }
    err
}

/// Maps a reqwest transport failure, distinguishing timeouts so they can be
/// logged as the budget firing rather than a network fault.
pub fn map_transport_error(err: &reqwest::Error, provider_id: &str) -> ProviderError {
    if err.is_timeout() {
        ProviderError::new(ProviderErrorKind::Timeout, "provider request timed out")
            .with_provider_id(provider_id)
    } else {
        ProviderError::new(
            ProviderErrorKind::Transient,
            format!("provider request failed: {}", err),
        )
        .with_provider_id(provider_id)
    }
}
