use serde::{Deserialize, Serialize};

use crate::reframe::types::ProviderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    InvalidConfig,
    Authentication,
    Authorization,
    RateLimited,
    Timeout,
    Transient,
    Permanent,
    Protocol,
}

/// Failure of a single remote generation attempt.
///
/// Never escapes `ReframeService::reframe`; the chain absorbs every kind by
/// advancing to the next provider.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{}", self.render())]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub retryable: bool,
    pub provider_id: Option<ProviderId>,
    pub http_status: Option<u16>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: matches!(
                kind,
                ProviderErrorKind::RateLimited
                    | ProviderErrorKind::Timeout
                    | ProviderErrorKind::Transient
            ),
            provider_id: None,
            http_status: None,
        }
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = Some(provider_id.into());
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    fn render(&self) -> String {
        match (&self.provider_id, self.http_status) {
            (Some(provider_id), Some(status)) => {
                format!("{} (provider={}, status={})", self.message, provider_id, status)
            }
            (Some(provider_id), None) => format!("{} (provider={})", self.message, provider_id),
            (None, Some(status)) => format!("{} (status={})", self.message, status),
            (None, None) => self.message.clone(),
        }
    }
}

pub fn invalid_config(message: impl Into<String>) -> ProviderError {
    ProviderError::new(ProviderErrorKind::InvalidConfig, message).with_retryable(false)
}

pub fn protocol_violation(message: impl Into<String>) -> ProviderError {
    ProviderError::new(ProviderErrorKind::Protocol, message).with_retryable(false)
}
