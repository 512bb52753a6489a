use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::ReframerConfig;
use crate::reframe::composer::ReframeComposer;
use crate::reframe::detector::detect;
use crate::reframe::error::{ProviderError, ProviderErrorKind};
use crate::reframe::normalizer::ResponseNormalizer;
use crate::reframe::providers::{GenerationProvider, build_providers};
use crate::reframe::types::{ReframeRequest, ReframeResponse};

/// Raw provider text at or below this length is a degenerate generation;
/// the chain advances without consulting the normalizer.
const MIN_RAW_LEN: usize = 10;

/// Outer per-attempt budget. Providers carry their own HTTP timeouts; this
/// guard bounds the await point itself so a misbehaving provider cannot
/// delay the local fallback.
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(6);

/// The provider chain orchestrator and sole public entry point.
///
/// Tries remote providers in configured order and falls back to the local
/// composer, which always succeeds. Holds no per-request state: concurrent
/// calls are fully independent, and dropping the returned future cancels the
/// in-flight attempt at its await point with nothing to roll back.
pub struct ReframeService {
    providers: Vec<Arc<dyn GenerationProvider>>,
    normalizer: ResponseNormalizer,
    composer: ReframeComposer,
    attempt_timeout: Duration,
}

impl ReframeService {
    pub fn new(config: &ReframerConfig) -> Self {
        Self {
            providers: build_providers(config),
            normalizer: ResponseNormalizer,
            composer: ReframeComposer::default(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Local-only service; every call answers from the template path.
    pub fn local_only() -> Self {
        Self {
            providers: Vec::new(),
            normalizer: ResponseNormalizer,
            composer: ReframeComposer::default(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_providers(mut self, providers: Vec<Arc<dyn GenerationProvider>>) -> Self {
        self.providers = providers;
        self
    }

    pub fn with_composer(mut self, composer: ReframeComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Produces a reframed response. Total over all inputs: provider
    /// failures of every kind are absorbed by advancing the chain, and the
    /// composer path at the end never fails.
    pub async fn reframe(&self, request: ReframeRequest) -> ReframeResponse {
        let request_id = Uuid::now_v7().to_string();
        let started_at = Instant::now();

        for provider in &self.providers {
            let attempt_started_at = Instant::now();
            let attempt = tokio::time::timeout(self.attempt_timeout, provider.generate(&request))
                .await
                .unwrap_or_else(|_| {
                    Err(ProviderError::new(
                        ProviderErrorKind::Timeout,
                        "attempt exceeded the orchestrator budget",
                    )
                    .with_provider_id(provider.id()))
                });
            match attempt {
                Ok(raw) => {
                    if raw.trim().chars().count() <= MIN_RAW_LEN {
                        tracing::warn!(
                            target: "reframe",
                            request_id = %request_id,
                            provider_id = %provider.id(),
                            raw_len = raw.len(),
                            elapsed_ms = attempt_started_at.elapsed().as_millis() as u64,
                            "provider_below_quality_floor"
                        );
                        continue;
                    }
                    match self.normalizer.normalize(&raw, &request) {
                        Some(response) => {
                            tracing::info!(
                                target: "reframe",
                                request_id = %request_id,
                                provider_id = %provider.id(),
                                confidence = response.confidence,
                                total_elapsed_ms = started_at.elapsed().as_millis() as u64,
                                "reframe_completed_remote"
                            );
                            return response;
                        }
                        None => {
                            tracing::warn!(
                                target: "reframe",
                                request_id = %request_id,
                                provider_id = %provider.id(),
                                elapsed_ms = attempt_started_at.elapsed().as_millis() as u64,
                                "provider_text_insufficient_after_cleaning"
                            );
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        target: "reframe",
                        request_id = %request_id,
                        provider_id = %provider.id(),
                        kind = ?err.kind,
                        elapsed_ms = attempt_started_at.elapsed().as_millis() as u64,
                        error = %err,
                        "provider_attempt_failed"
                    );
                }
            }
        }

        let distortions = detect(&request.text);
        let response = self.composer.compose(&request, &distortions);
        tracing::info!(
            target: "reframe",
            request_id = %request_id,
            distortions = response.distortions.len(),
            confidence = response.confidence,
            total_elapsed_ms = started_at.elapsed().as_millis() as u64,
            "reframe_completed_local"
        );
        response
    }
}
