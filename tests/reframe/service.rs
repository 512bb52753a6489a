use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use reframer::reframe::error::{ProviderError, ProviderErrorKind};
use reframer::reframe::providers::GenerationProvider;
use reframer::reframe::service::ReframeService;
use reframer::reframe::types::{ReframeRequest, ThoughtCategory};

struct FailingProvider {
    id: &'static str,
    kind: ProviderErrorKind,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationProvider for FailingProvider {
    fn id(&self) -> &str {
        self.id
    }

    async fn generate(&self, _request: &ReframeRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::new(self.kind, "simulated failure").with_provider_id(self.id))
    }
}

struct FixedTextProvider {
    id: &'static str,
    text: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationProvider for FixedTextProvider {
    fn id(&self) -> &str {
        self.id
    }

    async fn generate(&self, _request: &ReframeRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.to_string())
    }
}

struct HangingProvider {
    id: &'static str,
}

#[async_trait]
impl GenerationProvider for HangingProvider {
    fn id(&self) -> &str {
        self.id
    }

    async fn generate(&self, _request: &ReframeRequest) -> Result<String, ProviderError> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok("never reached".to_string())
    }
}

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

#[tokio::test]
async fn given_all_providers_failing_then_a_local_response_is_still_produced() {
    let service = ReframeService::local_only().with_providers(vec![
        Arc::new(FailingProvider {
            id: "remote-a",
            kind: ProviderErrorKind::Timeout,
            calls: counter(),
        }),
        Arc::new(FailingProvider {
            id: "remote-b",
            kind: ProviderErrorKind::Transient,
            calls: counter(),
        }),
    ]);

    let response = service
        .reframe(ReframeRequest::new("I always ruin everything", 7))
        .await;
    assert!(!response.reframed_text.trim().is_empty());
    assert!(response.reframed_text.chars().count() > 10);
    assert_eq!(response.confidence, 8);
}

#[tokio::test]
async fn given_a_timeout_then_a_nine_char_reply_then_the_chain_reaches_the_composer() {
    // Provider A times out; provider B answers below the quality floor.
    let b_calls = counter();
    let service = ReframeService::local_only().with_providers(vec![
        Arc::new(FailingProvider {
            id: "remote-a",
            kind: ProviderErrorKind::Timeout,
            calls: counter(),
        }),
        Arc::new(FixedTextProvider {
            id: "remote-b",
            text: "too short",
            calls: b_calls.clone(),
        }),
    ]);

    let response = service
        .reframe(ReframeRequest::new("I will fail the interview", 8))
        .await;
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.confidence, 8, "composer path expected, not normalizer");
}

#[tokio::test]
async fn given_a_healthy_first_provider_then_later_providers_are_never_consulted() {
    let a_calls = counter();
    let b_calls = counter();
    let service = ReframeService::local_only().with_providers(vec![
        Arc::new(FixedTextProvider {
            id: "remote-a",
            text: "Setbacks like this one are information, not a verdict on who you are.",
            calls: a_calls.clone(),
        }),
        Arc::new(FixedTextProvider {
            id: "remote-b",
            text: "unused",
            calls: b_calls.clone(),
        }),
    ]);

    let response = service
        .reframe(ReframeRequest::new("I messed up at work", 5).with_category(ThoughtCategory::Work))
        .await;
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    assert_eq!(response.confidence, 7);
    assert!(response.reframed_text.contains("information"));
    assert!(response.action_steps.len() <= 4);
}

#[tokio::test]
async fn given_an_echo_only_provider_then_the_next_provider_is_tried() {
    // Provider A passes the raw-length floor but degenerates once the echo
    // is stripped; provider B should win with remote confidence.
    let service = ReframeService::local_only().with_providers(vec![
        Arc::new(FixedTextProvider {
            id: "remote-a",
            text: "\"I keep disappointing everyone around me\"",
            calls: counter(),
        }),
        Arc::new(FixedTextProvider {
            id: "remote-b",
            text: "Disappointing someone once is an event, not your identity; repair is available.",
            calls: counter(),
        }),
    ]);

    let response = service
        .reframe(ReframeRequest::new("I keep disappointing everyone around me", 6))
        .await;
    assert_eq!(response.confidence, 7);
    assert!(response.reframed_text.starts_with("Disappointing someone once"));
}

#[tokio::test]
async fn given_a_hanging_provider_then_the_orchestrator_budget_advances_the_chain() {
    let b_calls = counter();
    let service = ReframeService::local_only()
        .with_attempt_timeout(std::time::Duration::from_millis(50))
        .with_providers(vec![
            Arc::new(HangingProvider { id: "remote-a" }),
            Arc::new(FixedTextProvider {
                id: "remote-b",
                text: "A stalled answer elsewhere says nothing about what you can do next.",
                calls: b_calls.clone(),
            }),
        ]);

    let response = service
        .reframe(ReframeRequest::new("nobody will ever reply to me", 6))
        .await;
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.confidence, 7);
}

#[tokio::test]
async fn given_no_providers_then_the_local_path_serves_directly() {
    let service = ReframeService::local_only();
    let response = service.reframe(ReframeRequest::new("ok", 3)).await;
    assert!(!response.reframed_text.trim().is_empty());
    assert!(response.distortions.is_empty());
    assert_eq!(response.confidence, 8);
}

#[tokio::test]
async fn given_concurrent_calls_then_each_resolves_independently() {
    let service = Arc::new(ReframeService::local_only());
    let mut handles = Vec::new();
    for intensity in 1..=10 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .reframe(ReframeRequest::new("I can't handle this", intensity))
                .await
        }));
    }
    for handle in handles {
        let response = handle.await.expect("task should not panic");
        assert!(!response.reframed_text.trim().is_empty());
        assert_eq!(response.confidence, 8);
    }
}
