use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{CredentialRef, ProviderDialect, ProviderProfile, ReframerConfig};
use crate::reframe::error::{ProviderError, ProviderErrorKind};
use crate::reframe::types::{ReframeRequest, ThoughtCategory};

pub mod chat_completion;
pub mod hosted_text;
pub mod http_common;

/// A single remote text-generation backend. Returns raw generated text; all
/// parsing into the canonical response shape happens in the normalizer.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    fn id(&self) -> &str;
    async fn generate(&self, request: &ReframeRequest) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

impl ChatRole {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Provider-specific prompt shape.
#[derive(Debug, Clone)]
pub enum PromptPayload {
    Plain(String),
    Chat(Vec<ChatMessage>),
}

/// Each provider carries its own prompt-construction convention; keeping it
/// behind a trait isolates the formatting and makes it swappable.
pub trait PromptBuilder: Send + Sync {
    fn build(&self, request: &ReframeRequest) -> PromptPayload;
}

/// Single-line instruction prompt for plain-completion endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePromptBuilder;

impl PromptBuilder for SimplePromptBuilder {
    fn build(&self, request: &ReframeRequest) -> PromptPayload {
        let mut prompt = format!(
            "Help me reframe this negative thought: \"{}\". I'm feeling {}/10 intensity. Give me a more balanced perspective.",
            request.text, request.intensity
        );
        if let Some(context) = &request.context {
            prompt.push_str(&format!(" Context: {}.", context));
        }
        PromptPayload::Plain(prompt)
    }
}

/// CBT-specialist framing: a system role plus a structured user message.
#[derive(Debug, Default, Clone, Copy)]
pub struct CbtChatPromptBuilder;

impl PromptBuilder for CbtChatPromptBuilder {
    fn build(&self, request: &ReframeRequest) -> PromptPayload {
        let category = request
            .category
            .map(category_label)
            .unwrap_or("unspecified");
        let mut user = format!(
            "Help me reframe this negative thought using CBT techniques:\n\nThought: \"{}\"\nCategory: {}\nEmotion intensity: {}/10\n",
            request.text, category, request.intensity
        );
        if let Some(context) = &request.context {
            user.push_str(&format!("Context: {}\n", context));
        }
        user.push_str("\nRespond with a reframed, balanced perspective. Keep it supportive and professional.");

        PromptPayload::Chat(vec![
            ChatMessage {
                role: ChatRole::System,
                content: "You are a cognitive behavioral therapy expert helping a user reframe negative thoughts.".to_string(),
            },
            ChatMessage {
                role: ChatRole::User,
                content: user,
            },
        ])
    }
}

fn category_label(category: ThoughtCategory) -> &'static str {
    match category {
        ThoughtCategory::Work => "work",
        ThoughtCategory::Relationships => "relationships",
        ThoughtCategory::Health => "health",
        ThoughtCategory::SelfImage => "self-image",
        ThoughtCategory::Future => "future",
        ThoughtCategory::PastRegrets => "past regrets",
        ThoughtCategory::DailyStressors => "daily stressors",
        ThoughtCategory::Social => "social",
        ThoughtCategory::Other => "other",
    }
}

/// Resolves a credential reference into an `Authorization` header value.
pub fn resolve_credential(
    credential: &CredentialRef,
    provider_id: &str,
) -> Result<Option<String>, ProviderError> {
    match credential {
        CredentialRef::None => Ok(None),
        CredentialRef::InlineToken { token } => Ok(Some(format!("Bearer {}", token))),
        CredentialRef::Env { var } => match std::env::var(var) {
            Ok(token) if !token.trim().is_empty() => Ok(Some(format!("Bearer {}", token))),
            _ => Err(ProviderError::new(
                ProviderErrorKind::Authentication,
                format!("credential env var '{}' is unset or empty", var),
            )
            .with_retryable(false)
            .with_provider_id(provider_id)),
        },
    }
}

/// Builds the provider chain in config order, sharing one HTTP client.
pub fn build_providers(config: &ReframerConfig) -> Vec<Arc<dyn GenerationProvider>> {
    let client = Client::builder()
        .pool_idle_timeout(Duration::from_secs(30))
        .build()
        .expect("reqwest client must build");

    config
        .providers
        .iter()
        .map(|profile| build_provider(profile.clone(), client.clone()))
        .collect()
}

fn build_provider(profile: ProviderProfile, client: Client) -> Arc<dyn GenerationProvider> {
    match profile.dialect {
        ProviderDialect::HostedText => Arc::new(hosted_text::HostedTextProvider::new(
            profile,
            client,
            Arc::new(SimplePromptBuilder),
        )),
        ProviderDialect::ChatCompletion => Arc::new(
            chat_completion::ChatCompletionProvider::new(
                profile,
                client,
                Arc::new(CbtChatPromptBuilder),
            ),
        ),
    }
}
