use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};

use crate::config::ProviderProfile;
use crate::reframe::error::{ProviderError, protocol_violation};
use crate::reframe::providers::{
    ChatMessage, ChatRole, GenerationProvider, PromptBuilder, PromptPayload, http_common,
    resolve_credential,
};
use crate::reframe::types::ReframeRequest;

/// Remote Provider B: a role-structured chat endpoint.
///
/// Wire shape: `POST {endpoint}/api/chat` with `{"model", "messages",
/// "stream": false, "options"}`; the generated text is `message.content`.
pub struct ChatCompletionProvider {
    profile: ProviderProfile,
    client: Client,
    prompt: Arc<dyn PromptBuilder>,
}

impl ChatCompletionProvider {
    pub fn new(profile: ProviderProfile, client: Client, prompt: Arc<dyn PromptBuilder>) -> Self {
        Self {
            profile,
            client,
            prompt,
        }
    }
}

#[async_trait]
impl GenerationProvider for ChatCompletionProvider {
    fn id(&self) -> &str {
        &self.profile.id
    }

    async fn generate(&self, request: &ReframeRequest) -> Result<String, ProviderError> {
        let messages = match self.prompt.build(request) {
            PromptPayload::Chat(messages) => messages,
            PromptPayload::Plain(prompt) => vec![ChatMessage {
                role: ChatRole::User,
                content: prompt,
            }],
        };

        let url = format!("{}/api/chat", self.profile.endpoint.trim_end_matches('/'));
        let body = json!({
            "model": self.profile.model,
            "messages": messages_to_wire(&messages),
            "stream": false,
            "options": {
                "temperature": self.profile.temperature,
                "num_predict": self.profile.max_tokens,
            }
        });

        let auth_header = resolve_credential(&self.profile.credential, &self.profile.id)?;
        let started_at = Instant::now();
        tracing::debug!(
            target: "reframe.provider",
            provider_id = %self.profile.id,
            model = %self.profile.model,
            url = %url,
            timeout_ms = self.profile.timeout_ms,
            "chat_completion_dispatch"
        );

        let mut req_builder = self
            .client
            .post(url)
            .timeout(Duration::from_millis(self.profile.timeout_ms))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(auth_header) = auth_header {
            req_builder = req_builder.header(header::AUTHORIZATION, auth_header);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|err| http_common::map_transport_error(&err, &self.profile.id))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_common::map_http_error(
                status.as_u16(),
                &self.profile.id,
                &body,
            ));
        }

        let payload = response.json::<Value>().await.map_err(|err| {
            protocol_violation(format!("invalid response payload: {}", err))
                .with_provider_id(&self.profile.id)
        })?;

        let content = payload
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                protocol_violation("response carries no message.content")
                    .with_provider_id(&self.profile.id)
            })?;

        tracing::debug!(
            target: "reframe.provider",
            provider_id = %self.profile.id,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            generated_len = content.len(),
            "chat_completion_completed"
        );
        Ok(content.to_string())
    }
}

fn messages_to_wire(messages: &[ChatMessage]) -> Vec<Value> {
    messages
        .iter()
        .map(|message| {
            json!({
                "role": message.role.as_wire(),
                "content": message.content,
            })
        })
        .collect()
}
