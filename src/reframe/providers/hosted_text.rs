use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};

use crate::config::ProviderProfile;
use crate::reframe::error::{ProviderError, protocol_violation};
use crate::reframe::providers::{
    GenerationProvider, PromptBuilder, PromptPayload, http_common, resolve_credential,
};
use crate::reframe::types::ReframeRequest;

/// Remote Provider A: a hosted inference endpoint taking a plain prompt.
///
/// Wire shape: `POST {endpoint}/models/{model}` with
/// `{"inputs": ..., "parameters": {...}}`; the generated text comes back
/// either as `{"generated_text": ...}` or wrapped in a one-element array.
pub struct HostedTextProvider {
    profile: ProviderProfile,
    client: Client,
    prompt: Arc<dyn PromptBuilder>,
}

impl HostedTextProvider {
    pub fn new(profile: ProviderProfile, client: Client, prompt: Arc<dyn PromptBuilder>) -> Self {
        Self {
            profile,
            client,
            prompt,
        }
    }
}

#[async_trait]
impl GenerationProvider for HostedTextProvider {
    fn id(&self) -> &str {
        &self.profile.id
    }

    async fn generate(&self, request: &ReframeRequest) -> Result<String, ProviderError> {
        let prompt = match self.prompt.build(request) {
            PromptPayload::Plain(prompt) => prompt,
            PromptPayload::Chat(messages) => messages
                .into_iter()
                .map(|message| message.content)
                .collect::<Vec<_>>()
                .join("\n"),
        };

        let url = format!(
            "{}/models/{}",
            self.profile.endpoint.trim_end_matches('/'),
            self.profile.model
        );
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_length": self.profile.max_tokens,
                "temperature": self.profile.temperature,
                "do_sample": true,
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
            "hosted_text_dispatch"
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

        let generated = extract_generated_text(&payload).ok_or_else(|| {
            protocol_violation("response carries no generated_text")
                .with_provider_id(&self.profile.id)
        })?;

        tracing::debug!(
            target: "reframe.provider",
            provider_id = %self.profile.id,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            generated_len = generated.len(),
            "hosted_text_completed"
        );
        Ok(generated)
    }
}

fn extract_generated_text(payload: &Value) -> Option<String> {
    if let Some(text) = payload.get("generated_text").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    payload
        .as_array()
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.get("generated_text"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
