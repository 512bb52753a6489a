use crate::reframe::composer::{
    action_steps_for, alternatives_for_category, techniques_for_tags,
};
use crate::reframe::detector::detect;
use crate::reframe::types::{REMOTE_PARSED_CONFIDENCE, ReframeRequest, ReframeResponse};

/// Minimum length of cleaned provider text. Anything shorter is treated as
/// a degenerate generation and the chain falls through to the composer.
const MIN_CLEANED_LEN: usize = 20;

/// Parses and cleans raw remote-provider output into the canonical response
/// shape. `None` is the "insufficient" signal, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn normalize(&self, raw: &str, request: &ReframeRequest) -> Option<ReframeResponse> {
        let cleaned = strip_echo(raw, &request.text);

        if cleaned.chars().count() < MIN_CLEANED_LEN {
            tracing::debug!(
                target: "reframe.normalizer",
                raw_len = raw.len(),
                cleaned_len = cleaned.len(),
                "provider_text_insufficient"
            );
            return None;
        }

        // Distortions and enrichment are always computed locally; providers
        // are not trusted to self-report them reliably.
        let distortions = detect(&request.text);
        Some(ReframeResponse {
            reframed_text: cleaned,
            techniques: techniques_for_tags(&distortions),
            alternatives: alternatives_for_category(request.category),
            action_steps: action_steps_for(request.intensity, request.category),
            distortions,
            confidence: REMOTE_PARSED_CONFIDENCE,
        })
    }
}

/// Removes verbatim echoes of the original input (bare and quoted) and
/// surrounding whitespace. Providers frequently open by repeating the prompt.
fn strip_echo(raw: &str, original: &str) -> String {
    let mut cleaned = raw.to_string();
    if !original.trim().is_empty() {
        for needle in [
            format!("\"{}\"", original),
            format!("'{}'", original),
            original.to_string(),
        ] {
            cleaned = cleaned.replace(&needle, "");
        }
    }
    cleaned.trim().to_string()
}
