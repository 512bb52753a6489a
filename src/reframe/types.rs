use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

pub type ProviderId = String;
pub type RequestId = String;

/// Confidence reported for responses composed entirely from local templates.
pub const LOCAL_TEMPLATE_CONFIDENCE: u8 = 8;
/// Confidence reported for responses derived from remote provider text.
pub const REMOTE_PARSED_CONFIDENCE: u8 = 7;
/// Hard cap on `action_steps` regardless of how many candidates merge.
pub const MAX_ACTION_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThoughtCategory {
    Work,
    Relationships,
    Health,
    SelfImage,
    Future,
    PastRegrets,
    DailyStressors,
    Social,
    Other,
}

/// Closed set of cognitive-distortion tags.
///
/// Declaration order is the detection-table order and therefore the tie-break
/// used when only the first matching tag's template can be chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DistortionTag {
    Catastrophizing,
    AllOrNothing,
    SelfBlame,
    NegativePrediction,
    Overgeneralization,
    MindReading,
    EmotionalReasoning,
    Personalization,
}

impl DistortionTag {
    pub const ALL: [DistortionTag; 8] = [
        DistortionTag::Catastrophizing,
        DistortionTag::AllOrNothing,
        DistortionTag::SelfBlame,
        DistortionTag::NegativePrediction,
        DistortionTag::Overgeneralization,
        DistortionTag::MindReading,
        DistortionTag::EmotionalReasoning,
        DistortionTag::Personalization,
    ];
}

/// Immutable input for a single reframing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeRequest {
    pub text: String,
    #[serde(default)]
    pub category: Option<ThoughtCategory>,
    /// Self-reported emotional intensity, 1..=10.
    pub intensity: u8,
    /// Free-text user context, forwarded to remote providers only.
    #[serde(default)]
    pub context: Option<String>,
}

impl ReframeRequest {
    pub fn new(text: impl Into<String>, intensity: u8) -> Self {
        Self {
            text: text.into(),
            category: None,
            intensity,
            context: None,
        }
    }

    pub fn with_category(mut self, category: ThoughtCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Immutable output of a reframing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeResponse {
    pub reframed_text: String,
    pub distortions: Vec<DistortionTag>,
    /// Deduplicated, first-seen order preserved.
    pub techniques: Vec<String>,
    pub alternatives: Vec<String>,
    /// At most [`MAX_ACTION_STEPS`] entries.
    pub action_steps: Vec<String>,
    /// Coarse provenance signal, 0..=10.
    pub confidence: u8,
}

/// Flattened thought + reframe pair as the journaling caller persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeRecord {
    pub id: Uuid,
    pub created_at: String,
    pub request: ReframeRequest,
    pub response: ReframeResponse,
    /// True when the reframed text came from a remote provider rather than
    /// the local template path.
    pub ai_generated: bool,
}

impl ReframeRecord {
    pub fn new(request: ReframeRequest, response: ReframeResponse) -> Self {
        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| OffsetDateTime::now_utc().unix_timestamp().to_string());
        let ai_generated = response.confidence == REMOTE_PARSED_CONFIDENCE;
        Self {
            id: Uuid::now_v7(),
            created_at,
            request,
            response,
            ai_generated,
        }
    }
}

/// Appends `candidates` to `acc`, skipping entries already present.
pub(crate) fn extend_dedup(acc: &mut Vec<String>, candidates: impl IntoIterator<Item = String>) {
    for candidate in candidates {
        if !acc.iter().any(|existing| existing == &candidate) {
            acc.push(candidate);
        }
    }
}
