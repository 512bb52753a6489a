use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::reframe::situation::{KeywordSituationClassifier, SituationClassifier};
use crate::reframe::templates::{
    self, IntensityBucket, base_techniques, category_alternatives, category_steps,
    fallback_narrative, intensity_steps, reframe_templates, situation_reframe,
    techniques_for, universal_alternatives,
};
use crate::reframe::types::{
    DistortionTag, LOCAL_TEMPLATE_CONFIDENCE, MAX_ACTION_STEPS, ReframeRequest, ReframeResponse,
    ThoughtCategory, extend_dedup,
};

/// Source of template-variety randomness. Injected so tests can pin a seed
/// and assert exact output.
pub trait TemplatePicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is always >= 1.
    fn pick(&self, len: usize) -> usize;
}

/// Seedable xorshift picker. Interior mutability keeps `pick` usable through
/// a shared reference from concurrent calls.
pub struct SeededPicker {
    state: AtomicU64,
}

impl SeededPicker {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            // Xorshift degenerates on an all-zero state.
            state: AtomicU64::new(seed.max(1)),
        }
    }
}

impl Default for SeededPicker {
    fn default() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
            .unwrap_or(0x9e37_79b9);
        Self::with_seed(nanos)
    }
}

impl TemplatePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut current = self.state.load(Ordering::Relaxed);
        loop {
            let mut next = current;
            next ^= next << 13;
            next ^= next >> 7;
            next ^= next << 17;
            match self.state.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return (next % len.max(1) as u64) as usize,
                Err(observed) => current = observed,
            }
        }
    }
}

/// The terminal, always-successful composition path. Every other component
/// may fail upward into this one; this one never fails.
pub struct ReframeComposer {
    classifier: Arc<dyn SituationClassifier>,
    picker: Arc<dyn TemplatePicker>,
}

impl Default for ReframeComposer {
    fn default() -> Self {
        Self {
            classifier: Arc::new(KeywordSituationClassifier),
            picker: Arc::new(SeededPicker::default()),
        }
    }
}

impl ReframeComposer {
    pub fn new(
        classifier: Arc<dyn SituationClassifier>,
        picker: Arc<dyn TemplatePicker>,
    ) -> Self {
        Self { classifier, picker }
    }

    pub fn with_picker(mut self, picker: Arc<dyn TemplatePicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn compose(
        &self,
        request: &ReframeRequest,
        distortions: &[DistortionTag],
    ) -> ReframeResponse {
        let reframed_text = self.reframed_text(request, distortions);

        tracing::debug!(
            target: "reframe.composer",
            distortions = distortions.len(),
            intensity = request.intensity,
            category = ?request.category,
            "composed_local_reframe"
        );

        ReframeResponse {
            reframed_text,
            distortions: distortions.to_vec(),
            techniques: techniques_for_tags(distortions),
            alternatives: alternatives_for_category(request.category),
            action_steps: action_steps_for(request.intensity, request.category),
            confidence: LOCAL_TEMPLATE_CONFIDENCE,
        }
    }

    fn reframed_text(&self, request: &ReframeRequest, distortions: &[DistortionTag]) -> String {
        // Situation templates encode more specific, empathetic framing than
        // generic technique substitution; they short-circuit everything else.
        if let Some(situation) = self.classifier.classify(&request.text) {
            tracing::debug!(
                target: "reframe.composer",
                situation = ?situation,
                "situation_template_selected"
            );
            return situation_reframe(situation).to_string();
        }

        if let Some(first_tag) = distortions.first() {
            let candidates = reframe_templates(*first_tag);
            let template = candidates[self.picker.pick(candidates.len())];
            return templates::fill(template, &request.text);
        }

        templates::fill(fallback_narrative(request.intensity), &request.text)
    }
}

/// Base techniques plus per-tag specializations, deduplicated in first-seen
/// order. Shared between the composer and the normalizer so remote-derived
/// responses carry identical metadata.
pub fn techniques_for_tags(distortions: &[DistortionTag]) -> Vec<String> {
    let mut techniques: Vec<String> =
        base_techniques().iter().map(|t| t.to_string()).collect();
    for tag in distortions {
        extend_dedup(
            &mut techniques,
            techniques_for(*tag).iter().map(|t| t.to_string()),
        );
    }
    techniques
}

/// Four universal prompts plus the category-specific set (empty when the
/// category is absent or unrecognized).
pub fn alternatives_for_category(category: Option<ThoughtCategory>) -> Vec<String> {
    let mut alternatives: Vec<String> = universal_alternatives()
        .iter()
        .map(|a| a.to_string())
        .collect();
    if let Some(category) = category {
        alternatives.extend(
            category_alternatives(category)
                .iter()
                .map(|a| a.to_string()),
        );
    }
    alternatives
}

/// Intensity-bucket steps first, then category steps, truncated to the cap.
pub fn action_steps_for(intensity: u8, category: Option<ThoughtCategory>) -> Vec<String> {
    let bucket = IntensityBucket::from_intensity(intensity);
    let mut steps: Vec<String> = intensity_steps(bucket)
        .iter()
        .take(MAX_ACTION_STEPS)
        .map(|s| s.to_string())
        .collect();
    if let Some(category) = category {
        steps.extend(category_steps(category).iter().map(|s| s.to_string()));
    }
    steps.truncate(MAX_ACTION_STEPS);
    steps
}
