use std::sync::Arc;

use reframer::reframe::composer::{ReframeComposer, SeededPicker};
use reframer::reframe::detector::detect;
use reframer::reframe::templates::{fill, reframe_templates};
use reframer::reframe::types::{DistortionTag, ReframeRequest, ThoughtCategory};

fn seeded_composer(seed: u64) -> ReframeComposer {
    ReframeComposer::default().with_picker(Arc::new(SeededPicker::with_seed(seed)))
}

#[test]
fn given_the_worked_example_then_the_self_blame_template_set_is_used() {
    let request = ReframeRequest::new("I always fail at everything, I'm such an idiot", 7)
        .with_category(ThoughtCategory::SelfImage);
    let distortions = detect(&request.text);
    let response = seeded_composer(11).compose(&request, &distortions);

    let candidates: Vec<String> = reframe_templates(DistortionTag::SelfBlame)
        .iter()
        .map(|template| fill(template, &request.text))
        .collect();
    assert!(
        candidates.contains(&response.reframed_text),
        "expected a self-blame template, got: {}",
        response.reframed_text
    );
    assert_eq!(response.action_steps.len(), 4);
    assert_eq!(response.confidence, 8);
    assert!(response.distortions.contains(&DistortionTag::Overgeneralization));
    assert!(response.distortions.contains(&DistortionTag::SelfBlame));
}

#[test]
fn given_no_distortions_and_low_intensity_then_the_low_narrative_is_used() {
    let request = ReframeRequest::new("ok", 3);
    let response = seeded_composer(1).compose(&request, &[]);
    assert!(!response.reframed_text.trim().is_empty());
    assert!(response.reframed_text.chars().count() > 10);
    assert!(response.reframed_text.contains("\"ok\""));
    assert!(response.distortions.is_empty());
    assert_eq!(response.confidence, 8);
}

#[test]
fn given_high_intensity_without_distortions_then_the_grounding_narrative_is_used() {
    let request = ReframeRequest::new("something vague", 9);
    let response = seeded_composer(1).compose(&request, &[]);
    assert!(response.reframed_text.contains("look after yourself"));

    let medium = seeded_composer(1).compose(&ReframeRequest::new("something vague", 6), &[]);
    assert!(medium.reframed_text.contains("not the whole of reality"));
}

#[test]
fn given_a_fixed_seed_then_composition_is_reproducible() {
    let request = ReframeRequest::new("I'm such an idiot", 5);
    let distortions = detect(&request.text);
    let first = seeded_composer(42).compose(&request, &distortions);
    let second = seeded_composer(42).compose(&request, &distortions);
    assert_eq!(first.reframed_text, second.reframed_text);
}

#[test]
fn given_overlapping_technique_sets_then_techniques_carry_no_duplicates() {
    // SelfBlame and Personalization both contribute "Spreading responsibility".
    let request = ReframeRequest::new("x", 5);
    let response = seeded_composer(3).compose(
        &request,
        &[DistortionTag::SelfBlame, DistortionTag::Personalization],
    );
    let mut seen = response.techniques.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), response.techniques.len(), "{:?}", response.techniques);
    assert!(
        response
            .techniques
            .iter()
            .filter(|t| t.as_str() == "Spreading responsibility")
            .count()
            == 1
    );
}

#[test]
fn given_a_category_then_action_steps_are_capped_at_four() {
    // Four intensity steps plus three category steps are available to merge.
    let request = ReframeRequest::new("deadline pressure", 6).with_category(ThoughtCategory::Work);
    let response = seeded_composer(5).compose(&request, &[]);
    assert_eq!(response.action_steps.len(), 4);
}

#[test]
fn given_a_category_then_alternatives_mix_universal_and_category_prompts() {
    let request = ReframeRequest::new("x", 4).with_category(ThoughtCategory::Relationships);
    let response = seeded_composer(5).compose(&request, &[]);
    assert_eq!(response.alternatives.len(), 8);

    let without_category = seeded_composer(5).compose(&ReframeRequest::new("x", 4), &[]);
    assert_eq!(without_category.alternatives.len(), 4);

    let other = seeded_composer(5).compose(
        &ReframeRequest::new("x", 4).with_category(ThoughtCategory::Other),
        &[],
    );
    assert_eq!(other.alternatives.len(), 4);
}

#[test]
fn given_varying_seeds_then_every_candidate_template_is_reachable() {
    let request = ReframeRequest::new("I'm such an idiot", 5);
    let distortions = detect(&request.text);
    let candidates = reframe_templates(DistortionTag::SelfBlame).len();
    let mut seen = std::collections::HashSet::new();
    for seed in 0..256 {
        let response = seeded_composer(seed + 1).compose(&request, &distortions);
        seen.insert(response.reframed_text);
    }
    assert_eq!(seen.len(), candidates);
}
