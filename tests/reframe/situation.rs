use std::sync::Arc;

use reframer::reframe::composer::{ReframeComposer, SeededPicker};
use reframer::reframe::detector::detect;
use reframer::reframe::situation::{
    KeywordSituationClassifier, SituationClassifier, SituationTag,
};
use reframer::reframe::templates::situation_reframe;
use reframer::reframe::types::{DistortionTag, ReframeRequest, ThoughtCategory};

#[test]
fn given_situation_and_distortion_vocabulary_then_the_situation_template_wins() {
    // Catastrophizing words are present, but the recognized life situation
    // must short-circuit distortion-based templating.
    let text = "My girlfriend is moving abroad and everything is ruined, this is a disaster";
    assert!(detect(text).contains(&DistortionTag::Catastrophizing));

    let request = ReframeRequest::new(text, 9).with_category(ThoughtCategory::Relationships);
    let composer =
        ReframeComposer::default().with_picker(Arc::new(SeededPicker::with_seed(17)));
    let response = composer.compose(&request, &detect(text));

    assert_eq!(
        response.reframed_text,
        situation_reframe(SituationTag::LongDistanceRelationship)
    );
    // Distortion metadata is still reported even when the narrative is
    // situation-specific.
    assert!(response.distortions.contains(&DistortionTag::Catastrophizing));
    assert_eq!(response.confidence, 8);
}

#[test]
fn given_a_job_rejection_then_its_dedicated_narrative_is_served() {
    let request = ReframeRequest::new("I got rejected after the job interview again", 7);
    let composer = ReframeComposer::default();
    let response = composer.compose(&request, &detect(&request.text));
    assert_eq!(
        response.reframed_text,
        situation_reframe(SituationTag::JobRejection)
    );
}

#[test]
fn given_an_academic_setback_then_its_dedicated_narrative_is_served() {
    let classifier = KeywordSituationClassifier;
    assert_eq!(
        classifier.classify("I failed the exam I studied weeks for"),
        Some(SituationTag::AcademicSetback)
    );
}

#[test]
fn given_no_recognized_situation_then_classification_is_none() {
    let classifier = KeywordSituationClassifier;
    assert_eq!(classifier.classify("I always ruin everything"), None);
    assert_eq!(classifier.classify(""), None);
}
