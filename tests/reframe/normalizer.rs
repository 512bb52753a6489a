use reframer::reframe::normalizer::ResponseNormalizer;
use reframer::reframe::types::{DistortionTag, ReframeRequest, ThoughtCategory};

#[test]
fn given_clean_provider_text_then_a_remote_confidence_response_is_built() {
    let request = ReframeRequest::new("I always mess things up", 6)
        .with_category(ThoughtCategory::SelfImage);
    let raw = "One rough day does not define you; look at what went right this week.";
    let response = ResponseNormalizer
        .normalize(raw, &request)
        .expect("sufficient text should normalize");

    assert_eq!(response.reframed_text, raw);
    assert!(response.reframed_text.chars().count() >= 20);
    assert_eq!(response.confidence, 7);
    // Distortions come from the local detector, never from the provider.
    assert!(response.distortions.contains(&DistortionTag::Overgeneralization));
    assert_eq!(response.action_steps.len(), 4);
    assert!(!response.techniques.is_empty());
}

#[test]
fn given_provider_text_echoing_the_input_then_the_echo_is_stripped() {
    let request = ReframeRequest::new("I am going to fail", 5);
    let raw = "\"I am going to fail\" — but the outcome is not decided yet, and preparation shifts the odds.";
    let response = ResponseNormalizer
        .normalize(raw, &request)
        .expect("text should survive echo stripping");
    assert!(!response.reframed_text.contains("I am going to fail"));
    assert!(response.reframed_text.contains("not decided yet"));
}

#[test]
fn given_text_shorter_than_the_floor_after_cleaning_then_insufficient_is_signaled() {
    let request = ReframeRequest::new("I am going to fail", 5);
    assert!(ResponseNormalizer.normalize("Stay calm.", &request).is_none());
    // An echo with nothing else degenerates to an empty cleaned string.
    assert!(
        ResponseNormalizer
            .normalize("\"I am going to fail\"", &request)
            .is_none()
    );
    assert!(ResponseNormalizer.normalize("", &request).is_none());
}
