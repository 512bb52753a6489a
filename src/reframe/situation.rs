//! Life-situation classification.
//!
//! Certain common situations (a partner moving away, a job rejection, a
//! failed exam) warrant a qualitatively different, situation-aware response
//! than generic distortion templating. The matching strategy sits behind a
//! trait so it can evolve (substring, regex, a future learned classifier)
//! without touching the composer's control flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SituationTag {
    LongDistanceRelationship,
    JobRejection,
    AcademicSetback,
}

pub trait SituationClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Option<SituationTag>;
}

/// Default classifier: lower-cased bilingual substring matching. A situation
/// is recognized only when both a topic word and an outcome word are present.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordSituationClassifier;

impl KeywordSituationClassifier {
    const RELATIONSHIP_TOPIC: &'static [&'static str] = &[
        "girlfriend",
        "boyfriend",
        "partner",
        "여자친구",
        "남자친구",
        "애인",
        "롱디",
        "장거리",
    ];
    const RELATIONSHIP_DISTANCE: &'static [&'static str] = &[
        "abroad",
        "moving away",
        "moving abroad",
        "long distance",
        "far away",
        "leaving",
        "해외",
        "멀리",
        "떠나",
        "롱디",
    ];

    const JOB_TOPIC: &'static [&'static str] = &[
        "interview",
        "job",
        "company",
        "면접",
        "취업",
        "회사",
        "직장",
    ];
    const JOB_OUTCOME: &'static [&'static str] = &[
        "rejected",
        "rejection",
        "didn't get",
        "turned down",
        "failed",
        "불합격",
        "떨어",
        "실패",
    ];

    const ACADEMIC_TOPIC: &'static [&'static str] =
        &["exam", "test", "grade", "study", "시험", "성적", "공부"];
    const ACADEMIC_OUTCOME: &'static [&'static str] = &[
        "failed",
        "fail",
        "bombed",
        "didn't pass",
        "망했",
        "못했",
        "떨어",
    ];

    fn contains_any(text: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| text.contains(keyword))
    }
}

impl SituationClassifier for KeywordSituationClassifier {
    fn classify(&self, text: &str) -> Option<SituationTag> {
        let text = text.to_lowercase();

        if Self::contains_any(&text, Self::RELATIONSHIP_TOPIC)
            && Self::contains_any(&text, Self::RELATIONSHIP_DISTANCE)
        {
            return Some(SituationTag::LongDistanceRelationship);
        }

        if Self::contains_any(&text, Self::JOB_TOPIC)
            && Self::contains_any(&text, Self::JOB_OUTCOME)
        {
            return Some(SituationTag::JobRejection);
        }

        if Self::contains_any(&text, Self::ACADEMIC_TOPIC)
            && Self::contains_any(&text, Self::ACADEMIC_OUTCOME)
        {
            return Some(SituationTag::AcademicSetback);
        }

        None
    }
}
