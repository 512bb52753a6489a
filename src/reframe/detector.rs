use std::sync::OnceLock;

use regex::Regex;

use crate::reframe::types::DistortionTag;

/// Ordered pattern table. Table order is the priority order downstream
/// consumers rely on when only one tag's template can be chosen.
///
/// Vocabulary is bilingual (English and Korean) because the journaling app
/// this core serves accepts thoughts in both languages. Patterns are not
/// mutually exclusive; a single thought can carry several distortions.
fn pattern_table() -> &'static [(DistortionTag, Regex)] {
    static TABLE: OnceLock<Vec<(DistortionTag, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entries: &[(DistortionTag, &str)] = &[
            (
                DistortionTag::Catastrophizing,
                r"(?i)terrible|awful|catastroph|disaster|horrible|ruined|end of the world|끔찍|재앙|망했|죽겠|최악",
            ),
            (
                DistortionTag::AllOrNothing,
                r"(?i)\bnever\b|\bcompletely\b|\btotally\b|\bentirely\b|all[- ]or[- ]nothing|절대|전혀|완전히|전부",
            ),
            (
                DistortionTag::SelfBlame,
                r"(?i)my fault|because of me|\bstupid\b|\bidiot\b|hate myself|worthless|내 탓|나 때문|내가 잘못|바보|멍청",
            ),
            (
                DistortionTag::NegativePrediction,
                r"(?i)\bcan'?t\b|\bcannot\b|impossible|\bunable\b|will fail|won'?t work|no point|못해|할 수 없|불가능|실패할|안 될",
            ),
            (
                DistortionTag::Overgeneralization,
                r"(?i)\balways\b|every time|\beverything\b|nothing ever|\btypical\b|항상|매번|맨날|언제나|역시",
            ),
            (
                DistortionTag::MindReading,
                r"(?i)they (must )?think|everyone thinks|(she|he) thinks|judging me|laughing at me|생각할 거야|느낄 거야|판단할",
            ),
            (
                DistortionTag::EmotionalReasoning,
                r"(?i)i feel like|because i feel|it feels like|느끼니까|기분이|감정이",
            ),
            (
                DistortionTag::Personalization,
                r"(?i)my responsibility|all because of me|i caused|내 책임|나 때문에",
            ),
        ];
        entries
            .iter()
            .map(|(tag, pattern)| {
                let regex = Regex::new(pattern).unwrap_or_else(|err| {
                    // Patterns are compile-time constants; a bad one is a bug.
                    panic!("invalid distortion pattern for {:?}: {}", tag, err)
                });
                (*tag, regex)
            })
            .collect()
    })
}

/// Detects cognitive-distortion patterns in `text`.
///
/// Pure and deterministic: the same text always yields the same ordered tag
/// sequence. Empty input yields an empty sequence.
pub fn detect(text: &str) -> Vec<DistortionTag> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    pattern_table()
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(tag, _)| *tag)
        .collect()
}
