//! Static template bank: distortion reframes, situation narratives,
//! category prompts and steps, and intensity-bucket material.
//!
//! Every lookup is total; an unknown or absent key yields an empty slice and
//! the caller falls through to the next composition stage.

use crate::reframe::situation::SituationTag;
use crate::reframe::types::{DistortionTag, ThoughtCategory};

/// Placeholder substituted with the original thought text.
const THOUGHT_PLACEHOLDER: &str = "{thought}";

pub fn fill(template: &str, thought: &str) -> String {
    template.replace(THOUGHT_PLACEHOLDER, thought)
}

/// Candidate reframe templates per distortion tag, 2-3 each.
pub fn reframe_templates(tag: DistortionTag) -> &'static [&'static str] {
    match tag {
        DistortionTag::Catastrophizing => &[
            "\"{thought}\" — that thought is weighing on you. But pause for a moment: is this situation truly an irreversible catastrophe? Think of the resilience that carried you through every difficulty so far. This is one more challenge you can work through.",
            "Re-evaluating the situation: it is hard, but it is not the worst case. Experiences like this build strength, and next time something similar happens you will be better prepared to handle it.",
            "The feeling behind \"{thought}\" is understandable. Remember that this moment's difficulty is not permanent — circumstances change with time, and you will grow through this.",
        ],
        DistortionTag::AllOrNothing => &[
            "In \"{thought}\" there are words like 'always', 'never', 'completely'. Very little in life splits cleanly into black and white. There is a gray zone, and partial success still counts as meaningful progress.",
            "Not everything is either perfect or a total failure. Small steps forward are real growth, and partial wins have value. Give the in-between achievements the credit they deserve.",
            "Stepping out of black-and-white thinking: even this situation has an upside and something to learn. Imperfect does not mean worthless.",
        ],
        DistortionTag::SelfBlame => &[
            "You are being very hard on yourself. If your closest friend were struggling with the same situation, what would you say to them? You would offer warmth and understanding — extend that same kindness to yourself.",
            "Mistakes are human, and they are how we grow. You blame yourself with \"{thought}\", but this experience will help you choose better next time. Forgive yourself and focus on what it taught you.",
            "Not all of the responsibility belongs to you. Many factors shape a situation. Focus on the parts you can control, and practice accepting the parts you cannot.",
        ],
        DistortionTag::NegativePrediction => &[
            "With \"{thought}\" you are predicting the future — but the future has not happened yet. Haven't past worries often turned out better than expected? Stay with the present and do the best you can now.",
            "Don't reserve the forecast for bad outcomes only; leave room for the good ones. Trust your effort and ability, and focus on the actions that make a good result more likely.",
            "Rather than anxiety about what might happen, focus on what you can do right now. Small actions add up to real, positive change.",
        ],
        DistortionTag::Overgeneralization => &[
            "One experience does not decide everything. You think \"{thought}\", but there have certainly been times you succeeded too. This one event is just this one event — not a verdict on all of your ability.",
            "Don't judge the whole from this single situation. You have many sides and many possibilities. Recall your earlier wins and strengths.",
            "Instead of seeing one pattern everywhere, zoom out. There is always room for change and growth, and a new attempt can produce a different outcome.",
        ],
        DistortionTag::MindReading => &[
            "\"{thought}\" assumes you know what others are thinking — but nobody can read minds. People are usually absorbed in their own concerns. Until someone tells you directly, treat your guess as a guess, not a fact.",
            "Before concluding what others think of you, look for actual evidence. Ask, or wait for real signals. Most of the judgments we fear exist mainly in our own heads.",
        ],
        DistortionTag::EmotionalReasoning => &[
            "Feeling something strongly does not make it true. \"{thought}\" describes an emotion, not a fact about the world. Name the feeling, then check the evidence separately.",
            "Emotions are real signals worth listening to, but they are weather, not a map. Let the feeling pass through, and then look at the situation again with fresh eyes.",
        ],
        DistortionTag::Personalization => &[
            "You are taking responsibility for more than your share. Outcomes almost always have many causes — other people, timing, plain chance. Sort out which part was genuinely yours, and let go of the rest.",
            "Not everything that goes wrong around you happens because of you. Step back and list the other forces at play; the weight on your shoulders is rarely all yours to carry.",
        ],
    }
}

/// Full situation-specific narratives. These bypass distortion templating
/// because the concrete situation warrants a more specific response than
/// generic technique substitution.
pub fn situation_reframe(tag: SituationTag) -> &'static str {
    match tag {
        SituationTag::LongDistanceRelationship => {
            "It hurts that someone you love is moving far away, and that sadness is completely natural — you are being separated from a person who matters to you. But a long-distance relationship can also deepen what you have: missing each other makes the love more precious, and the joy of meeting again will be greater for it. Video calls and messages keep you connected every day, and you each gain time to grow on your own. It will be hard, but the two of you can let the love outlast the distance."
        }
        SituationTag::JobRejection => {
            "Not getting the result you hoped for from a job search or interview is genuinely discouraging. But this outcome is not a measure of your worth or ability. Hiring depends on countless variables, and sometimes it comes down to luck or timing. This round sharpened your interview skills, and you will do better with the next opportunity."
        }
        SituationTag::AcademicSetback => {
            "It is disappointing not to get the result you wanted from an exam or your studies. But one test result does not decide everything about you. A setback is part of learning — it shows you exactly where to focus next, and that knowledge is something you did not have before."
        }
    }
}

/// Base CBT techniques applied to every composed response.
pub fn base_techniques() -> &'static [&'static str] {
    &["Reality check", "Perspective shift", "Emotion awareness"]
}

/// Specialized techniques per distortion tag. Overlap across tags is
/// intentional; the composer deduplicates.
pub fn techniques_for(tag: DistortionTag) -> &'static [&'static str] {
    match tag {
        DistortionTag::Catastrophizing => &[
            "Best/worst/realistic scenario",
            "Probabilistic thinking",
            "Recalling past experience",
        ],
        DistortionTag::AllOrNothing => &[
            "Finding the gray zone",
            "Crediting partial success",
            "Continuum thinking",
        ],
        DistortionTag::SelfBlame => &[
            "Being your own friend",
            "Spreading responsibility",
            "Normalizing mistakes",
        ],
        DistortionTag::NegativePrediction => {
            &["Evidence gathering", "Behavioral experiment", "Present focus"]
        }
        DistortionTag::Overgeneralization => {
            &["Finding exceptions", "Pattern analysis", "Acknowledging variety"]
        }
        DistortionTag::MindReading => &["Evidence gathering", "Checking assumptions directly"],
        DistortionTag::EmotionalReasoning => {
            &["Naming the emotion", "Separating feeling from fact"]
        }
        DistortionTag::Personalization => &["Spreading responsibility", "Attribution review"],
    }
}

/// Universal perspective-taking prompts included in every response.
pub fn universal_alternatives() -> &'static [&'static str] {
    &[
        "Which parts of this situation can I control, and which do I need to accept?",
        "Six months or a year from now, what will this experience mean to me?",
        "What important lesson is this difficulty teaching me?",
        "If I watched this situation in a book or film, how would the main character grow?",
    ]
}

/// Category-specific perspective prompts, 4 per recognized category.
pub fn category_alternatives(category: ThoughtCategory) -> &'static [&'static str] {
    match category {
        ThoughtCategory::Work => &[
            "How could this work experience sharpen my skills and problem-solving?",
            "Colleagues have faced similar challenges — how did they get through them?",
            "How can I use what this project taught me the next time around?",
            "Even if it wasn't perfect, what valuable parts did I contribute?",
        ],
        ThoughtCategory::Relationships => &[
            "The other person has their own difficulties and point of view — what might that be?",
            "Could this conflict become a chance to understand each other more deeply?",
            "Don't healthy relationships sometimes need hard conversations and growing pains?",
            "Could this situation end up making the relationship stronger?",
        ],
        ThoughtCategory::Health => &[
            "What message are my body and mind trying to send me?",
            "Could this experience teach me more about caring for myself?",
            "Couldn't small healthy choices add up to a big change?",
            "What if I focused on gradual improvement instead of perfect health?",
        ],
        ThoughtCategory::SelfImage => &[
            "Could this experience make me more mature and wiser?",
            "What encouragement would my future self give me right now?",
            "What about all the difficulties I have already overcome?",
            "Could this challenge reveal a strength I didn't know I had?",
        ],
        ThoughtCategory::Future => &[
            "What concrete step today would make the future I want more likely?",
            "How often have my past predictions about the future actually come true?",
            "What possibilities am I leaving out when I imagine only one outcome?",
            "What would I attempt if the outcome were not guaranteed either way?",
        ],
        ThoughtCategory::PastRegrets => &[
            "What did that choice teach me that I could not have learned otherwise?",
            "Was I doing the best I could with what I knew at the time?",
            "What would forgiving my past self free me to do now?",
            "How has that experience shaped strengths I use today?",
        ],
        ThoughtCategory::DailyStressors => &[
            "Will this still matter a week from now?",
            "What is the smallest piece of this I could handle first?",
            "What has helped me get through days like this before?",
            "What would taking ten minutes for myself change about this moment?",
        ],
        ThoughtCategory::Social => &[
            "Do others scrutinize me as closely as I assume they do?",
            "What would I think of someone else in exactly my position?",
            "Which people actually matter to me here, and what do they really value?",
            "Could an awkward moment be something everyone forgets by tomorrow?",
        ],
        ThoughtCategory::Other => &[],
    }
}

/// Category-specific action steps, 3 per recognized category.
pub fn category_steps(category: ThoughtCategory) -> &'static [&'static str] {
    match category {
        ThoughtCategory::Work => &[
            "Re-sort your work priorities",
            "Have an honest conversation with a colleague or manager",
            "Sketch a learning plan for the skill you want to grow",
        ],
        ThoughtCategory::Relationships => &[
            "Try to see the situation from the other person's perspective",
            "Set aside a time and place for a sincere conversation",
            "Take one small concrete action to improve the relationship",
        ],
        ThoughtCategory::Health => &[
            "Make one healthy choice you can act on today",
            "Plan for enough sleep and proper meals",
            "See a professional if the concern persists",
        ],
        ThoughtCategory::SelfImage => &[
            "Pick one self-care activity and do it",
            "Set a personal growth goal",
            "Write a list of your strengths and achievements",
        ],
        ThoughtCategory::Future => &[
            "Write down the single next step you can take this week",
            "List what is in your control and what is not",
            "Describe the realistic middle outcome, not just the worst one",
        ],
        ThoughtCategory::PastRegrets => &[
            "Write down what the experience taught you",
            "Draft the advice you would give someone in your past position",
            "Choose one present action the lesson makes possible",
        ],
        ThoughtCategory::DailyStressors => &[
            "Break today's load into three small pieces and start with one",
            "Take a ten-minute break away from screens",
            "Say no to one thing that can wait",
        ],
        ThoughtCategory::Social => &[
            "Reach out to one person you trust",
            "Write down the evidence for and against the feared judgment",
            "Plan one low-pressure social activity this week",
        ],
        ThoughtCategory::Other => &[],
    }
}

/// Intensity buckets for action-step selection: high 8-10, medium 5-7,
/// low 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityBucket {
    High,
    Medium,
    Low,
}

impl IntensityBucket {
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            8..=10 => IntensityBucket::High,
            5..=7 => IntensityBucket::Medium,
            _ => IntensityBucket::Low,
        }
    }
}

/// Grounding / stabilization steps per intensity bucket, 4 each.
pub fn intensity_steps(bucket: IntensityBucket) -> &'static [&'static str] {
    match bucket {
        IntensityBucket::High => &[
            "Confirm that you are in a safe place right now",
            "Calm your body with 4-7-8 breathing (inhale 4s, hold 7s, exhale 8s)",
            "Contact someone you trust and let them support you",
            "Consider reaching out for professional help",
        ],
        IntensityBucket::Medium => &[
            "Take three deep breaths and focus on the present moment",
            "Remind yourself that this feeling is temporary",
            "Make one small, concrete action plan",
            "Say one encouraging sentence to yourself out loud",
        ],
        IntensityBucket::Low => &[
            "Find three things in the current situation you can be grateful for",
            "Write down what this experience can teach you",
            "Set a concrete plan for the next step",
            "Focus on your own growth and progress",
        ],
    }
}

/// Fallback narrative used when no situation or distortion template applies.
/// Thresholds here follow the narrative branch (>=8 / >=6 / else), which is
/// a different partition than the action-step buckets.
pub fn fallback_narrative(intensity: u8) -> &'static str {
    if intensity >= 8 {
        "This seems really hard right now. \"{thought}\" is weighing on your mind, but this difficult time will pass. Right now the most important thing is to look after yourself. Breathe slowly, and think of the people who support you. You are not alone, and you have the strength to get through this."
    } else if intensity >= 6 {
        "\"{thought}\" is making you uneasy, and feeling this way is natural. But remember that this thought is not the whole of reality. Seen from another angle the situation can feel different, and with time new solutions will come into view."
    } else {
        "Looking at \"{thought}\" from another angle: there is something to learn here, and it can become a chance to grow. Remember that the current difficulty is not permanent, and pay attention to the small positive changes along the way."
    }
}
