// Verdict Classifier
// Maps the overall score onto three labels. Pure threshold partition, no state.

use crate::models::Verdict;

pub const LIKELY_AI_MIN: u8 = 65;
pub const MIXED_MIN: u8 = 40;

const LIKELY_AI_SUMMARY: &str = "This text shows strong patterns associated with AI-generated content, \
including characteristic phrasing, uniform structure and low stylistic variation.";
const MIXED_SUMMARY: &str = "This text shows mixed signals. It may be AI-assisted, heavily edited, \
or written in a formal style that shares traits with generated text.";
const LIKELY_HUMAN_SUMMARY: &str = "This text shows patterns typical of human writing, \
such as varied sentence structure, personal voice and natural irregularity.";

pub fn classify(overall_score: u8) -> Verdict {
    if overall_score >= LIKELY_AI_MIN {
        Verdict::LikelyAi
    } else if overall_score >= MIXED_MIN {
        Verdict::Mixed
    } else {
        Verdict::LikelyHuman
    }
}

pub fn too_short_summary(min_words: usize) -> String {
    format!(
        "Text is too short for reliable analysis. Please provide at least {} words.",
        min_words
    )
}

pub fn summary_for(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::LikelyAi => LIKELY_AI_SUMMARY,
        Verdict::Mixed => MIXED_SUMMARY,
        Verdict::LikelyHuman => LIKELY_HUMAN_SUMMARY,
    }
}
