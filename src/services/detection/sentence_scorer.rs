// Sentence Scorer
// Cheap per-sentence heuristic used to highlight suspect sentences.
// Independent of the document-level signals and never feeds the overall score.

use super::lexicon::{fold_for_phrases, LexicalTables};
use crate::models::SentenceScore;

const PHRASE_BONUS: u32 = 30;
const VOCAB_POINTS_PER_HIT: u32 = 15;
const VOCAB_CAP: u32 = 40;
const NO_CONTRACTION_BONUS: u32 = 10;
const NO_FIRST_PERSON_BONUS: u32 = 8;

/// Score one sentence on a 0-100 scale
pub fn score_sentence(sentence: &str, lx: &LexicalTables) -> u8 {
    let mut score = 0u32;

    if lx.contains_any_phrase(&fold_for_phrases(sentence)) {
        score += PHRASE_BONUS;
    }

    let vocab_hits = lx.count_vocabulary(sentence) as u32;
    score += VOCAB_CAP.min(VOCAB_POINTS_PER_HIT.saturating_mul(vocab_hits));

    if !lx.has_sentence_contraction(sentence) {
        score += NO_CONTRACTION_BONUS;
    }
    if !lx.has_first_person(sentence) {
        score += NO_FIRST_PERSON_BONUS;
    }

    score.min(100) as u8
}

/// Scores for the first `limit` sentences, in document order
pub fn score_sentences(sentences: &[&str], lx: &LexicalTables, limit: usize) -> Vec<SentenceScore> {
    sentences
        .iter()
        .take(limit)
        .map(|s| SentenceScore {
            text: s.to_string(),
            score: score_sentence(s, lx),
        })
        .collect()
}
