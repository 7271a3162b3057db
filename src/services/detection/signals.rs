// Signal Extractors
// Thirteen independent statistics over the segmented document. Each returns one
// bounded Signal; none of them reads another's output.

use super::lexicon::{fold_for_phrases, LexicalTables};
use crate::models::{Signal, SignalKind};
use crate::services::config_store::AnalyzerConfig;
use crate::services::text_processor::{normalize_word, sentence_word_lengths, Segmentation};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Burstiness needs at least two full windows of three sentences.
const BURSTINESS_MIN_SENTENCES: usize = 6;
const BURSTINESS_WINDOW: usize = 3;
const BURSTINESS_FALLBACK: f64 = 50.0;
const PARAGRAPH_FALLBACK: f64 = 40.0;
const PUNCTUATION_CATEGORIES: usize = 9;

// (threshold, score) bands. `below` bands fire on value < threshold, `above` bands on value > threshold.
const UNIFORMITY_BANDS: &[(f64, f64)] = &[(0.2, 90.0), (0.3, 75.0), (0.4, 50.0), (0.55, 30.0)];
const BURSTINESS_BANDS: &[(f64, f64)] = &[(0.15, 88.0), (0.25, 65.0), (0.35, 40.0), (0.5, 20.0)];
const CONTRACTION_BANDS: &[(f64, f64)] = &[(0.05, 80.0), (0.15, 60.0), (0.3, 40.0), (0.5, 20.0)];
const PUNCTUATION_BANDS: &[(f64, f64)] = &[(0.25, 75.0), (0.35, 55.0), (0.5, 35.0), (0.65, 18.0)];
const PERSONAL_VOICE_BANDS: &[(f64, f64)] = &[(0.3, 78.0), (1.0, 55.0), (2.5, 35.0), (5.0, 15.0)];
const TRANSITION_BANDS: &[(f64, f64)] = &[(0.5, 85.0), (0.35, 65.0), (0.2, 42.0), (0.08, 22.0)];
const PARAGRAPH_BANDS: &[(f64, f64)] = &[(0.15, 82.0), (0.25, 60.0), (0.4, 35.0), (0.55, 18.0)];
const STARTER_BANDS: &[(f64, f64)] = &[(0.55, 82.0), (0.35, 60.0), (0.2, 35.0), (0.1, 18.0)];
const PASSIVE_BANDS: &[(f64, f64)] = &[(0.35, 72.0), (0.2, 50.0), (0.08, 30.0)];
const LIST_BANDS: &[(f64, f64)] = &[(0.5, 75.0), (0.3, 55.0), (0.15, 35.0)];

fn passive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:is|are|was|were|been|being|be)\s+\w+(?:ed|en)\b")
            .expect("passive voice regex")
    })
}

fn list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[-*+\u{2022}]|\d{1,3}[.)]|[a-z][.)])\s+").expect("list item regex")
    })
}

// ============================================================================
// Shared statistics
// ============================================================================

fn band_below(value: f64, bands: &[(f64, f64)], otherwise: f64) -> f64 {
    bands
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(otherwise)
}

fn band_above(value: f64, bands: &[(f64, f64)], otherwise: f64) -> f64 {
    bands
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(otherwise)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation over mean. Zero when the mean is zero.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m <= 0.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt() / m
}

fn rate(count: usize, denominator: usize) -> f64 {
    count as f64 / denominator.max(1) as f64
}

fn per_100_words(count: usize, words: usize) -> f64 {
    rate(count, words) * 100.0
}

fn make(kind: SignalKind, config: &AnalyzerConfig, score: f64, detail: String) -> Signal {
    Signal::new(kind, score, config.weights.weight_for(kind), detail)
}

// ============================================================================
// Extractors
// ============================================================================

/// All thirteen signals in aggregation order
pub fn extract_signals(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Vec<Signal> {
    vec![
        ai_phrases(text, seg, lx, config),
        ai_vocabulary(text, seg, lx, config),
        sentence_uniformity(text, seg, lx, config),
        burstiness(text, seg, lx, config),
        contraction_usage(text, seg, lx, config),
        punctuation_diversity(text, seg, lx, config),
        personal_voice(text, seg, lx, config),
        transition_density(text, seg, lx, config),
        vocabulary_profile(text, seg, lx, config),
        paragraph_structure(text, seg, lx, config),
        sentence_starters(text, seg, lx, config),
        passive_voice(text, seg, lx, config),
        list_patterns(text, seg, lx, config),
    ]
}

pub fn ai_phrases(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let folded = fold_for_phrases(text);
    let strong = lx.count_strong_phrases(&folded);
    let medium = lx.count_medium_phrases(&folded);
    let hits = 2 * strong + medium;
    let per_100 = per_100_words(hits, seg.word_count());

    make(
        SignalKind::AiPhrases,
        config,
        (per_100 * 20.0).min(100.0),
        format!(
            "{} strong and {} medium phrase matches ({:.2} weighted hits per 100 words)",
            strong, medium, per_100
        ),
    )
}

pub fn ai_vocabulary(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let count = lx.count_vocabulary(text);
    let per_100 = per_100_words(count, seg.word_count());

    make(
        SignalKind::AiVocabulary,
        config,
        (per_100 * 18.0).min(100.0),
        format!("{} AI-favored words ({:.2} per 100 words)", count, per_100),
    )
}

pub fn sentence_uniformity(
    _text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let lengths = sentence_word_lengths(&seg.sentences);
    let cv = coefficient_of_variation(&lengths);

    make(
        SignalKind::SentenceUniformity,
        config,
        band_below(cv, UNIFORMITY_BANDS, 12.0),
        format!(
            "{} sentences, mean length {:.1} words, CV {:.3}",
            lengths.len(),
            mean(&lengths),
            cv
        ),
    )
}

pub fn burstiness(
    _text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let lengths = sentence_word_lengths(&seg.sentences);
    if lengths.len() < BURSTINESS_MIN_SENTENCES {
        return make(
            SignalKind::Burstiness,
            config,
            BURSTINESS_FALLBACK,
            format!(
                "{} sentences; at least {} needed for a window comparison",
                lengths.len(),
                BURSTINESS_MIN_SENTENCES
            ),
        );
    }

    let window_means: Vec<f64> = lengths.windows(BURSTINESS_WINDOW).map(mean).collect();
    let cv = coefficient_of_variation(&window_means);

    make(
        SignalKind::Burstiness,
        config,
        band_below(cv, BURSTINESS_BANDS, 8.0),
        format!("{} sliding windows, CV {:.3}", window_means.len(), cv),
    )
}

pub fn contraction_usage(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let count = lx.count_contractions(text);
    let per_sentence = rate(count, seg.sentence_count());

    make(
        SignalKind::ContractionUsage,
        config,
        band_below(per_sentence, CONTRACTION_BANDS, 8.0),
        format!("{} contractions ({:.2} per sentence)", count, per_sentence),
    )
}

/// Which of the nine punctuation categories occur in the text
fn punctuation_categories(text: &str) -> [bool; PUNCTUATION_CATEGORIES] {
    [
        text.contains('.'),
        text.contains(','),
        text.contains('!'),
        text.contains('?'),
        text.contains(';'),
        text.contains(':'),
        text.contains('\u{2014}') || text.contains('\u{2013}'),
        text.contains("...") || text.contains('\u{2026}'),
        text.contains('(') || text.contains(')'),
    ]
}

pub fn punctuation_diversity(
    text: &str,
    _seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let present = punctuation_categories(text).iter().filter(|p| **p).count();
    let diversity = present as f64 / PUNCTUATION_CATEGORIES as f64;

    make(
        SignalKind::PunctuationDiversity,
        config,
        band_below(diversity, PUNCTUATION_BANDS, 8.0),
        format!("{} of {} punctuation types used", present, PUNCTUATION_CATEGORIES),
    )
}

pub fn personal_voice(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let pronouns = lx.count_first_person(text);
    let informal = lx.count_informal(text);
    let per_100 = per_100_words(pronouns + informal, seg.word_count());

    make(
        SignalKind::PersonalVoice,
        config,
        band_below(per_100, PERSONAL_VOICE_BANDS, 5.0),
        format!(
            "{} first-person pronouns, {} informal words ({:.2} per 100 words)",
            pronouns, informal, per_100
        ),
    )
}

pub fn transition_density(
    text: &str,
    seg: &Segmentation<'_>,
    lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let count = lx.count_transitions(text);
    let per_sentence = rate(count, seg.sentence_count());

    make(
        SignalKind::TransitionDensity,
        config,
        band_above(per_sentence, TRANSITION_BANDS, 10.0),
        format!("{} transition words ({:.2} per sentence)", count, per_sentence),
    )
}

/// Type-token ratio and hapax ratio over a normalized word sample
pub fn lexical_ratios(words: &[&str], sample: usize) -> (f64, f64, usize) {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for word in words.iter().take(sample) {
        let normalized = normalize_word(word);
        if normalized.is_empty() {
            continue;
        }
        *freq.entry(normalized).or_insert(0) += 1;
        total += 1;
    }

    let unique = freq.len();
    let hapax = freq.values().filter(|&&c| c == 1).count();
    (rate(unique, total), rate(hapax, unique), total)
}

pub fn vocabulary_profile(
    _text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let (ttr, hapax, sampled) = lexical_ratios(&seg.words, config.vocabulary_sample_words);

    let score = if (0.42..=0.58).contains(&ttr) && hapax < 0.55 {
        72.0
    } else if (0.35..=0.65).contains(&ttr) && hapax < 0.65 {
        50.0
    } else if hapax > 0.7 {
        15.0
    } else if hapax > 0.6 {
        28.0
    } else {
        45.0
    };

    make(
        SignalKind::VocabularyProfile,
        config,
        score,
        format!("TTR {:.3}, hapax ratio {:.3} over {} words", ttr, hapax, sampled),
    )
}

pub fn paragraph_structure(
    _text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    if seg.paragraphs.len() < 2 {
        return make(
            SignalKind::ParagraphStructure,
            config,
            PARAGRAPH_FALLBACK,
            format!("{} paragraph(s); need 2 to compare", seg.paragraphs.len()),
        );
    }

    let lengths = sentence_word_lengths(&seg.paragraphs);
    let cv = coefficient_of_variation(&lengths);

    make(
        SignalKind::ParagraphStructure,
        config,
        band_below(cv, PARAGRAPH_BANDS, 8.0),
        format!("{} paragraphs, length CV {:.3}", lengths.len(), cv),
    )
}

/// Normalized first two words, or None for one-word sentences
fn opening(sentence: &str) -> Option<String> {
    let mut words = sentence
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty());
    let first = words.next()?;
    let second = words.next()?;
    Some(format!("{} {}", first, second))
}

pub fn sentence_starters(
    _text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let openings: Vec<Option<String>> = seg.sentences.iter().map(|s| opening(s)).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for o in openings.iter().flatten() {
        *counts.entry(o.as_str()).or_insert(0) += 1;
    }

    let repeated = openings
        .iter()
        .flatten()
        .filter(|o| counts.get(o.as_str()).copied().unwrap_or(0) > 1)
        .count();
    let fraction = rate(repeated, seg.sentence_count());

    make(
        SignalKind::SentenceStarters,
        config,
        band_above(fraction, STARTER_BANDS, 8.0),
        format!(
            "{} of {} sentences share a two-word opening",
            repeated,
            seg.sentence_count()
        ),
    )
}

pub fn passive_voice(
    text: &str,
    seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let count = passive_re().find_iter(text).count();
    let per_sentence = rate(count, seg.sentence_count());

    make(
        SignalKind::PassiveVoice,
        config,
        band_above(per_sentence, PASSIVE_BANDS, 15.0),
        format!("{} passive constructions ({:.2} per sentence)", count, per_sentence),
    )
}

pub fn list_patterns(
    text: &str,
    _seg: &Segmentation<'_>,
    _lx: &LexicalTables,
    config: &AnalyzerConfig,
) -> Signal {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let list_lines = lines.iter().filter(|l| list_item_re().is_match(l)).count();
    let fraction = rate(list_lines, lines.len());

    make(
        SignalKind::ListPatterns,
        config,
        band_above(fraction, LIST_BANDS, 10.0),
        format!("{} of {} lines formatted as list items", list_lines, lines.len()),
    )
}
