// Aggregation Logic
// Combines signal scores into one overall score, then pulls short documents
// toward the neutral midpoint according to confidence.

use crate::models::{Confidence, Signal};
use crate::services::config_store::AnalyzerConfig;

const NEUTRAL_SCORE: f64 = 50.0;

/// Confidence from document length
pub fn confidence_for(word_count: usize, config: &AnalyzerConfig) -> Confidence {
    if word_count >= config.high_confidence_words {
        Confidence::High
    } else if word_count >= config.medium_confidence_words {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Share of the raw deviation from 50 kept at each confidence level
pub fn confidence_factor(confidence: Confidence) -> f64 {
    match confidence {
        Confidence::High => 1.0,
        Confidence::Medium => 0.85,
        Confidence::Low => 0.65,
    }
}

/// Weighted mean of signal scores, normalized by the actual weight sum
pub fn weighted_score(signals: &[Signal]) -> f64 {
    let total_weight: f64 = signals.iter().map(|s| s.weight).sum();
    if total_weight <= 0.0 {
        return NEUTRAL_SCORE;
    }
    signals.iter().map(|s| s.score * s.weight).sum::<f64>() / total_weight
}

/// Shrink the deviation from 50 by the confidence factor, round, clamp
pub fn scale_for_confidence(raw_score: f64, confidence: Confidence) -> u8 {
    let scaled = NEUTRAL_SCORE + (raw_score - NEUTRAL_SCORE) * confidence_factor(confidence);
    scaled.round().clamp(0.0, 100.0) as u8
}

/// Overall score for a set of signals at a given confidence
pub fn aggregate_signals(signals: &[Signal], confidence: Confidence) -> u8 {
    scale_for_confidence(weighted_score(signals), confidence)
}
