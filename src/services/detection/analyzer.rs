// Analyzer
// Entry point: segment, gate on length, extract signals, aggregate, classify.

use super::aggregation::{aggregate_signals, confidence_for};
use super::lexicon::lexicon;
use super::sentence_scorer::score_sentences;
use super::signals::extract_signals;
use super::verdict::{classify, summary_for, too_short_summary};
use crate::models::{AnalysisResult, Confidence, Verdict};
use crate::services::config_store::AnalyzerConfig;
use crate::services::text_processor::segment;
use tracing::{debug, warn};

/// Analyze text with the default configuration
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with_config(text, &AnalyzerConfig::default())
}

/// Analyze text with explicit tuning. A config that fails validation is
/// replaced by the defaults, so analysis itself never fails.
pub fn analyze_with_config(text: &str, config: &AnalyzerConfig) -> AnalysisResult {
    if let Err(e) = config.validate() {
        warn!(error = %e, "analysis.invalid_config_using_defaults");
        return run_analysis(text, &AnalyzerConfig::default());
    }
    run_analysis(text, config)
}

fn run_analysis(text: &str, config: &AnalyzerConfig) -> AnalysisResult {
    let seg = segment(text);
    let word_count = seg.word_count();

    if word_count < config.min_words {
        debug!(word_count, min_words = config.min_words, "analysis.too_short");
        return AnalysisResult {
            overall_score: 0,
            confidence: Confidence::Low,
            signals: Vec::new(),
            summary: too_short_summary(config.min_words),
            verdict: Verdict::Mixed,
            sentence_scores: Vec::new(),
        };
    }

    let lx = lexicon();
    let signals = extract_signals(text, &seg, lx, config);
    let confidence = confidence_for(word_count, config);
    let overall_score = aggregate_signals(&signals, confidence);
    let verdict = classify(overall_score);
    let sentence_scores = score_sentences(&seg.sentences, lx, config.max_scored_sentences);

    debug!(
        word_count,
        sentences = seg.sentence_count(),
        paragraphs = seg.paragraphs.len(),
        overall_score,
        confidence = %confidence,
        verdict = %verdict,
        "analysis.complete"
    );

    AnalysisResult {
        overall_score,
        confidence,
        signals,
        summary: summary_for(verdict).to_string(),
        verdict,
        sentence_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SignalKind;
    use proptest::prelude::*;

    const AI_CYCLE: &str = "It's important to note that organizations must leverage robust frameworks seamlessly today. \
Moreover, in today's rapidly evolving landscape, modern teams leverage robust tools seamlessly. \
Furthermore, let's delve into how robust systems leverage data seamlessly and efficiently. ";

    const HUMAN_TEXT: &str = "Okay, so I finally tried the new bakery on Fifth Street last weekend. Honestly? \
I'm still thinking about it. My sister dragged me there because she'd read some review online, and I wasn't \
expecting much, but wow. The croissants were flaky and kinda ridiculous, in a good way.

We got there around nine and the line was already out the door. I don't usually wait for food. Like, ever. \
But the guy behind us kept saying it's worth it, so we stayed, and yeah, he wasn't wrong.

I grabbed a cardamom bun, two croissants and a weird little pistachio thing I can't pronounce. My sister got \
coffee. That's it. We sat outside on the curb because every table was taken, and honestly the sun was nice, \
the pastries were warm, and I didn't care about anything else for a good twenty minutes.

Would I go back? Absolutely. Would I wait forty minutes again? Probably not, haha. Next time I'm gonna show up \
right when they open, grab a box for the week, and pretend I'm the kind of person who plans ahead. We'll see \
how that goes.

Anyway, if you're nearby, go early. Bring cash just in case, because their card reader was acting up while we \
were there and the poor guy at the register looked like he was about to cry. Also try the bun. Trust me on that \
one, it's the best thing I've eaten all month and I'm not even a cardamom person.";

    fn ai_text() -> String {
        AI_CYCLE.repeat(7)
    }

    fn words_strategy(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Za-z']{1,10}[.,!?]?", range).prop_map(|w| w.join(" "))
    }

    #[test]
    fn test_short_input_short_circuits() {
        let text = vec!["test"; 29].join(" ");
        let result = analyze(&text);
        assert!(result.signals.is_empty());
        assert!(result.sentence_scores.is_empty());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.verdict, Verdict::Mixed);
        assert!(result.summary.contains("too short"));
    }

    #[test]
    fn test_empty_input() {
        let result = analyze("");
        assert!(result.signals.is_empty());
        assert_eq!(result.overall_score, 0);
    }

    #[test]
    fn test_saturated_ai_passage() {
        let text = ai_text();
        let result = analyze(&text);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.signals.len(), 13);
        assert!(result.overall_score >= 65, "score {}", result.overall_score);
        assert_eq!(result.verdict, Verdict::LikelyAi);
        assert_eq!(result.signal(SignalKind::AiPhrases).unwrap().score, 100.0);
        assert_eq!(result.signal(SignalKind::ContractionUsage).unwrap().score, 80.0);
        assert_eq!(result.sentence_scores.len(), 21);
    }

    #[test]
    fn test_casual_human_passage() {
        let result = analyze(HUMAN_TEXT);
        assert_eq!(result.signals.len(), 13);
        assert!(result.overall_score < 40, "score {}", result.overall_score);
        assert_eq!(result.verdict, Verdict::LikelyHuman);
        assert_eq!(result.signal(SignalKind::AiPhrases).unwrap().score, 0.0);
    }

    #[test]
    fn test_repeated_long_sentence_is_medium_confidence() {
        let sentence = format!(
            "{}.",
            (1..=40).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ")
        );
        let text = format!("{} {}", sentence, sentence);
        let result = analyze(&text);
        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.signals.len(), 13);
        assert_eq!(result.signal(SignalKind::Burstiness).unwrap().score, 50.0);
        assert_eq!(result.sentence_scores.len(), 2);
    }

    #[test]
    fn test_sentence_scores_capped_at_thirty() {
        let text = "The cat sat on the mat today. ".repeat(45);
        let result = analyze(&text);
        assert_eq!(result.sentence_scores.len(), 30);
    }

    #[test]
    fn test_custom_min_words() {
        let config = AnalyzerConfig {
            min_words: 50,
            ..AnalyzerConfig::default()
        };
        let text = "We walked home after dinner and talked for a while. ".repeat(4);
        assert!(analyze_with_config(&text, &config).signals.is_empty());
        assert_eq!(analyze(&text).signals.len(), 13);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let mut config = AnalyzerConfig {
            min_words: 1,
            max_scored_sentences: 1000,
            ..AnalyzerConfig::default()
        };
        config.weights.list_patterns = 0.0;

        let short = analyze_with_config("just three words", &config);
        assert!(short.signals.is_empty());
        assert_eq!(short.overall_score, 0);

        let long = analyze_with_config(&"The cat sat on the mat today. ".repeat(60), &config);
        assert_eq!(long.sentence_scores.len(), 30);
        assert_eq!(long.signal(SignalKind::ListPatterns).unwrap().weight, 0.02);
    }

    #[test]
    fn test_weights_are_taken_from_config() {
        let mut config = AnalyzerConfig::default();
        config.weights.ai_phrases = 0.5;
        let result = analyze_with_config(&ai_text(), &config);
        assert_eq!(result.signal(SignalKind::AiPhrases).unwrap().weight, 0.5);
    }

    proptest! {
        #[test]
        fn short_inputs_are_gated(text in words_strategy(0..30)) {
            let result = analyze(&text);
            prop_assert!(result.signals.is_empty());
            prop_assert_eq!(result.overall_score, 0);
            prop_assert_eq!(result.confidence, Confidence::Low);
            prop_assert_eq!(result.verdict, Verdict::Mixed);
        }

        #[test]
        fn analysis_is_deterministic_and_bounded(text in words_strategy(0..260)) {
            let first = analyze(&text);
            let second = analyze(&text);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.overall_score <= 100);
            prop_assert!(first.sentence_scores.len() <= 30);
            for signal in &first.signals {
                prop_assert!((0.0..=100.0).contains(&signal.score));
                prop_assert!(signal.weight > 0.0);
            }
            for sentence in &first.sentence_scores {
                prop_assert!(sentence.score <= 100);
            }
        }

        #[test]
        fn strong_phrases_never_lower_phrase_signal(base in words_strategy(30..120), extra in 1usize..6) {
            let phrase_score = |text: &str| {
                analyze(text).signal(SignalKind::AiPhrases).map(|s| s.score).unwrap_or(0.0)
            };
            let mut text = base;
            let mut previous = phrase_score(&text);
            for _ in 0..extra {
                text.push_str(" It's important to note this.");
                let current = phrase_score(&text);
                prop_assert!(current >= previous, "{} < {}", current, previous);
                previous = current;
            }
        }
    }
}
