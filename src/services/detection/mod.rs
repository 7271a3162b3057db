// Detection Module
// Heuristic AI-text detection organized into specialized submodules:
// - lexicon: static phrase/vocabulary tables and their compiled matchers
// - signals: the thirteen document-level extractors
// - aggregation: weighted combination and confidence scaling
// - sentence_scorer: per-sentence highlighting heuristic
// - verdict: three-way classification and summaries
// - analyzer: the analyze entry point wiring the pipeline together

pub mod lexicon;
pub mod signals;
pub mod aggregation;
pub mod sentence_scorer;
pub mod verdict;
pub mod analyzer;

// Re-export commonly used functions
pub use analyzer::{analyze, analyze_with_config};
pub use aggregation::{aggregate_signals, confidence_for, confidence_factor, scale_for_confidence, weighted_score};
pub use lexicon::{lexicon, LexicalTables};
pub use sentence_scorer::{score_sentence, score_sentences};
pub use signals::extract_signals;
pub use verdict::{classify, summary_for};
