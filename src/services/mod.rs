// ProseCheck Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;

pub use text_processor::{segment, Segmentation};
pub use config_store::{load_config_file, AnalyzerConfig, ConfigStore, SignalWeights};

pub use detection::{
    analyze,
    analyze_with_config,
    aggregate_signals,
    classify,
    confidence_for,
    extract_signals,
    lexicon,
    score_sentences,
    LexicalTables,
};
