// ProseCheck Data Models
// Result types returned by the analyzer, serialized with camelCase field names.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Confidence ============

/// How much evidence the document length provides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Verdict ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    LikelyHuman,
    Mixed,
    LikelyAi,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyHuman => "likely-human",
            Self::Mixed => "mixed",
            Self::LikelyAi => "likely-ai",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Signal Types ============

/// The thirteen document-level extractors, in aggregation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SignalKind {
    AiPhrases,
    AiVocabulary,
    SentenceUniformity,
    Burstiness,
    ContractionUsage,
    PunctuationDiversity,
    PersonalVoice,
    TransitionDensity,
    VocabularyProfile,
    ParagraphStructure,
    SentenceStarters,
    PassiveVoice,
    ListPatterns,
}

impl SignalKind {
    pub const ALL: [SignalKind; 13] = [
        Self::AiPhrases,
        Self::AiVocabulary,
        Self::SentenceUniformity,
        Self::Burstiness,
        Self::ContractionUsage,
        Self::PunctuationDiversity,
        Self::PersonalVoice,
        Self::TransitionDensity,
        Self::VocabularyProfile,
        Self::ParagraphStructure,
        Self::SentenceStarters,
        Self::PassiveVoice,
        Self::ListPatterns,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AiPhrases => "AI Phrases",
            Self::AiVocabulary => "AI Vocabulary",
            Self::SentenceUniformity => "Sentence Uniformity",
            Self::Burstiness => "Burstiness",
            Self::ContractionUsage => "Contraction Usage",
            Self::PunctuationDiversity => "Punctuation Diversity",
            Self::PersonalVoice => "Personal Voice",
            Self::TransitionDensity => "Transition Density",
            Self::VocabularyProfile => "Vocabulary Profile",
            Self::ParagraphStructure => "Paragraph Structure",
            Self::SentenceStarters => "Sentence Starters",
            Self::PassiveVoice => "Passive Voice",
            Self::ListPatterns => "List Patterns",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AiPhrases => "Stock phrases that language models reach for far more often than people do",
            Self::AiVocabulary => "Words such as \"delve\", \"leverage\" and \"robust\" that are overrepresented in generated text",
            Self::SentenceUniformity => "Generated text keeps sentence lengths unnaturally even",
            Self::Burstiness => "People alternate dense and sparse passages; models hold a steady rhythm",
            Self::ContractionUsage => "Casual human writing uses contractions; generated prose often avoids them",
            Self::PunctuationDiversity => "Human writers use a wider range of punctuation",
            Self::PersonalVoice => "First-person pronouns and informal words mark a personal voice",
            Self::TransitionDensity => "Heavy use of formal transitions like \"furthermore\" and \"moreover\"",
            Self::VocabularyProfile => "Type-token and hapax ratios in the mid band typical of generated text",
            Self::ParagraphStructure => "Paragraphs of nearly identical length",
            Self::SentenceStarters => "Sentences that repeat the same two-word opening",
            Self::PassiveVoice => "Frequent passive constructions",
            Self::ListPatterns => "Bullet and numbered list formatting",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One extractor's bounded sub-score. 100 means strongly AI-like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub name: String,
    pub description: String,
    pub score: f64,
    pub weight: f64,
    pub detail: String,
}

impl Signal {
    pub fn new(kind: SignalKind, score: f64, weight: f64, detail: String) -> Self {
        Self {
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            score: score.round().clamp(0.0, 100.0),
            weight,
            detail,
        }
    }
}

// ============ Sentence Scores ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceScore {
    pub text: String,
    pub score: u8,
}

// ============ Analysis Result ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub confidence: Confidence,
    pub signals: Vec<Signal>,
    pub summary: String,
    pub verdict: Verdict,
    pub sentence_scores: Vec<SentenceScore>,
}

impl AnalysisResult {
    pub fn signal(&self, kind: SignalKind) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == kind.name())
    }
}
