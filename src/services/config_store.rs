// Configuration Storage Service
// Analyzer tuning (weights, gates, caps) plus config file read/write and version backup

use crate::errors::{ConfigError, ConfigResult};
use crate::models::SignalKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.json";
const BACKUP_DIR_NAME: &str = "backups";
const BACKUPS_TO_KEEP: usize = 10;

/// Gate and caps may be tightened through config, never loosened past these.
pub const MIN_WORDS_FLOOR: usize = 30;
pub const MAX_SCORED_SENTENCES_CAP: usize = 30;
pub const VOCABULARY_SAMPLE_CAP: usize = 500;

/// Per-signal weights. They need not sum to one; the aggregator normalizes by the actual sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalWeights {
    pub ai_phrases: f64,
    pub ai_vocabulary: f64,
    pub sentence_uniformity: f64,
    pub burstiness: f64,
    pub contraction_usage: f64,
    pub punctuation_diversity: f64,
    pub personal_voice: f64,
    pub transition_density: f64,
    pub vocabulary_profile: f64,
    pub paragraph_structure: f64,
    pub sentence_starters: f64,
    pub passive_voice: f64,
    pub list_patterns: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            ai_phrases: 0.18,
            ai_vocabulary: 0.12,
            sentence_uniformity: 0.10,
            burstiness: 0.10,
            contraction_usage: 0.08,
            punctuation_diversity: 0.06,
            personal_voice: 0.08,
            transition_density: 0.08,
            vocabulary_profile: 0.06,
            paragraph_structure: 0.05,
            sentence_starters: 0.04,
            passive_voice: 0.03,
            list_patterns: 0.02,
        }
    }
}

impl SignalWeights {
    pub fn weight_for(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::AiPhrases => self.ai_phrases,
            SignalKind::AiVocabulary => self.ai_vocabulary,
            SignalKind::SentenceUniformity => self.sentence_uniformity,
            SignalKind::Burstiness => self.burstiness,
            SignalKind::ContractionUsage => self.contraction_usage,
            SignalKind::PunctuationDiversity => self.punctuation_diversity,
            SignalKind::PersonalVoice => self.personal_voice,
            SignalKind::TransitionDensity => self.transition_density,
            SignalKind::VocabularyProfile => self.vocabulary_profile,
            SignalKind::ParagraphStructure => self.paragraph_structure,
            SignalKind::SentenceStarters => self.sentence_starters,
            SignalKind::PassiveVoice => self.passive_voice,
            SignalKind::ListPatterns => self.list_patterns,
        }
    }

    pub fn total(&self) -> f64 {
        SignalKind::ALL.iter().map(|k| self.weight_for(*k)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    /// Documents with fewer words short-circuit to an empty result.
    pub min_words: usize,
    pub medium_confidence_words: usize,
    pub high_confidence_words: usize,
    pub max_scored_sentences: usize,
    /// Window for the type-token / hapax statistics.
    pub vocabulary_sample_words: usize,
    pub weights: SignalWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_words: 30,
            medium_confidence_words: 80,
            high_confidence_words: 200,
            max_scored_sentences: 30,
            vocabulary_sample_words: 500,
            weights: SignalWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for kind in SignalKind::ALL {
            let w = self.weights.weight_for(kind);
            if !w.is_finite() || w <= 0.0 {
                return Err(ConfigError::invalid(format!(
                    "weight for \"{}\" must be a positive number, got {}",
                    kind.name(),
                    w
                )));
            }
        }
        if self.min_words < MIN_WORDS_FLOOR {
            return Err(ConfigError::invalid(format!(
                "minWords must be at least {}, got {}",
                MIN_WORDS_FLOOR, self.min_words
            )));
        }
        if !(1..=MAX_SCORED_SENTENCES_CAP).contains(&self.max_scored_sentences) {
            return Err(ConfigError::invalid(format!(
                "maxScoredSentences must be between 1 and {}, got {}",
                MAX_SCORED_SENTENCES_CAP, self.max_scored_sentences
            )));
        }
        if !(1..=VOCABULARY_SAMPLE_CAP).contains(&self.vocabulary_sample_words) {
            return Err(ConfigError::invalid(format!(
                "vocabularySampleWords must be between 1 and {}, got {}",
                VOCABULARY_SAMPLE_CAP, self.vocabulary_sample_words
            )));
        }
        if self.medium_confidence_words > self.high_confidence_words {
            return Err(ConfigError::invalid(format!(
                "mediumConfidenceWords ({}) exceeds highConfidenceWords ({})",
                self.medium_confidence_words, self.high_confidence_words
            )));
        }
        Ok(())
    }
}

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prosecheck"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> ConfigResult<()> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::CreateDir {
            path: self.config_dir.clone(),
            source,
        })
    }

    /// Load configuration; a missing file yields defaults
    pub fn load(&self) -> ConfigResult<AnalyzerConfig> {
        if !self.config_file.exists() {
            return Ok(AnalyzerConfig::default());
        }
        load_config_file(&self.config_file)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AnalyzerConfig) -> ConfigResult<()> {
        config.validate()?;
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content).map_err(|source| ConfigError::Write {
            path: self.config_file.clone(),
            source,
        })?;

        info!(path = %self.config_file.display(), "config.saved");
        Ok(())
    }

    fn create_backup(&self) -> ConfigResult<()> {
        let backup_dir = self.config_dir.join(BACKUP_DIR_NAME);
        fs::create_dir_all(&backup_dir).map_err(|source| ConfigError::CreateDir {
            path: backup_dir.clone(),
            source,
        })?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file).map_err(|source| ConfigError::Backup {
            path: backup_file.clone(),
            source,
        })?;

        cleanup_old_backups(&backup_dir, BACKUPS_TO_KEEP);
        Ok(())
    }
}

/// Read and validate a config from an explicit path
pub fn load_config_file(path: &Path) -> ConfigResult<AnalyzerConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AnalyzerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Remove old backups, keeping only the most recent N
fn cleanup_old_backups(backup_dir: &Path, keep: usize) {
    let mut entries: Vec<_> = match fs::read_dir(backup_dir) {
        Ok(rd) => rd
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect(),
        Err(e) => {
            warn!(error = %e, "config.backup_cleanup_failed");
            return;
        }
    };

    if entries.len() <= keep {
        return;
    }

    // File names embed the timestamp, so name order is age order.
    entries.sort_by_key(|e| e.file_name());

    let remove_count = entries.len() - keep;
    for entry in entries.into_iter().take(remove_count) {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_words, 30);
        assert_eq!(config.max_scored_sentences, 30);
        assert_eq!(config.vocabulary_sample_words, 500);
        assert_eq!(config.weights.weight_for(SignalKind::AiPhrases), 0.18);
        assert_eq!(config.weights.weight_for(SignalKind::ListPatterns), 0.02);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: AnalyzerConfig =
            serde_json::from_str(r#"{"minWords": 50, "weights": {"aiPhrases": 0.3}}"#).unwrap();
        assert_eq!(parsed.min_words, 50);
        assert_eq!(parsed.weights.ai_phrases, 0.3);
        assert_eq!(parsed.weights.burstiness, 0.10);
        assert_eq!(parsed.high_confidence_words, 200);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let mut config = AnalyzerConfig::default();
        config.weights.passive_voice = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.weights.passive_voice = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_confidence_gates() {
        let config = AnalyzerConfig {
            medium_confidence_words: 300,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_loosened_gate_and_caps() {
        let low_gate = AnalyzerConfig {
            min_words: 29,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(low_gate.validate(), Err(ConfigError::Invalid(_))));

        let many_sentences = AnalyzerConfig {
            max_scored_sentences: 31,
            ..AnalyzerConfig::default()
        };
        assert!(many_sentences.validate().is_err());

        let wide_sample = AnalyzerConfig {
            vocabulary_sample_words: 501,
            ..AnalyzerConfig::default()
        };
        assert!(wide_sample.validate().is_err());

        let tightened = AnalyzerConfig {
            min_words: 60,
            max_scored_sentences: 10,
            vocabulary_sample_words: 200,
            ..AnalyzerConfig::default()
        };
        assert!(tightened.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_loosened_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"minWords":1,"maxScoredSentences":1000,"vocabularySampleWords":100000000}"#,
        )
        .unwrap();
        assert!(matches!(load_config_file(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_store_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested"));
        assert_eq!(store.load().unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_store_round_trip_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let mut config = AnalyzerConfig::default();
        store.save(&config).unwrap();
        config.weights.ai_phrases = 0.25;
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap().weights.ai_phrases, 0.25);
        let backups = fs::read_dir(dir.path().join(BACKUP_DIR_NAME)).unwrap().count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_store_refuses_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        let mut config = AnalyzerConfig::default();
        config.max_scored_sentences = 0;
        assert!(store.save(&config).is_err());
        assert!(!store.config_file().exists());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config_file(&path), Err(ConfigError::Parse(_))));
    }
}
