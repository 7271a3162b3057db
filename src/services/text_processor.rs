// Text Processing Service
// Splits raw text into words, sentences and paragraphs for the signal extractors.

use regex::Regex;
use std::sync::OnceLock;

/// Sentences shorter than this (in chars, after trimming) are dropped as fragments.
const MIN_SENTENCE_CHARS: usize = 4;

fn sentence_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence break regex"))
}

fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph break regex"))
}

/// Read-only view over a document. Every entry borrows from the analyzed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation<'a> {
    pub words: Vec<&'a str>,
    pub sentences: Vec<&'a str>,
    pub paragraphs: Vec<&'a str>,
}

impl<'a> Segmentation<'a> {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Segment a document into words, sentences and paragraphs
pub fn segment(text: &str) -> Segmentation<'_> {
    Segmentation {
        words: split_words(text),
        sentences: split_sentences(text),
        paragraphs: split_paragraphs(text),
    }
}

/// Maximal runs of non-whitespace characters
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split after `.`, `!` or `?` when followed by whitespace.
/// Fragments of three characters or fewer are discarded.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }

    let mut sentences = Vec::new();
    let mut cursor = 0usize;

    for m in sentence_break_re().find_iter(text) {
        // Terminal punctuation is ASCII, so +1 stays on a char boundary.
        push_sentence(&mut sentences, &text[cursor..m.start() + 1]);
        cursor = m.end();
    }
    push_sentence(&mut sentences, &text[cursor..]);

    sentences
}

fn push_sentence<'a>(out: &mut Vec<&'a str>, raw: &'a str) {
    let trimmed = raw.trim();
    if trimmed.chars().count() >= MIN_SENTENCE_CHARS {
        out.push(trimmed);
    }
}

/// Paragraphs are separated by one or more blank lines
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_break_re()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Lowercase a token and strip surrounding punctuation ("Hello," -> "hello").
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Word count of each sentence, in order
pub fn sentence_word_lengths(sentences: &[&str]) -> Vec<f64> {
    sentences
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect()
}
