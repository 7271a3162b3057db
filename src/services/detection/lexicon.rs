// Lexical Tables
// Static reference vocabulary and the compiled matchers built from it.
// Tables are never mutated; one compiled instance is shared by every analysis.

use regex::Regex;
use std::sync::OnceLock;

/// Phrases that are near-signatures of generated prose. Counted twice.
pub const STRONG_AI_PHRASES: &[&str] = &[
    "it's important to note",
    "it is important to note",
    "it's worth noting",
    "it is worth noting",
    "in today's rapidly evolving",
    "in today's fast-paced",
    "in today's digital age",
    "delve into",
    "dive deep into",
    "in the realm of",
    "a testament to",
    "tapestry of",
    "navigate the complexities",
    "navigating the complexities",
    "plays a crucial role",
    "plays a pivotal role",
    "ever-evolving landscape",
    "unlock the potential",
    "unlocking the potential",
    "embark on a journey",
    "i hope this helps",
    "as an ai language model",
    "it's crucial to",
    "it is crucial to",
    "stands as a",
    "the intricacies of",
];

/// Phrases that lean generated but also show up in careful human writing.
pub const MEDIUM_AI_PHRASES: &[&str] = &[
    "in conclusion",
    "in summary",
    "to summarize",
    "overall, the",
    "it is essential",
    "it's essential",
    "a wide range of",
    "a variety of",
    "in order to",
    "when it comes to",
    "at the end of the day",
    "on the other hand",
    "first and foremost",
    "last but not least",
    "in terms of",
    "a key aspect",
    "a crucial aspect",
    "paving the way",
    "pave the way",
    "shed light on",
    "sheds light on",
    "the importance of",
    "by leveraging",
    "foster a",
    "fostering a",
    "key takeaways",
    "moving forward",
    "in this article",
    "this ensures that",
    "not only",
    "whether you're",
    "whether you are",
    "the landscape of",
    "best practices",
    "valuable insights",
];

/// Single words overrepresented in model output. Inflections are listed explicitly.
pub const AI_VOCABULARY: &[&str] = &[
    "delve", "delves", "delving",
    "leverage", "leverages", "leveraging", "leveraged",
    "robust",
    "seamless", "seamlessly",
    "comprehensive",
    "crucial",
    "pivotal",
    "multifaceted",
    "intricate", "intricacies",
    "tapestry",
    "landscape",
    "realm",
    "paradigm",
    "synergy", "synergies",
    "holistic",
    "nuanced",
    "foster", "fosters", "fostering",
    "streamline", "streamlined", "streamlining",
    "utilize", "utilizes", "utilizing", "utilization",
    "facilitate", "facilitates", "facilitating",
    "enhance", "enhances", "enhancing",
    "optimize", "optimizes", "optimizing",
    "empower", "empowers", "empowering",
    "innovative",
    "cutting-edge",
    "transformative",
    "dynamic",
    "vibrant",
    "meticulous", "meticulously",
    "paramount",
    "underscore", "underscores",
    "endeavor", "endeavors",
    "embark",
    "navigate", "navigating",
    "showcase", "showcases", "showcasing",
    "notably",
    "furthermore",
    "moreover",
    "additionally",
];

/// Connectives that stitch sentences together formally.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "nevertheless",
    "nonetheless",
    "meanwhile",
    "subsequently",
    "accordingly",
    "conversely",
    "similarly",
    "likewise",
    "notably",
    "ultimately",
    "indeed",
    "specifically",
    "in addition",
    "in contrast",
    "as a result",
    "for instance",
    "for example",
    "on the other hand",
    "in conclusion",
    "to summarize",
    "that said",
    "in other words",
];

/// "it's" and "let's" are left out; both open common AI phrasing.
pub const CONTRACTIONS: &[&str] = &[
    "i'm", "i've", "i'd", "i'll",
    "you're", "you've", "you'd", "you'll",
    "we're", "we've", "we'd", "we'll",
    "they're", "they've", "they'd", "they'll",
    "he's", "she's", "he'd", "she'd",
    "that's", "there's", "here's", "what's", "who's", "where's", "how's",
    "don't", "doesn't", "didn't",
    "can't", "couldn't",
    "won't", "wouldn't",
    "shouldn't", "mustn't",
    "isn't", "aren't", "wasn't", "weren't",
    "haven't", "hasn't", "hadn't",
    "ain't", "y'all",
];

/// Counted only when a single sentence is scored.
pub const SENTENCE_CONTRACTIONS: &[&str] = &["it's", "let's"];

/// Matched case-sensitively in lowercase or capitalized form, so "US" is not "us".
pub const FIRST_PERSON_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself",
    "we", "us", "our", "ours", "ourselves",
];

/// Slang and conversational fillers.
pub const INFORMAL_MARKERS: &[&str] = &[
    "yeah", "yep", "nope", "nah",
    "honestly", "kinda", "sorta",
    "gonna", "wanna", "gotta", "dunno",
    "lol", "lmao", "haha", "omg", "tbh", "btw", "idk", "ugh", "meh",
    "okay", "ok", "hey", "wow", "huh",
    "stuff", "literally", "totally", "basically",
    "awesome", "cool", "weird", "super",
    "guess", "anyway", "pretty",
];

/// Apostrophe glyphs accepted inside contractions.
const APOSTROPHE_CLASS: &str = "['\u{2019}\u{2018}]";

/// Compiled view over the static tables.
#[derive(Debug)]
pub struct LexicalTables {
    strong_phrases: &'static [&'static str],
    medium_phrases: &'static [&'static str],
    vocabulary_re: Regex,
    transition_re: Regex,
    contraction_re: Regex,
    sentence_contraction_re: Regex,
    first_person_re: Regex,
    informal_re: Regex,
}

/// Process-wide tables, compiled on first use.
pub fn lexicon() -> &'static LexicalTables {
    static TABLES: OnceLock<LexicalTables> = OnceLock::new();
    TABLES.get_or_init(LexicalTables::compile)
}

fn word_alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

fn whole_word_re(words: &[&str], name: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", word_alternation(words)))
        .unwrap_or_else(|e| panic!("{} regex: {}", name, e))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn first_person_re() -> Regex {
    let alternation = FIRST_PERSON_PRONOUNS
        .iter()
        .flat_map(|w| [w.to_string(), capitalize(w)])
        .map(|w| regex::escape(&w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("first person regex")
}

fn contraction_re(extra: &[&str]) -> Regex {
    let alternation = CONTRACTIONS
        .iter()
        .chain(extra)
        .map(|c| regex::escape(c).replace('\'', APOSTROPHE_CLASS))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("contraction regex")
}

/// Lowercase and fold curly apostrophes so phrase tables match either glyph.
pub fn fold_for_phrases(text: &str) -> String {
    text.to_lowercase().replace(&['\u{2019}', '\u{2018}'][..], "'")
}

fn count_phrases(folded: &str, phrases: &[&str]) -> usize {
    phrases.iter().map(|p| folded.matches(*p).count()).sum()
}

impl LexicalTables {
    fn compile() -> Self {
        Self {
            strong_phrases: STRONG_AI_PHRASES,
            medium_phrases: MEDIUM_AI_PHRASES,
            vocabulary_re: whole_word_re(AI_VOCABULARY, "vocabulary"),
            transition_re: whole_word_re(TRANSITION_WORDS, "transition"),
            contraction_re: contraction_re(&[]),
            sentence_contraction_re: contraction_re(SENTENCE_CONTRACTIONS),
            first_person_re: first_person_re(),
            informal_re: whole_word_re(INFORMAL_MARKERS, "informal"),
        }
    }

    /// Occurrences of strong phrases in text already passed through [`fold_for_phrases`].
    pub fn count_strong_phrases(&self, folded: &str) -> usize {
        count_phrases(folded, self.strong_phrases)
    }

    pub fn count_medium_phrases(&self, folded: &str) -> usize {
        count_phrases(folded, self.medium_phrases)
    }

    pub fn contains_any_phrase(&self, folded: &str) -> bool {
        self.strong_phrases
            .iter()
            .chain(self.medium_phrases.iter())
            .any(|p| folded.contains(*p))
    }

    pub fn count_vocabulary(&self, text: &str) -> usize {
        self.vocabulary_re.find_iter(text).count()
    }

    pub fn count_transitions(&self, text: &str) -> usize {
        self.transition_re.find_iter(text).count()
    }

    pub fn count_contractions(&self, text: &str) -> usize {
        self.contraction_re.find_iter(text).count()
    }

    pub fn has_contraction(&self, text: &str) -> bool {
        self.contraction_re.is_match(text)
    }

    /// Wider check used by the sentence scorer, where "it's" and "let's" count too.
    pub fn has_sentence_contraction(&self, text: &str) -> bool {
        self.sentence_contraction_re.is_match(text)
    }

    pub fn count_first_person(&self, text: &str) -> usize {
        self.first_person_re.find_iter(text).count()
    }

    pub fn has_first_person(&self, text: &str) -> bool {
        self.first_person_re.is_match(text)
    }

    pub fn count_informal(&self, text: &str) -> usize {
        self.informal_re.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for table in [
            STRONG_AI_PHRASES,
            MEDIUM_AI_PHRASES,
            AI_VOCABULARY,
            TRANSITION_WORDS,
            CONTRACTIONS,
            SENTENCE_CONTRACTIONS,
            FIRST_PERSON_PRONOUNS,
            INFORMAL_MARKERS,
        ] {
            for entry in table {
                assert_eq!(*entry, entry.to_lowercase(), "table entry {:?}", entry);
            }
        }
    }

    #[test]
    fn test_lexicon_is_shareable() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<LexicalTables>();
        assert!(std::ptr::eq(lexicon(), lexicon()));
    }

    #[test]
    fn test_phrase_counts_fold_case_and_apostrophes() {
        let folded = fold_for_phrases("It\u{2019}s important to note this. IT'S IMPORTANT TO NOTE that.");
        assert_eq!(lexicon().count_strong_phrases(&folded), 2);
        assert!(lexicon().contains_any_phrase(&folded));
        assert!(!lexicon().contains_any_phrase("plain words only"));
    }

    #[test]
    fn test_vocabulary_is_whole_word_with_repetition() {
        let lx = lexicon();
        assert_eq!(lx.count_vocabulary("Robust, robust and ROBUST."), 3);
        assert_eq!(lx.count_vocabulary("robustness is not robust-ish"), 1);
        assert_eq!(lx.count_vocabulary("We leverage this leverage."), 2);
    }

    #[test]
    fn test_transitions_include_multi_word() {
        let lx = lexicon();
        assert_eq!(lx.count_transitions("However, it rained. On the other\nhand, we stayed."), 2);
        assert_eq!(lx.count_transitions("thusly"), 0);
    }

    #[test]
    fn test_contractions_accept_apostrophe_glyphs() {
        let lx = lexicon();
        assert_eq!(lx.count_contractions("I'm sure I\u{2019}m right and I\u{2018}m done."), 3);
        assert_eq!(lx.count_contractions("Don't, DON'T, dont"), 2);
        assert_eq!(lx.count_contractions("It's fine, let's go."), 0);
        assert!(lx.has_contraction("that's it"));
        assert!(lx.has_sentence_contraction("It\u{2019}s cold out."));
        assert!(lx.has_sentence_contraction("Let's go."));
        assert!(lx.has_sentence_contraction("We don't know."));
        assert!(!lx.has_sentence_contraction("It is cold out."));
    }

    #[test]
    fn test_phrase_entries_do_not_overlap() {
        let all: Vec<&str> = STRONG_AI_PHRASES.iter().chain(MEDIUM_AI_PHRASES).copied().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                assert!(i == j || !a.contains(b), "{:?} contains {:?}", a, b);
            }
        }
        let folded = fold_for_phrases("Let's delve into it. A rich tapestry of ideas. In conclusion, it is done.");
        assert_eq!(lexicon().count_strong_phrases(&folded), 2);
        assert_eq!(lexicon().count_medium_phrases(&folded), 1);
    }

    #[test]
    fn test_first_person_and_informal() {
        let lx = lexicon();
        assert_eq!(lx.count_first_person("I think my dog likes us. I'm sure."), 4);
        assert!(!lx.has_first_person("The island is minimal."));
        assert_eq!(lx.count_first_person("The US economy grew. The U.S. market rose."), 0);
        assert_eq!(lx.count_first_person("Us? My plan. MY plan."), 2);
        assert_eq!(lx.count_informal("Yeah, it was kinda weird honestly."), 4);
    }
}
