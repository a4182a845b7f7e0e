//! Sentence-boundary model and instruction fragment splitting.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use regex::Regex;

use crate::vocab;

/// Rule-based sentence boundary model.
///
/// Built once at startup and shared read-only (wrap in an [`Arc`]) across
/// every recipe parse; segmentation holds no mutable state. A terminator run
/// (`.`, `!`, `?`) followed by whitespace ends a sentence, unless it is a
/// single period preceded by a known abbreviation. Periods inside decimal
/// numbers are never followed by whitespace and so never split.
pub struct SentenceModel {
    boundary: Regex,
    abbreviations: HashSet<&'static str>,
}

impl SentenceModel {
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"([.!?]+)\s+").unwrap(),
            abbreviations: vocab::ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split `text` into sentences, terminators included.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for caps in self.boundary.captures_iter(text) {
            let terminator = caps.get(1).unwrap();
            if !self.ends_sentence(text, terminator.start(), terminator.as_str()) {
                continue;
            }
            let sentence = text[start..terminator.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = caps.get(0).unwrap().end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }

    fn ends_sentence(&self, text: &str, terminator_start: usize, terminator: &str) -> bool {
        if terminator != "." {
            return true;
        }
        let word = text[..terminator_start]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        !self
            .abbreviations
            .contains(word.to_lowercase().as_str())
    }
}

impl Default for SentenceModel {
    fn default() -> Self {
        Self::new()
    }
}

/// One atomic instruction clause, with the index of the block it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub block: usize,
}

/// Splits instruction blocks into ordered fragments: sentences first, then
/// semicolon-separated clauses, empties dropped.
pub struct FragmentSegmenter {
    model: Arc<SentenceModel>,
}

impl FragmentSegmenter {
    pub fn new(model: Arc<SentenceModel>) -> Self {
        Self { model }
    }

    pub fn segment(&self, blocks: &[String]) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for (block, text) in blocks.iter().enumerate() {
            let before = fragments.len();
            for sentence in self.model.sentences(text.trim()) {
                for clause in sentence.split(';') {
                    let clause = clause.trim();
                    if !clause.is_empty() {
                        fragments.push(Fragment {
                            text: clause.to_string(),
                            block,
                        });
                    }
                }
            }
            debug!("block {}: {} fragments", block, fragments.len() - before);
        }
        fragments
    }
}
