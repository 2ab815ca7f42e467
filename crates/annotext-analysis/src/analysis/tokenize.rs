//! Unicode-aware segmentation with character offsets.
//!
//! Offsets reported by annotations are character offsets into the original
//! text, matching what downstream consumers expect. `unicode-segmentation`
//! yields byte offsets, so `CharIndex` maps between the two once per input.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Byte-to-character offset map for one input text.
pub struct CharIndex {
    map: HashMap<usize, usize>,
    total_chars: usize,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let mut map = HashMap::new();
        let mut total_chars = 0;
        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            map.insert(byte_idx, char_idx);
            total_chars = char_idx + 1;
        }
        map.insert(text.len(), total_chars);
        Self { map, total_chars }
    }

    /// Character offset for a byte offset on a char boundary.
    pub fn char_at(&self, byte_offset: usize) -> usize {
        self.map.get(&byte_offset).copied().unwrap_or(self.total_chars)
    }
}

/// A word-boundary segment with its character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub char_offset: usize,
}

impl Segment {
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    pub fn is_punctuation(&self) -> bool {
        !self.is_whitespace() && !self.text.chars().any(char::is_alphanumeric)
    }
}

/// Split text on Unicode word boundaries, keeping every segment (words,
/// punctuation, and whitespace runs) in original order.
pub fn segments(text: &str, index: &CharIndex) -> Vec<Segment> {
    text.split_word_bound_indices()
        .map(|(byte_offset, seg)| Segment {
            text: seg.to_string(),
            char_offset: index.char_at(byte_offset),
        })
        .collect()
}

/// Split text into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<String> {
    text.split_sentence_bounds()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
