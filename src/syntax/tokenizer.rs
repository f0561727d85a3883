//! Tokenizer: text slice + language -> classified spans
//!
//! Rules run in category priority order over the whole slice. A match
//! that touches any character already claimed by an earlier match is
//! dropped, so the result never overlaps and a keyword-looking word
//! inside a comment or string keeps the outer classification.

use std::collections::BTreeMap;
use std::ops::Range;

use super::language::CompiledLanguage;

/// A classified character range within the tokenized slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Category name
    pub category: &'a str,
    /// Character offset where this span starts (inclusive)
    pub start: usize,
    /// Character offset where this span ends (exclusive)
    pub end: usize,
}

impl<'a> Span<'a> {
    /// Create a new span
    pub fn new(category: &'a str, start: usize, end: usize) -> Self {
        Self { category, start, end }
    }

    /// Check if this span contains a character offset
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Byte offset -> character offset translation for one slice
struct CharOffsets {
    /// Byte offset of every char; empty when the slice is ASCII
    boundaries: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let boundaries = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices().map(|(i, _)| i).collect()
        };
        Self { boundaries }
    }

    fn char_offset(&self, byte: usize) -> usize {
        if self.boundaries.is_empty() {
            byte
        } else {
            self.boundaries.partition_point(|&b| b < byte)
        }
    }
}

/// Disjoint byte ranges already claimed by a span
#[derive(Default)]
struct Claimed {
    ranges: BTreeMap<usize, usize>,
}

impl Claimed {
    fn overlaps(&self, range: &Range<usize>) -> bool {
        // Ranges are disjoint, so the last one starting before `range.end`
        // reaches furthest among those that could overlap.
        self.ranges
            .range(..range.end)
            .next_back()
            .is_some_and(|(_, &end)| end > range.start)
    }

    fn claim(&mut self, range: Range<usize>) {
        self.ranges.insert(range.start, range.end);
    }
}

/// Classify a text slice
///
/// Returns non-overlapping spans sorted by start offset. Offsets are
/// character offsets relative to the start of `text`.
pub fn tokenize<'l>(text: &str, language: &'l CompiledLanguage) -> Vec<Span<'l>> {
    let offsets = CharOffsets::new(text);
    let mut claimed = Claimed::default();
    let mut spans = Vec::new();

    for rule in language.rules() {
        for range in rule.find_all(text) {
            if claimed.overlaps(&range) {
                continue;
            }
            spans.push(Span::new(
                &rule.category,
                offsets.char_offset(range.start),
                offsets.char_offset(range.end),
            ));
            claimed.claim(range);
        }
    }

    spans.sort_by_key(|s| s.start);
    spans
}
