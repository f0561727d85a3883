//! Text buffer collaborator
//!
//! The engine never owns document text. It reads character ranges and
//! requests tag changes through `TextBuffer`, which any host widget
//! implements. `MemoryBuffer` is a self-contained implementation used by
//! the command-line front end and the tests.

use std::collections::HashMap;
use std::ops::Range;

use crate::error::{HighlightError, Result};
use crate::syntax::Style;

/// Line/column position in a buffer (both 0-based, column in characters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Operations the engine needs from the widget that owns the text
///
/// Character indices count Unicode scalar values from the start of the
/// document, newlines included.
pub trait TextBuffer {
    /// Read a character range
    fn get_text(&self, range: Range<usize>) -> Result<String>;

    /// Apply a tag to a range; on overlap the last-configured tag wins
    fn tag_add(&mut self, tag: &str, start: Position, end: Position) -> Result<()>;

    /// Remove a tag from a range
    fn tag_remove(&mut self, tag: &str, start: Position, end: Position) -> Result<()>;

    /// Register the visual attributes of a tag
    fn configure_tag_style(&mut self, tag: &str, style: Style);

    /// First and last visible line, inclusive
    fn visible_range(&self) -> (usize, usize);

    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Character index where a line starts; `line_count()` and beyond
    /// map to the end of the document
    fn line_to_index(&self, line: usize) -> usize;

    /// Convert a character index to a position
    fn index_to_position(&self, index: usize) -> Position;
}

/// Sorted, disjoint, non-adjacent character ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    /// Add a range, merging with anything it touches
    pub fn insert(&mut self, mut range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let mut merged = Vec::with_capacity(self.ranges.len() + 1);
        let mut placed = false;
        for current in self.ranges.drain(..) {
            if current.end < range.start {
                merged.push(current);
            } else if current.start > range.end {
                if !placed {
                    merged.push(range.clone());
                    placed = true;
                }
                merged.push(current);
            } else {
                range = range.start.min(current.start)..range.end.max(current.end);
            }
        }
        if !placed {
            merged.push(range);
        }
        self.ranges = merged;
    }

    /// Subtract a range
    pub fn remove(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for current in self.ranges.drain(..) {
            if current.end <= range.start || current.start >= range.end {
                kept.push(current);
                continue;
            }
            if current.start < range.start {
                kept.push(current.start..range.start);
            }
            if current.end > range.end {
                kept.push(range.end..current.end);
            }
        }
        self.ranges = kept;
    }

    /// Drop everything at or beyond `len`
    pub fn truncate(&mut self, len: usize) {
        self.remove(len..usize::MAX);
    }

    pub fn contains(&self, index: usize) -> bool {
        let i = self.ranges.partition_point(|r| r.end <= index);
        self.ranges.get(i).is_some_and(|r| r.start <= index)
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// In-memory text buffer with tag support
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    chars: Vec<char>,
    /// Character index of the start of every line
    line_starts: Vec<usize>,
    /// First and last visible line
    viewport: (usize, usize),
    tags: HashMap<String, RangeSet>,
    /// Tag styles in configuration order; later entries win on overlap
    styles: Vec<(String, Style)>,
}

impl MemoryBuffer {
    /// Create a buffer holding `text`, with every line visible
    pub fn new(text: &str) -> Self {
        let mut buffer = Self {
            chars: Vec::new(),
            line_starts: vec![0],
            viewport: (0, 0),
            tags: HashMap::new(),
            styles: Vec::new(),
        };
        buffer.set_text(text);
        buffer.viewport = (0, buffer.line_count() - 1);
        buffer
    }

    /// Replace the whole text; tags beyond the new end are dropped
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.line_starts = std::iter::once(0)
            .chain(
                self.chars
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| **c == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        let len = self.chars.len();
        for ranges in self.tags.values_mut() {
            ranges.truncate(len);
        }
    }

    /// Full text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text of one line, without its newline
    pub fn line(&self, line: usize) -> Option<String> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.chars.len());
        Some(self.chars[start..end].iter().collect())
    }

    /// Scroll so that lines `first..=last` are visible
    pub fn set_viewport(&mut self, first: usize, last: usize) {
        self.viewport = (first, last.max(first));
    }

    /// Convert a position to a character index
    pub fn position_to_index(&self, position: Position) -> Result<usize> {
        let out_of_range = || HighlightError::InvalidPosition {
            line: position.line,
            column: position.column,
        };
        let start = *self.line_starts.get(position.line).ok_or_else(out_of_range)?;
        let line_end = self
            .line_starts
            .get(position.line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.chars.len());
        if start + position.column > line_end {
            return Err(out_of_range());
        }
        Ok(start + position.column)
    }

    fn index_range(&self, start: Position, end: Position) -> Result<Range<usize>> {
        let start = self.position_to_index(start)?;
        let end = self.position_to_index(end)?;
        if start > end {
            return Err(HighlightError::InvalidRange {
                start,
                end,
                len: self.chars.len(),
            });
        }
        Ok(start..end)
    }

    /// Ranges covered by a tag
    pub fn tag_ranges(&self, tag: &str) -> &[Range<usize>] {
        self.tags.get(tag).map(RangeSet::ranges).unwrap_or(&[])
    }

    /// Names of tags currently covering at least one character, sorted
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .tags
            .iter()
            .filter(|(_, ranges)| !ranges.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort();
        names
    }

    /// Tags covering a character index, sorted
    pub fn tags_at(&self, index: usize) -> Vec<&str> {
        let mut names: Vec<_> = self
            .tags
            .iter()
            .filter(|(_, ranges)| ranges.contains(index))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort();
        names
    }

    /// Registered style of a tag
    pub fn tag_style(&self, tag: &str) -> Option<Style> {
        self.styles.iter().find(|(t, _)| t == tag).map(|(_, s)| *s)
    }

    /// Effective style at a character index
    pub fn style_at(&self, index: usize) -> Option<Style> {
        self.styles
            .iter()
            .rev()
            .find(|(tag, _)| self.tags.get(tag).is_some_and(|r| r.contains(index)))
            .map(|(_, style)| *style)
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextBuffer for MemoryBuffer {
    fn get_text(&self, range: Range<usize>) -> Result<String> {
        if range.start > range.end || range.end > self.chars.len() {
            return Err(HighlightError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.chars.len(),
            });
        }
        Ok(self.chars[range].iter().collect())
    }

    fn tag_add(&mut self, tag: &str, start: Position, end: Position) -> Result<()> {
        let range = self.index_range(start, end)?;
        self.tags.entry(tag.to_string()).or_default().insert(range);
        Ok(())
    }

    fn tag_remove(&mut self, tag: &str, start: Position, end: Position) -> Result<()> {
        let range = self.index_range(start, end)?;
        if let Some(ranges) = self.tags.get_mut(tag) {
            ranges.remove(range);
        }
        Ok(())
    }

    fn configure_tag_style(&mut self, tag: &str, style: Style) {
        match self.styles.iter_mut().find(|(t, _)| t == tag) {
            Some((_, existing)) => *existing = style,
            None => self.styles.push((tag.to_string(), style)),
        }
    }

    fn visible_range(&self) -> (usize, usize) {
        self.viewport
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_to_index(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.chars.len())
    }

    fn index_to_position(&self, index: usize) -> Position {
        let index = index.min(self.chars.len());
        let line = self.line_starts.partition_point(|&s| s <= index) - 1;
        Position::new(line, index - self.line_starts[line])
    }
}
