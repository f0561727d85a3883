//! Pattern rules for syntax highlighting
//!
//! A rule pairs a category name with a regular expression. Rules are
//! stored as source text in a `LanguageDefinition` and compiled once
//! into `CompiledRule`s when the definition is built.
//!
//! A pattern may mark the part of its match to classify with a group
//! named `tok`; the rest of the match only provides context.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{HighlightError, Result};

/// Name of the capture group that narrows a match
pub const TOKEN_GROUP: &str = "tok";

/// A single (category, pattern) pair, uncompiled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    /// Category assigned to matches
    pub category: String,
    /// Regex source
    pub pattern: String,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(category: &str, pattern: &str) -> Self {
        Self {
            category: category.to_string(),
            pattern: pattern.to_string(),
        }
    }

    /// Compile the pattern
    ///
    /// Patterns run against multi-line slices, so `^` and `$` match at
    /// line boundaries, `\r\n` included.
    pub fn compile(&self) -> Result<CompiledRule> {
        let regex = RegexBuilder::new(&self.pattern)
            .multi_line(true)
            .crlf(true)
            .build()
            .map_err(|source| HighlightError::Pattern {
                category: self.category.clone(),
                source,
            })?;
        let group = regex.capture_names().position(|name| name == Some(TOKEN_GROUP));
        Ok(CompiledRule {
            category: self.category.clone(),
            regex,
            group,
        })
    }
}

/// A rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Category assigned to matches
    pub category: String,
    /// Compiled regex pattern
    pub regex: Regex,
    /// Index of the `tok` group, if the pattern has one
    group: Option<usize>,
}

impl CompiledRule {
    /// All non-empty matches in text, as byte ranges
    pub fn find_all<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = Range<usize>> + 't> {
        match self.group {
            None => Box::new(
                self.regex
                    .find_iter(text)
                    .map(|m| m.start()..m.end())
                    .filter(|r| r.start < r.end),
            ),
            Some(group) => Box::new(
                self.regex
                    .captures_iter(text)
                    .filter_map(move |caps| caps.get(group))
                    .map(|m| m.start()..m.end())
                    .filter(|r| r.start < r.end),
            ),
        }
    }
}
