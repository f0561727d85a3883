//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` is plain data: the file names it claims, an
//! ordered list of pattern rules and a style for every category. It is
//! turned into an immutable `CompiledLanguage` by `compile()`, which is
//! what the tokenizer and the registry work with.

use std::collections::HashMap;

use tracing::warn;

use super::rules::{CompiledRule, PatternRule};
use super::style::Style;
use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// A complete language definition, before compilation
#[derive(Debug, Clone, Default)]
pub struct LanguageDefinition {
    /// Language identifier (e.g., "rust", "python")
    pub id: String,
    /// File extensions without the dot (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Reserved file names (e.g., ["Dockerfile"])
    pub filenames: Vec<String>,
    /// Pattern rules in insertion order
    pub rules: Vec<PatternRule>,
    /// Style for every category
    pub styles: HashMap<String, Style>,
    /// Explicit category priority, overriding insertion order
    pub pattern_order: Option<Vec<String>>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// Add a file extension (a leading dot is ignored)
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_string());
    }

    /// Add a reserved file name
    pub fn add_filename(&mut self, name: &str) {
        self.filenames.push(name.to_string());
    }

    /// Add a rule for a well-known category, registering its default style
    pub fn add_rule(&mut self, token_type: TokenType, pattern: &str) {
        self.styles
            .entry(token_type.name().to_string())
            .or_insert_with(|| token_type.default_style());
        self.rules.push(PatternRule::new(token_type.name(), pattern));
    }

    /// Add a rule for an arbitrary category
    ///
    /// The category needs a style from `set_style` before the definition
    /// compiles, unless it is the name of a well-known category.
    pub fn add_custom_rule(&mut self, category: &str, pattern: &str) {
        if let Some(token_type) = TokenType::from_name(category) {
            self.styles
                .entry(category.to_string())
                .or_insert_with(|| token_type.default_style());
        }
        self.rules.push(PatternRule::new(category, pattern));
    }

    /// Set the style of a category
    pub fn set_style(&mut self, category: &str, style: Style) {
        self.styles.insert(category.to_string(), style);
    }

    /// Set an explicit category priority (highest first)
    pub fn set_pattern_order(&mut self, order: &[&str]) {
        self.pattern_order = Some(order.iter().map(|s| s.to_string()).collect());
    }

    /// Categories in priority order, highest first
    ///
    /// Categories named by `pattern_order` come first, in that order;
    /// the rest follow in order of first appearance in `rules`.
    pub fn category_order(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        let explicit = self.pattern_order.iter().flatten();
        let appearance = self.rules.iter().map(|r| &r.category);
        for category in explicit.chain(appearance) {
            if !order.contains(category) {
                order.push(category.clone());
            }
        }
        order
    }

    /// Compile every rule into an immutable `CompiledLanguage`
    ///
    /// A pattern that fails to compile takes its whole category out of the
    /// result; the failure is logged and recorded in `skipped()`. A
    /// category without a style is an error.
    pub fn compile(&self) -> Result<CompiledLanguage> {
        let order = self.category_order();

        if let Some(missing) = order.iter().find(|c| !self.styles.contains_key(*c)) {
            return Err(HighlightError::MissingStyle(missing.clone()));
        }

        let mut rules = Vec::new();
        let mut skipped = Vec::new();

        for category in &order {
            let compiled: Result<Vec<CompiledRule>> = self
                .rules
                .iter()
                .filter(|r| &r.category == category)
                .map(PatternRule::compile)
                .collect();

            match compiled {
                Ok(mut category_rules) => rules.append(&mut category_rules),
                Err(e) => {
                    warn!(language = %self.id, category = %category, "skipping category: {}", e);
                    skipped.push(SkippedCategory {
                        category: category.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let styles = order
            .iter()
            .filter_map(|c| self.styles.get(c).map(|s| (c.clone(), *s)))
            .collect();

        Ok(CompiledLanguage {
            id: self.id.clone(),
            extensions: self.extensions.clone(),
            filenames: self.filenames.clone(),
            rules,
            styles,
            skipped,
        })
    }
}

/// A category dropped at compile time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCategory {
    pub category: String,
    pub reason: String,
}

/// An immutable, compiled language definition
#[derive(Debug, Clone)]
pub struct CompiledLanguage {
    id: String,
    extensions: Vec<String>,
    filenames: Vec<String>,
    /// Rules sorted by category priority, highest first
    rules: Vec<CompiledRule>,
    /// Category styles in priority order
    styles: Vec<(String, Style)>,
    skipped: Vec<SkippedCategory>,
}

impl CompiledLanguage {
    /// A language with no rules; classifies nothing
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            extensions: Vec::new(),
            filenames: Vec::new(),
            rules: Vec::new(),
            styles: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Compiled rules, highest priority first
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Category styles, highest priority first
    pub fn styles(&self) -> &[(String, Style)] {
        &self.styles
    }

    /// Style of a category
    pub fn style(&self, category: &str) -> Option<Style> {
        self.styles
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, s)| *s)
    }

    /// Categories dropped because a pattern failed to compile
    pub fn skipped(&self) -> &[SkippedCategory] {
        &self.skipped
    }
}

impl PartialEq for CompiledLanguage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
