//! Syntax classification
//!
//! This module provides the data and algorithms behind highlighting:
//! - Styles and well-known token categories
//! - Pattern rules and language definitions
//! - The tokenizer that turns text into classified spans
//! - The registry that picks a language for a file

mod builtin;
mod language;
mod registry;
mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use language::{CompiledLanguage, LanguageDefinition, SkippedCategory};
pub use registry::{LanguageRegistry, AUTO};
pub use rules::{CompiledRule, PatternRule};
pub use style::{Color, Style};
pub use tokenizer::{tokenize, Span};
pub use tokens::TokenType;
