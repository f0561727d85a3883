//! hilite - regex-driven syntax highlighting for tag-based text widgets
//!
//! A language is an ordered table of (category, regex) rules. The
//! tokenizer turns a slice of text into non-overlapping classified
//! spans, and the highlight controller maps those spans onto named tags
//! of a host buffer, re-running on demand for the visible window only.

pub mod config;
pub mod error;
pub mod highlight;
pub mod render;
pub mod syntax;

pub use config::{Config, HighlightSettings};
pub use error::{HighlightError, Result};
pub use highlight::{HighlightController, HighlightOutcome, MemoryBuffer, RenderMode, TextBuffer};
pub use syntax::{LanguageDefinition, LanguageRegistry, TokenType};
