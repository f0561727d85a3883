//! Markdown language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("markdown");
    lang.add_extension("md");
    lang.add_extension("markdown");
    lang.add_extension("mkd");

    // Fenced code blocks and inline code
    lang.add_rule(TokenType::String, r"(?s)^```.*?^```");
    lang.add_rule(TokenType::String, r"`[^`\n]+`");

    // HTML comments
    lang.add_rule(TokenType::Comment, r"(?s)<!--.*?-->");

    // Headers
    lang.add_rule(TokenType::Heading, r"^#{1,6}\s+.*$");

    // Blockquotes
    lang.add_rule(TokenType::Comment, r"^>\s?.*$");

    // Links and images
    lang.add_rule(TokenType::Url, r"!?\[[^\]\n]*\]\([^)\n]+\)");
    lang.add_rule(TokenType::Url, r"\[[^\]\n]+\]\[[^\]\n]*\]");

    // Bold, then italic
    lang.add_rule(TokenType::Keyword, r"\*\*[^*\n]+\*\*|__[^_\n]+__");
    lang.add_rule(TokenType::Type, r"\*[^*\n]+\*|\b_[^_\n]+_\b");

    // List markers and rules
    lang.add_rule(TokenType::Operator, r"^[ \t]*(?:[-*+]|\d+\.)\s");
    lang.add_rule(TokenType::Operator, r"^(?:---+|\*\*\*+|___+)\s*$");

    lang
}
