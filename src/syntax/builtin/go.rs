//! Go language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create Go language definition
pub fn go_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("go");
    lang.add_extension("go");

    // Comments
    lang.add_rule(TokenType::Comment, r"//.*$");
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings, raw strings and runes
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"`[^`]*`");
    lang.add_rule(TokenType::String, r"'(?:[^'\\\n]|\\.)+'");

    // Keywords
    let keywords = r"\b(break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Types
    let types = r"\b(bool|byte|complex64|complex128|error|float32|float64|int|int8|int16|int32|int64|rune|string|uint|uint8|uint16|uint32|uint64|uintptr|any)\b";
    lang.add_rule(TokenType::Type, types);

    // Constants
    lang.add_rule(TokenType::Constant, r"\b(true|false|nil|iota)\b");

    // Built-in functions
    lang.add_rule(TokenType::Builtin, r"\b(append|cap|close|copy|delete|len|make|new|panic|print|println|recover)\b");

    // Numbers
    lang.add_rule(TokenType::Number, r"\b0[xX][0-9a-fA-F_]+\b");
    lang.add_rule(TokenType::Number, r"\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?i?\b");

    lang
}
