//! TOML and INI language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("toml");
    for ext in ["toml", "ini", "cfg", "conf"] {
        lang.add_extension(ext);
    }
    lang.add_filename("Cargo.lock");
    lang.add_filename("Pipfile");

    // Comments
    lang.add_rule(TokenType::Comment, r"[#;].*$");

    // Strings: multi-line first
    lang.add_rule(TokenType::String, r#"(?s)""".*?"""|'''.*?'''"#);
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'[^'\n]*'");

    // Tables: [table] and [[array]]
    lang.add_rule(TokenType::Heading, r"^[ \t]*\[\[?[^\]\n]+\]\]?");

    // Keys
    lang.add_rule(TokenType::Tag, r"^[ \t]*[\w.\-]+\s*=");

    // Values
    lang.add_rule(TokenType::Constant, r"\b(true|false|inf|nan)\b");
    lang.add_rule(TokenType::Number, r"\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?\b");
    lang.add_rule(TokenType::Number, r"[+-]?\b(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b");

    lang
}
