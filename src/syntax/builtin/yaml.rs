//! YAML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create YAML language definition
pub fn yaml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("yaml");
    lang.add_extension("yaml");
    lang.add_extension("yml");

    // Comments: start of line or after whitespace
    lang.add_rule(TokenType::Comment, r"(?:^|[ \t])#.*$");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'(?:[^'\n]|'')*'");

    // Document markers
    lang.add_rule(TokenType::Preprocessor, r"^(?:---|\.\.\.)\s*$");

    // Keys
    lang.add_rule(TokenType::Tag, r"^[ \t]*(?:- )?[\w.\-/]+\s*:");

    // Anchors, aliases and tags
    lang.add_rule(TokenType::Variable, r"[&*][\w\-]+|!!?\w+");

    // Values
    lang.add_rule(TokenType::Constant, r"\b(true|false|yes|no|on|off|null)\b|~");
    lang.add_rule(TokenType::Number, r"[+-]?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b");

    lang
}
