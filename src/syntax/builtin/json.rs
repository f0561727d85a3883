//! JSON language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("json");
    for ext in ["json", "jsonc", "json5", "geojson"] {
        lang.add_extension(ext);
    }
    lang.add_filename(".babelrc");
    lang.add_filename(".eslintrc");

    // Comments (jsonc)
    lang.add_rule(TokenType::Comment, r"//.*$");

    // Object keys before plain strings
    lang.add_rule(TokenType::Tag, r#""(?:[^"\\\n]|\\.)*"\s*:"#);
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);

    // Literals
    lang.add_rule(TokenType::Constant, r"\b(true|false|null)\b");
    lang.add_rule(TokenType::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b");

    lang
}
