//! CSS language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("css");
    for ext in ["css", "scss", "less"] {
        lang.add_extension(ext);
    }

    // Comments
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#);

    // At-rules
    lang.add_rule(TokenType::Keyword, r"@[\w-]+");

    // Colors
    lang.add_rule(TokenType::Hex, r"#[0-9a-fA-F]{3,8}\b");

    // Properties
    lang.add_rule(TokenType::Attribute, r"\b[a-z-]+\s*:");

    // Selectors
    lang.add_rule(TokenType::Tag, r"[.#][\w-]+|::?[\w-]+");

    // Variables
    lang.add_rule(TokenType::Variable, r"--[\w-]+|\$[\w-]+");

    // Numbers with units
    lang.add_rule(TokenType::Number, r"-?\b\d+(?:\.\d+)?(?:px|em|rem|vh|vw|%|s|ms|deg|fr|pt)?");

    // Important
    lang.add_rule(TokenType::Constant, r"!important");

    lang
}
