//! SQL language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("sql");
    lang.add_extension("sql");

    // Comments
    lang.add_rule(TokenType::Comment, r"--.*$");
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings and quoted identifiers
    lang.add_rule(TokenType::String, r"'(?:[^']|'')*'");
    lang.add_rule(TokenType::Variable, r#""[^"\n]*"|`[^`\n]*`"#);

    // Keywords
    let keywords = r"(?i)\b(select|from|where|insert|into|values|update|set|delete|create|alter|drop|table|index|view|join|inner|left|right|outer|full|cross|on|as|and|or|not|in|is|like|between|group|by|order|having|limit|offset|union|all|distinct|case|when|then|else|end|primary|key|foreign|references|default|unique|exists|begin|commit|rollback|with|returning)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Types
    let types = r"(?i)\b(int|integer|bigint|smallint|serial|text|varchar|char|boolean|bool|date|timestamp|timestamptz|numeric|decimal|real|float|double|json|jsonb|uuid|blob)\b";
    lang.add_rule(TokenType::Type, types);

    // Constants
    lang.add_rule(TokenType::Constant, r"(?i)\b(null|true|false)\b");

    // Functions
    lang.add_rule(TokenType::Builtin, r"(?i)\b(count|sum|avg|min|max|coalesce|now|lower|upper|length|substring|cast)\b");

    // Parameters and numbers
    lang.add_rule(TokenType::Variable, r"[:$@]\w+|\?");
    lang.add_rule(TokenType::Number, r"\b\d+(?:\.\d+)?\b");

    lang
}
