//! Generic fallback language
//!
//! Used for any file the registry does not recognize. Covers the
//! constructs that show up in config files, logs and plain notes.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::registry::AUTO;
use crate::syntax::tokens::TokenType;

/// Create the fallback language definition
pub fn auto_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(AUTO);

    // Comments: any style at line start; after code only `//`, `;` and
    // `# ` so that `#ff0000` and `--flag` stay out
    lang.add_rule(TokenType::Comment, r"^[ \t]*(?P<tok>(?:#|//|;|--).*)$");
    lang.add_rule(TokenType::Comment, r"[ \t](?P<tok>(?://|;).*|#(?:[ \t!#].*)?)$");
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'(?:[^'\\\n]|\\.)*'");

    // URLs and emails before anything that could match inside them
    lang.add_rule(TokenType::Url, r#"\b(?:https?|ftp|file|ssh|git)://[^\s<>"')\]]+"#);
    lang.add_rule(TokenType::Email, r"\b[\w.+\-]+@[\w\-]+(?:\.[\w\-]+)+\b");

    // UUIDs, IPv4 addresses, hex digests
    lang.add_rule(TokenType::Uuid, r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b");
    lang.add_rule(TokenType::Address, r"\b(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)(?::\d{1,5})?\b");
    lang.add_rule(TokenType::Hex, r"\b0[xX][0-9a-fA-F]+\b|#[0-9a-fA-F]{6}\b|\b[0-9a-f]{32,64}\b");

    // Log levels
    lang.add_rule(TokenType::LogError, r"\b(?:ERROR|FATAL|CRITICAL|PANIC|FAIL(?:ED|URE)?)\b");
    lang.add_rule(TokenType::LogWarning, r"\b(?:WARN(?:ING)?|DEPRECATED)\b");
    lang.add_rule(TokenType::LogInfo, r"\b(?:INFO|DEBUG|TRACE|NOTICE)\b");

    // Common keywords and constants
    let keywords = r"\b(if|else|elif|for|while|do|done|then|fi|return|function|def|class|import|from|export|let|var|const|true|false|null|none|nil|yes|no|on|off)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Dates, times and numbers
    lang.add_rule(TokenType::Number, r"\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:[.,]\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?\b");
    lang.add_rule(TokenType::Number, r"\b\d+(?:\.\d+)?\b");

    lang
}
