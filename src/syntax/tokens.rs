//! Well-known token categories
//!
//! Language definitions classify text into categories named by plain
//! strings. The categories below are the ones the built-in tables use;
//! each has a canonical name and a default style, so definitions loaded
//! from a config file may reference them without spelling out a style.

use super::style::{Color, Style};

/// Semantic token categories for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments
    Comment,
    /// String and character literals
    String,
    /// Numeric literals (integers, floats)
    Number,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Type names (String, i32, etc.)
    Type,
    /// Function names
    Function,
    /// Built-in functions and commands
    Builtin,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Constants (true, None, nil)
    Constant,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Attributes and decorators (#[derive], @decorator)
    Attribute,
    /// Variables and substitutions ($HOME, ${x})
    Variable,
    /// Markup tags and keys (<div>, key = ...)
    Tag,
    /// Headings in markup
    Heading,
    /// URLs
    Url,
    /// Email addresses
    Email,
    /// IPv4 addresses
    Address,
    /// UUIDs
    Uuid,
    /// Hex digests and colors
    Hex,
    /// Error/fatal log levels
    LogError,
    /// Warning log levels
    LogWarning,
    /// Info/debug log levels
    LogInfo,
}

impl TokenType {
    /// Every well-known category
    pub const ALL: [TokenType; 22] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Function,
        TokenType::Builtin,
        TokenType::Operator,
        TokenType::Constant,
        TokenType::Preprocessor,
        TokenType::Attribute,
        TokenType::Variable,
        TokenType::Tag,
        TokenType::Heading,
        TokenType::Url,
        TokenType::Email,
        TokenType::Address,
        TokenType::Uuid,
        TokenType::Hex,
        TokenType::LogError,
        TokenType::LogWarning,
        TokenType::LogInfo,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Type => Style::fg(Color::Yellow),
            TokenType::Function => Style::fg(Color::Blue),
            TokenType::Builtin => Style::fg(Color::BrightBlue),
            TokenType::Operator => Style::fg(Color::BrightWhite),
            TokenType::Constant => Style::fg(Color::BrightRed),
            TokenType::Preprocessor => Style::fg(Color::BrightMagenta),
            TokenType::Attribute => Style::fg(Color::BrightYellow),
            TokenType::Variable => Style::fg(Color::BrightCyan),
            TokenType::Tag => Style::fg(Color::Red),
            TokenType::Heading => Style::fg(Color::BrightBlue).with_bold(),
            TokenType::Url => Style::fg(Color::Blue).with_underline(),
            TokenType::Email => Style::fg(Color::Cyan).with_underline(),
            TokenType::Address => Style::fg(Color::BrightGreen),
            TokenType::Uuid => Style::fg(Color::BrightMagenta),
            TokenType::Hex => Style::fg(Color::Yellow),
            TokenType::LogError => Style::fg(Color::BrightRed).with_bold(),
            TokenType::LogWarning => Style::fg(Color::BrightYellow).with_bold(),
            TokenType::LogInfo => Style::fg(Color::BrightGreen),
        }
    }

    /// Canonical category name, as used in tag names and config files
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Type => "type",
            TokenType::Function => "function",
            TokenType::Builtin => "builtin",
            TokenType::Operator => "operator",
            TokenType::Constant => "constant",
            TokenType::Preprocessor => "preprocessor",
            TokenType::Attribute => "attribute",
            TokenType::Variable => "variable",
            TokenType::Tag => "tag",
            TokenType::Heading => "heading",
            TokenType::Url => "url",
            TokenType::Email => "email",
            TokenType::Address => "address",
            TokenType::Uuid => "uuid",
            TokenType::Hex => "hex",
            TokenType::LogError => "log_error",
            TokenType::LogWarning => "log_warning",
            TokenType::LogInfo => "log_info",
        }
    }

    /// Look up a well-known category by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for token_type in TokenType::ALL {
            assert!(!token_type.default_style().is_default(), "{:?}", token_type);
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
        assert_eq!(TokenType::from_name("Keyword"), Some(TokenType::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name(""), None);
    }
}
