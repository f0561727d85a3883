//! C and C++ language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create C/C++ language definition
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("c");
    for ext in ["c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx"] {
        lang.add_extension(ext);
    }

    // Comments
    lang.add_rule(TokenType::Comment, r"//.*$");
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings and chars
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'(?:[^'\\\n]|\\.)+'");

    // Preprocessor
    lang.add_rule(TokenType::Preprocessor, r"^[ \t]*#[ \t]*\w+");

    // Keywords
    let keywords = r"\b(auto|break|case|class|const|constexpr|continue|default|delete|do|else|enum|extern|for|goto|if|inline|namespace|new|private|protected|public|register|return|sizeof|static|struct|switch|template|this|throw|try|catch|typedef|typename|union|using|virtual|volatile|while)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Types
    let types = r"\b(void|char|short|int|long|float|double|signed|unsigned|bool|size_t|ssize_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t)\b";
    lang.add_rule(TokenType::Type, types);

    // Constants
    lang.add_rule(TokenType::Constant, r"\b(NULL|nullptr|true|false|[A-Z][A-Z0-9_]{2,})\b");

    // Numbers
    lang.add_rule(TokenType::Number, r"\b0[xX][0-9a-fA-F]+[uUlL]*\b");
    lang.add_rule(TokenType::Number, r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?[uUlLfF]*\b");

    lang
}
