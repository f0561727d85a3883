//! JavaScript and TypeScript language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create JavaScript/TypeScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("javascript");
    for ext in ["js", "mjs", "cjs", "jsx", "ts", "tsx"] {
        lang.add_extension(ext);
    }

    // Comments
    lang.add_rule(TokenType::Comment, r"//.*$");
    lang.add_rule(TokenType::Comment, r"(?s)/\*.*?\*/");

    // Strings and template literals
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'(?:[^'\\\n]|\\.)*'");
    lang.add_rule(TokenType::String, r"`(?:[^`\\]|\\.)*`");

    // Keywords
    let keywords = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|if|implements|import|in|instanceof|interface|let|new|of|return|static|super|switch|this|throw|try|type|typeof|var|void|while|with|yield)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Constants
    lang.add_rule(TokenType::Constant, r"\b(true|false|null|undefined|NaN|Infinity)\b");

    // Types (TypeScript)
    lang.add_rule(TokenType::Type, r"\b(any|boolean|never|number|object|string|symbol|unknown|bigint)\b");

    // Decorators
    lang.add_rule(TokenType::Attribute, r"@\w+");

    // Numbers
    lang.add_rule(TokenType::Number, r"\b0[xX][0-9a-fA-F_]+n?\b");
    lang.add_rule(TokenType::Number, r"\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?n?\b");

    lang
}
