//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Comments
    lang.add_rule(TokenType::Comment, r"#.*$");

    // Triple-quoted strings (docstrings), then single-line strings
    lang.add_rule(TokenType::String, r#"(?s)[rRbBuUfF]{0,2}(?:""".*?"""|'''.*?''')"#);
    lang.add_rule(TokenType::String, r#"[rRbBuUfF]{0,2}(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#);

    // Keywords
    let keywords = r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|match|case|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Constants
    lang.add_rule(TokenType::Constant, r"\b(True|False|None|self|cls)\b");

    // Decorators
    lang.add_rule(TokenType::Attribute, r"@[\w.]+");

    // Built-in functions
    let builtins = r"\b(abs|all|any|bool|bytes|callable|chr|dict|dir|enumerate|eval|exec|filter|float|format|getattr|hasattr|hash|id|input|int|isinstance|issubclass|iter|len|list|map|max|min|next|object|open|ord|print|range|repr|reversed|round|set|setattr|sorted|str|sum|super|tuple|type|zip)\b";
    lang.add_rule(TokenType::Builtin, builtins);

    // Numbers
    lang.add_rule(TokenType::Number, r"\b0[xX][0-9a-fA-F_]+\b");
    lang.add_rule(TokenType::Number, r"\b0[bB][01_]+\b");
    lang.add_rule(TokenType::Number, r"\b0[oO][0-7_]+\b");
    lang.add_rule(TokenType::Number, r"\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?j?\b");

    lang
}
