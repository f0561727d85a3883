//! Shell script language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create shell language definition
pub fn shell_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("shell");
    for ext in ["sh", "bash", "zsh", "ksh", "fish"] {
        lang.add_extension(ext);
    }
    for name in [".bashrc", ".bash_profile", ".profile", ".zshrc"] {
        lang.add_filename(name);
    }

    // Comments (not `$#` or `${#x}`)
    lang.add_rule(TokenType::Comment, r"(?:^|[ \t])#.*$");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'[^']*'");

    // Variables
    lang.add_rule(TokenType::Variable, r"\$\{[^}\n]*\}|\$\w+|\$[@*#?$!0-9-]");

    // Keywords
    let keywords = r"\b(if|then|else|elif|fi|case|esac|for|while|until|do|done|in|function|select|return|break|continue|local|export|readonly|declare)\b";
    lang.add_rule(TokenType::Keyword, keywords);

    // Built-in commands
    let builtins = r"\b(echo|printf|read|cd|pwd|source|eval|exec|exit|set|unset|shift|test|trap|alias|type)\b";
    lang.add_rule(TokenType::Builtin, builtins);

    // Numbers
    lang.add_rule(TokenType::Number, r"\b\d+\b");

    lang
}
