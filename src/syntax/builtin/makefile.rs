//! Makefile language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create Makefile language definition
pub fn makefile_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("makefile");
    lang.add_extension("mk");
    lang.add_extension("mak");
    lang.add_filename("Makefile");
    lang.add_filename("GNUmakefile");

    // Comments
    lang.add_rule(TokenType::Comment, r"#.*$");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'[^'\n]*'");

    // Variable references
    lang.add_rule(TokenType::Variable, r"\$\([^)\n]*\)|\$\{[^}\n]*\}|\$[@<^?*%]");

    // Directives
    let directives = r"^[ \t]*(include|-include|sinclude|define|endef|ifdef|ifndef|ifeq|ifneq|else|endif|export|unexport|override|vpath)\b";
    lang.add_rule(TokenType::Keyword, directives);

    // Targets
    lang.add_rule(TokenType::Function, r"^[\w.%/\- ]+::?");

    // Assignments
    lang.add_rule(TokenType::Tag, r"^[ \t]*[\w.]+\s*(?:\?|:|\+|!)?=");

    lang
}
