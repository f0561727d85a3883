//! Dockerfile language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create Dockerfile language definition
pub fn dockerfile_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("dockerfile");
    lang.add_extension("dockerfile");
    lang.add_filename("Dockerfile");
    lang.add_filename("Containerfile");

    // Comments and parser directives
    lang.add_rule(TokenType::Comment, r"^[ \t]*#.*$");

    // Strings
    lang.add_rule(TokenType::String, r#""(?:[^"\\\n]|\\.)*""#);
    lang.add_rule(TokenType::String, r"'[^'\n]*'");

    // Instructions
    let instructions = r"(?i)^[ \t]*(FROM|RUN|CMD|LABEL|MAINTAINER|EXPOSE|ENV|ADD|COPY|ENTRYPOINT|VOLUME|USER|WORKDIR|ARG|ONBUILD|STOPSIGNAL|HEALTHCHECK|SHELL)\b";
    lang.add_rule(TokenType::Keyword, instructions);
    lang.add_rule(TokenType::Keyword, r"(?i)\bAS\b");

    // Variables
    lang.add_rule(TokenType::Variable, r"\$\{[^}\n]*\}|\$\w+");

    // Flags
    lang.add_rule(TokenType::Attribute, r"--[\w-]+(?:=\S+)?");

    // Numbers
    lang.add_rule(TokenType::Number, r"\b\d+(?:\.\d+)*\b");

    lang
}
