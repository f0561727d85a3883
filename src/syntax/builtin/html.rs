//! HTML and XML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create HTML/XML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("html");
    for ext in ["html", "htm", "xhtml", "xml", "svg", "xsd", "xsl", "plist"] {
        lang.add_extension(ext);
    }

    // Comments and CDATA
    lang.add_rule(TokenType::Comment, r"(?s)<!--.*?-->");
    lang.add_rule(TokenType::String, r"(?s)<!\[CDATA\[.*?\]\]>");

    // Attribute values
    lang.add_rule(TokenType::String, r#""[^"]*"|'[^']*'"#);

    // Doctype and processing instructions
    lang.add_rule(TokenType::Preprocessor, r"(?i)<!DOCTYPE[^>]*>|<\?[\s\S]*?\?>");

    // Tags
    lang.add_rule(TokenType::Tag, r"</?[\w:\-]+|/?>");

    // Attribute names
    lang.add_rule(TokenType::Attribute, r"\b[\w:\-]+=");

    // Entities
    lang.add_rule(TokenType::Constant, r"&#?\w+;");

    lang
}
