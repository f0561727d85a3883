//! Built-in language definitions
//!
//! Each table is pure data: extensions, reserved file names and an
//! ordered rule list. Comments and strings come first in every table so
//! that keywords inside them are not re-classified.

mod auto;
mod c;
mod css;
mod dockerfile;
mod go;
mod html;
mod javascript;
mod json;
mod makefile;
mod markdown;
mod python;
mod rust;
mod shell;
mod sql;
mod toml_lang;
mod yaml;

use super::language::LanguageDefinition;

pub use auto::auto_language;

/// Get all built-in language definitions (excluding `auto`)
///
/// Reserved-name languages come last so that they override any
/// extension claim for the same key.
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        python::python_language(),
        rust::rust_language(),
        c::c_language(),
        go::go_language(),
        javascript::javascript_language(),
        json::json_language(),
        toml_lang::toml_language(),
        yaml::yaml_language(),
        markdown::markdown_language(),
        shell::shell_language(),
        html::html_language(),
        css::css_language(),
        sql::sql_language(),
        dockerfile::dockerfile_language(),
        makefile::makefile_language(),
    ]
}
