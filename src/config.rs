//! Configuration file support
//!
//! Loads settings from ~/.hilite.toml (or %USERPROFILE%\.hilite.toml on Windows)
//!
//! Example:
//! ```toml
//! [highlight]
//! enabled = true
//! visible_only = true
//! max_lines = 5000
//! visible_margin = 20
//!
//! [[language]]
//! id = "ini"
//! extensions = ["ini"]
//! pattern_order = ["comment", "section"]
//! rules = [
//!     { category = "comment", pattern = ";.*$" },
//!     { category = "section", pattern = "^\\[.*\\]$" },
//! ]
//!
//! [language.styles.section]
//! fg = "yellow"
//! bold = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::highlight::RenderMode;
use crate::syntax::{LanguageDefinition, LanguageRegistry, Style};

/// Default cap on the number of lines tokenized per pass
pub const DEFAULT_MAX_LINES: usize = 5000;

/// Default number of extra lines tokenized above and below the viewport
pub const DEFAULT_VISIBLE_MARGIN: usize = 20;

/// Configuration settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine behaviour
    pub highlight: HighlightSettings,
    /// User language definitions, registered after the built-ins
    #[serde(rename = "language")]
    pub languages: Vec<LanguageSpec>,
}

/// Highlight engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Whether highlighting runs at all
    pub enabled: bool,
    /// Tokenize only the visible window instead of the whole document
    pub visible_only: bool,
    /// Maximum number of lines tokenized per pass
    pub max_lines: usize,
    /// Extra lines above and below the viewport
    pub visible_margin: usize,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            visible_only: true,
            max_lines: DEFAULT_MAX_LINES,
            visible_margin: DEFAULT_VISIBLE_MARGIN,
        }
    }
}

impl HighlightSettings {
    /// Render mode implied by `visible_only`
    pub fn render_mode(&self) -> RenderMode {
        if self.visible_only {
            RenderMode::VisibleOnly
        } else {
            RenderMode::Full
        }
    }

    /// Clamp values into their working range
    fn normalize(&mut self) {
        self.max_lines = self.max_lines.max(1);
    }
}

/// A language definition as written in the config file
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSpec {
    pub id: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub filenames: Vec<String>,
    #[serde(default)]
    pub pattern_order: Option<Vec<String>>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    #[serde(default)]
    pub styles: HashMap<String, Style>,
}

/// One (category, pattern) rule from the config file
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    pub category: String,
    pub pattern: String,
}

impl LanguageSpec {
    /// Build a language definition from this spec
    pub fn to_definition(&self) -> LanguageDefinition {
        let mut lang = LanguageDefinition::new(&self.id);
        for ext in &self.extensions {
            lang.add_extension(ext);
        }
        for name in &self.filenames {
            lang.add_filename(name);
        }
        for rule in &self.rules {
            lang.add_custom_rule(&rule.category, &rule.pattern);
        }
        for (category, style) in &self.styles {
            lang.set_style(category, *style);
        }
        lang.pattern_order = self.pattern_order.clone();
        lang
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file gives the defaults; so does a malformed one, after
    /// logging why it was ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "ignoring config: {}", e);
            Self::default()
        })
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), languages = config.languages.len(), "config loaded");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.highlight.normalize();
        Ok(config)
    }

    /// Build a registry with the built-ins plus every user language
    ///
    /// A user language that fails to build is logged and left out.
    pub fn build_registry(&self) -> LanguageRegistry {
        let mut registry = LanguageRegistry::with_builtins();
        for spec in &self.languages {
            if let Err(e) = registry.add_language(&spec.to_definition()) {
                warn!(language = %spec.id, "user language rejected: {}", e);
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{tokenize, Color};
    use std::io::Write;

    const SAMPLE: &str = r#"
[highlight]
visible_only = false
max_lines = 200

[[language]]
id = "ini"
extensions = ["ini", "INF"]
pattern_order = ["comment", "section"]
rules = [
    { category = "key", pattern = '^\w+\s*=' },
    { category = "section", pattern = '^\[.*\]$' },
    { category = "comment", pattern = ';.*$' },
]

[language.styles.section]
fg = "yellow"
bold = true

[language.styles.key]
fg = "cyan"
"#;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.highlight, HighlightSettings::default());
        assert_eq!(config.highlight.render_mode(), RenderMode::VisibleOnly);
        assert!(config.languages.is_empty());
    }

    #[test]
    fn test_parse_settings() {
        let config = Config::parse(SAMPLE).unwrap();
        assert!(config.highlight.enabled);
        assert_eq!(config.highlight.render_mode(), RenderMode::Full);
        assert_eq!(config.highlight.max_lines, 200);
        assert_eq!(config.highlight.visible_margin, DEFAULT_VISIBLE_MARGIN);
    }

    #[test]
    fn test_max_lines_clamped() {
        let config = Config::parse("[highlight]\nmax_lines = 0").unwrap();
        assert_eq!(config.highlight.max_lines, 1);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("[highlight]\nmax_lines = \"many\"").is_err());
        assert!(Config::parse("[[language]]\nextensions = [\"x\"]").is_err());
    }

    #[test]
    fn test_user_language() {
        let config = Config::parse(SAMPLE).unwrap();
        let registry = config.build_registry();

        let ini = registry.resolve(Path::new("setup.inf"));
        assert_eq!(ini.id(), "ini");
        assert_eq!(ini.style("section"), Some(Style::fg(Color::Yellow).with_bold()));
        assert_eq!(ini.styles()[0].0, "comment");

        let text = "[main]\nname = x ; [not a section]";
        let categories: Vec<_> = tokenize(text, &ini).iter().map(|s| s.category).collect();
        assert_eq!(categories, vec!["section", "key", "comment"]);
    }

    #[test]
    fn test_user_language_missing_style_rejected() {
        let config = Config::parse(
            "[[language]]\nid = \"bad\"\nextensions = [\"bad\"]\nrules = [{ category = \"widget\", pattern = \"w\" }]",
        )
        .unwrap();
        let registry = config.build_registry();
        assert_eq!(registry.resolve(Path::new("x.bad")).id(), "auto");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.languages.len(), 1);
        assert_eq!(config.languages[0].rules.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
