//! Language registry
//!
//! Maps dotted extensions (".py") and reserved file names ("Dockerfile")
//! to compiled languages. Lookup is case-insensitive and never fails:
//! anything unrecognized resolves to the generic `auto` language.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::builtin;
use super::language::{CompiledLanguage, LanguageDefinition};
use crate::error::Result;

/// Identifier of the fallback language
pub const AUTO: &str = "auto";

/// Registry of compiled language definitions
pub struct LanguageRegistry {
    /// Lowercased key -> language
    keys: HashMap<String, Arc<CompiledLanguage>>,
    /// Every language added, in registration order
    languages: Vec<Arc<CompiledLanguage>>,
    /// Fallback for unrecognized files
    auto: Arc<CompiledLanguage>,
}

impl LanguageRegistry {
    /// Create a registry holding only the `auto` fallback
    pub fn new() -> Self {
        let auto = builtin::auto_language().compile().unwrap_or_else(|e| {
            warn!("auto language failed to build: {}", e);
            CompiledLanguage::empty(AUTO)
        });
        Self {
            keys: HashMap::new(),
            languages: Vec::new(),
            auto: Arc::new(auto),
        }
    }

    /// Create a registry with every built-in language
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for lang in builtin::all_languages() {
            if let Err(e) = registry.add_language(&lang) {
                warn!(language = %lang.id, "built-in language rejected: {}", e);
            }
        }
        registry
    }

    /// Compile a definition and register all its extensions and file names
    pub fn add_language(&mut self, definition: &LanguageDefinition) -> Result<Arc<CompiledLanguage>> {
        let language = Arc::new(definition.compile()?);
        for ext in language.extensions() {
            self.register(&format!(".{}", ext), Arc::clone(&language));
        }
        for name in language.filenames() {
            self.register(name, Arc::clone(&language));
        }
        self.languages.push(Arc::clone(&language));
        Ok(language)
    }

    /// Register a language under a dotted extension or a reserved file name
    ///
    /// The last registration for a key wins.
    pub fn register(&mut self, key: &str, language: Arc<CompiledLanguage>) {
        let key = key.to_lowercase();
        if let Some(previous) = self.keys.get(&key) {
            debug!(key = %key, from = previous.id(), to = language.id(), "registration overridden");
        }
        self.keys.insert(key, language);
    }

    /// Resolve a path to a language
    ///
    /// The base name is checked against reserved names first, then the
    /// lowercased extension. Falls back to `auto`.
    pub fn resolve(&self, path: &Path) -> Arc<CompiledLanguage> {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.keys.get(&n.to_lowercase()));

        let by_ext = || {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(|e| self.keys.get(&format!(".{}", e.to_lowercase())))
        };

        by_name
            .or_else(by_ext)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.auto))
    }

    /// Get a language by identifier
    ///
    /// When several definitions share an identifier the latest wins.
    pub fn get(&self, id: &str) -> Option<Arc<CompiledLanguage>> {
        if id.eq_ignore_ascii_case(AUTO) {
            return Some(Arc::clone(&self.auto));
        }
        self.languages
            .iter()
            .rev()
            .find(|l| l.id().eq_ignore_ascii_case(id))
            .map(Arc::clone)
    }

    /// The fallback language
    pub fn auto(&self) -> &Arc<CompiledLanguage> {
        &self.auto
    }

    /// List available language identifiers
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.iter().map(|l| l.id()).collect();
        names.push(self.auto.id());
        names.sort();
        names.dedup();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
