//! Highlight controller
//!
//! Bridges tokenizer output to tag operations on a `TextBuffer`. Each
//! pass picks a line range (the viewport plus a margin, or the whole
//! document), capped at `max_lines`, clears the engine's tags there,
//! tokenizes the text and tags every span at its absolute position.

use std::collections::{BTreeSet, HashMap};
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::buffer::TextBuffer;
use super::scheduler::{EditorEvent, IdleQueue, Scheduler};
use crate::config::HighlightSettings;
use crate::error::Result;
use crate::syntax::{tokenize, CompiledLanguage, LanguageRegistry, Style};

/// Prefix of every tag the engine owns
pub const TAG_PREFIX: &str = "hl.";

/// Tag name for a category
pub fn tag_name(category: &str) -> String {
    format!("{}{}", TAG_PREFIX, category)
}

/// Which part of the document a pass covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The viewport plus a margin
    #[default]
    VisibleOnly,
    /// The document from the top
    Full,
}

/// What a highlight pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// Highlighting is switched off
    Disabled,
    /// No language selected
    NoLanguage,
    /// Tags were refreshed over `lines`
    Applied {
        lines: Range<usize>,
        spans: usize,
        rejected: usize,
    },
    /// The pass failed part-way; earlier tags were left in place
    Abandoned { reason: String },
}

/// Per-document highlighting state
#[derive(Debug, Clone, Default)]
pub struct HighlightSession {
    language: Option<Arc<CompiledLanguage>>,
    mode: RenderMode,
    /// Tags applied since the last whole-document clear
    applied_tags: BTreeSet<String>,
    /// Styles already registered with the buffer
    configured: HashMap<String, Style>,
    passes: u64,
}

impl HighlightSession {
    fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn language(&self) -> Option<&Arc<CompiledLanguage>> {
        self.language.as_ref()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn applied_tags(&self) -> impl Iterator<Item = &str> {
        self.applied_tags.iter().map(String::as_str)
    }

    /// Number of passes that reached the tokenizer
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

/// Public entry point of the engine, one per open document
pub struct HighlightController {
    registry: Arc<LanguageRegistry>,
    settings: HighlightSettings,
    session: HighlightSession,
    scheduler: Scheduler,
}

impl HighlightController {
    /// Create a controller using a shared registry
    pub fn new(registry: Arc<LanguageRegistry>, settings: HighlightSettings) -> Self {
        let mode = settings.render_mode();
        Self {
            registry,
            settings,
            session: HighlightSession::new(mode),
            scheduler: Scheduler::new(mode),
        }
    }

    /// Select the language for a file and register its styles
    ///
    /// Selecting the language already in use does nothing.
    pub fn set_language<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, path: &Path) -> Arc<CompiledLanguage> {
        let language = self.registry.resolve(path);
        self.select(buffer, language)
    }

    /// Select a language by identifier
    pub fn set_language_by_id<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        id: &str,
    ) -> Option<Arc<CompiledLanguage>> {
        let language = self.registry.get(id)?;
        Some(self.select(buffer, language))
    }

    fn select<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, language: Arc<CompiledLanguage>) -> Arc<CompiledLanguage> {
        let previous = self.session.language.clone();
        if let Some(current) = previous {
            if Arc::ptr_eq(&current, &language) {
                return language;
            }
            // Old tags would otherwise linger outside the next pass's range
            let everything = 0..buffer.line_count();
            self.clear_lines(buffer, everything);
        }

        info!(language = language.id(), "language selected");

        // Lowest priority first, so that a last-configured-wins buffer
        // ranks categories the same way the tokenizer does.
        for (category, style) in language.styles().iter().rev() {
            let tag = tag_name(category);
            if self.session.configured.get(&tag) != Some(style) {
                buffer.configure_tag_style(&tag, *style);
                self.session.configured.insert(tag, *style);
            }
        }

        self.session.language = Some(Arc::clone(&language));
        language
    }

    /// Run a highlight pass
    ///
    /// With a path, the language is (re)selected first if the path
    /// resolves to a different one. Never fails: problems are logged and
    /// reported through the outcome.
    pub fn highlight<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, path: Option<&Path>) -> HighlightOutcome {
        if !self.settings.enabled {
            return HighlightOutcome::Disabled;
        }

        if let Some(path) = path {
            self.set_language(buffer, path);
        }

        let Some(language) = self.session.language.clone() else {
            return HighlightOutcome::NoLanguage;
        };

        match self.run_pass(buffer, &language) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(language = language.id(), "highlight pass abandoned: {}", e);
                HighlightOutcome::Abandoned { reason: e.to_string() }
            }
        }
    }

    fn run_pass<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        language: &CompiledLanguage,
    ) -> Result<HighlightOutcome> {
        let lines = self.pass_lines(buffer);
        let start = buffer.line_to_index(lines.start);
        let end = buffer.line_to_index(lines.end);
        let text = buffer.get_text(start..end)?;

        self.session.passes += 1;
        self.clear_indices(buffer, start..end);

        let spans = tokenize(&text, language);
        let mut rejected = 0;

        for span in &spans {
            let tag = tag_name(span.category);
            let from = buffer.index_to_position(start + span.start);
            let to = buffer.index_to_position(start + span.end);
            match buffer.tag_add(&tag, from, to) {
                Ok(()) => {
                    self.session.applied_tags.insert(tag);
                }
                Err(e) => {
                    warn!(tag = %tag, "span skipped: {}", e);
                    rejected += 1;
                }
            }
        }

        debug!(
            language = language.id(),
            first = lines.start,
            last = lines.end,
            spans = spans.len(),
            rejected,
            "highlight pass"
        );

        Ok(HighlightOutcome::Applied {
            lines,
            spans: spans.len() - rejected,
            rejected,
        })
    }

    /// Lines covered by a pass in the current mode
    pub fn pass_lines<B: TextBuffer + ?Sized>(&self, buffer: &B) -> Range<usize> {
        let count = buffer.line_count();
        if count == 0 {
            return 0..0;
        }
        let cap = self.settings.max_lines.max(1);

        match self.session.mode {
            RenderMode::Full => 0..count.min(cap),
            RenderMode::VisibleOnly => {
                let (first, last) = buffer.visible_range();
                let first = first.min(count - 1);
                let last = last.clamp(first, count - 1);
                let lo = first.saturating_sub(self.settings.visible_margin);
                let hi = last
                    .saturating_add(1)
                    .saturating_add(self.settings.visible_margin)
                    .min(count);
                lo..hi.min(lo.saturating_add(cap))
            }
        }
    }

    /// Remove the engine's tags from a line range, or from the range the
    /// current mode would highlight
    pub fn clear_highlight<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, lines: Option<Range<usize>>) {
        let lines = lines.unwrap_or_else(|| self.pass_lines(buffer));
        self.clear_lines(buffer, lines);
    }

    fn clear_lines<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, lines: Range<usize>) {
        let count = buffer.line_count();
        let first = lines.start.min(count);
        let last = lines.end.clamp(first, count);
        let range = buffer.line_to_index(first)..buffer.line_to_index(last);
        self.clear_indices(buffer, range);
    }

    fn clear_indices<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let from = buffer.index_to_position(range.start);
        let to = buffer.index_to_position(range.end);
        for tag in &self.session.applied_tags {
            if let Err(e) = buffer.tag_remove(tag, from, to) {
                warn!(tag = %tag, "tag removal failed: {}", e);
            }
        }
        let document_end = buffer.line_to_index(buffer.line_count());
        if range.start == 0 && range.end >= document_end {
            self.session.applied_tags.clear();
        }
    }

    /// Clear every engine tag and forget the language
    pub fn reset_highlighting<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B) {
        let everything = 0..buffer.line_count();
        self.clear_lines(buffer, everything);
        self.session = HighlightSession::new(self.session.mode);
        debug!("highlighting reset");
    }

    /// Switch highlighting on or off
    ///
    /// Switching off removes every engine tag and resets the session like
    /// `reset_highlighting`; the next `highlight` call needs a path again.
    pub fn set_enabled<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, enabled: bool) {
        if self.settings.enabled && !enabled {
            self.reset_highlighting(buffer);
        }
        self.settings.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Switch between visible-only and full-document passes
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.session.mode = mode;
        self.settings.visible_only = mode == RenderMode::VisibleOnly;
        self.scheduler.set_render_mode(mode);
    }

    /// `set_render_mode` in boolean form
    pub fn set_visible_only(&mut self, visible_only: bool) {
        self.set_render_mode(if visible_only {
            RenderMode::VisibleOnly
        } else {
            RenderMode::Full
        });
    }

    pub fn render_mode(&self) -> RenderMode {
        self.session.mode
    }

    /// Identifier of the selected language
    pub fn current_language(&self) -> Option<&str> {
        self.session.language.as_deref().map(CompiledLanguage::id)
    }

    pub fn session(&self) -> &HighlightSession {
        &self.session
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Feed an editor event to the debouncer
    ///
    /// Returns true if an idle callback was requested.
    pub fn handle_event<Q: IdleQueue + ?Sized>(&mut self, event: EditorEvent, queue: &mut Q) -> bool {
        self.scheduler.notify(event, queue)
    }

    /// Idle callback: run the pending pass, if any
    pub fn run_idle<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B) -> Option<HighlightOutcome> {
        if !self.scheduler.take_pending() {
            return None;
        }
        Some(self.highlight(buffer, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HighlightError;
    use crate::highlight::buffer::{MemoryBuffer, Position};
    use crate::syntax::{LanguageDefinition, TokenType};
    use std::cell::RefCell;

    fn settings(mode: RenderMode) -> HighlightSettings {
        HighlightSettings {
            visible_only: mode == RenderMode::VisibleOnly,
            ..Default::default()
        }
    }

    fn controller(mode: RenderMode) -> HighlightController {
        HighlightController::new(Arc::new(LanguageRegistry::with_builtins()), settings(mode))
    }

    fn tagged(buffer: &MemoryBuffer, category: &str) -> Vec<String> {
        let text: Vec<char> = buffer.text().chars().collect();
        buffer
            .tag_ranges(&tag_name(category))
            .iter()
            .map(|r| text[r.clone()].iter().collect())
            .collect()
    }

    fn snapshot(buffer: &MemoryBuffer) -> Vec<(String, Vec<Range<usize>>)> {
        buffer
            .tag_names()
            .into_iter()
            .map(|t| (t.to_string(), buffer.tag_ranges(t).to_vec()))
            .collect()
    }

    /// Wraps a buffer, recording text requests and refusing one tag
    struct ProbeBuffer {
        inner: MemoryBuffer,
        requests: RefCell<Vec<Range<usize>>>,
        refuse: Option<String>,
        fail_reads: bool,
    }

    impl ProbeBuffer {
        fn new(inner: MemoryBuffer) -> Self {
            Self {
                inner,
                requests: RefCell::new(Vec::new()),
                refuse: None,
                fail_reads: false,
            }
        }
    }

    impl TextBuffer for ProbeBuffer {
        fn get_text(&self, range: Range<usize>) -> Result<String> {
            self.requests.borrow_mut().push(range.clone());
            if self.fail_reads {
                return Err(HighlightError::Message("buffer closed".to_string()));
            }
            self.inner.get_text(range)
        }
        fn tag_add(&mut self, tag: &str, start: Position, end: Position) -> Result<()> {
            if self.refuse.as_deref() == Some(tag) {
                return Err(HighlightError::Message("stale index".to_string()));
            }
            self.inner.tag_add(tag, start, end)
        }
        fn tag_remove(&mut self, tag: &str, start: Position, end: Position) -> Result<()> {
            self.inner.tag_remove(tag, start, end)
        }
        fn configure_tag_style(&mut self, tag: &str, style: Style) {
            self.inner.configure_tag_style(tag, style)
        }
        fn visible_range(&self) -> (usize, usize) {
            self.inner.visible_range()
        }
        fn line_count(&self) -> usize {
            self.inner.line_count()
        }
        fn line_to_index(&self, line: usize) -> usize {
            self.inner.line_to_index(line)
        }
        fn index_to_position(&self, index: usize) -> Position {
            self.inner.index_to_position(index)
        }
    }

    #[test]
    fn test_set_language_registers_styles_once() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("x = 1");

        let lang = ctl.set_language(&mut buffer, Path::new("main.py"));
        assert_eq!(lang.id(), "python");
        assert_eq!(ctl.current_language(), Some("python"));
        assert_eq!(
            buffer.tag_style(&tag_name("keyword")),
            Some(TokenType::Keyword.default_style())
        );

        ctl.set_language(&mut buffer, Path::new("other.py"));
        assert_eq!(ctl.session().configured.len(), lang.styles().len());
    }

    #[test]
    fn test_highlight_without_language() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("def f(): pass");
        assert_eq!(ctl.highlight(&mut buffer, None), HighlightOutcome::NoLanguage);
        assert!(buffer.tag_names().is_empty());
    }

    #[test]
    fn test_highlight_disabled() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("def f(): pass");
        ctl.set_enabled(&mut buffer, false);
        assert_eq!(ctl.highlight(&mut buffer, Some(Path::new("a.py"))), HighlightOutcome::Disabled);
        assert!(buffer.tag_names().is_empty());
        assert_eq!(ctl.current_language(), None);
    }

    #[test]
    fn test_highlight_python_document() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("def f(): # hi\n    return 1");

        let outcome = ctl.highlight(&mut buffer, Some(Path::new("f.py")));
        assert_eq!(
            outcome,
            HighlightOutcome::Applied {
                lines: 0..2,
                spans: 4,
                rejected: 0
            }
        );
        assert_eq!(tagged(&buffer, "keyword"), vec!["def", "return"]);
        assert_eq!(tagged(&buffer, "comment"), vec!["# hi"]);
        assert_eq!(tagged(&buffer, "number"), vec!["1"]);
        assert!(buffer.tags_at(4).is_empty());
    }

    #[test]
    fn test_comment_keeps_keywords_out() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("# if True:");
        ctl.highlight(&mut buffer, Some(Path::new("x.py")));

        assert_eq!(tagged(&buffer, "comment"), vec!["# if True:"]);
        assert!(buffer.tag_ranges(&tag_name("keyword")).is_empty());
        assert!(buffer.tag_ranges(&tag_name("constant")).is_empty());
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("fn main() {\n    let x = \"s\"; // done\n}\n");

        ctl.highlight(&mut buffer, Some(Path::new("main.rs")));
        let once = snapshot(&buffer);
        ctl.highlight(&mut buffer, None);
        assert_eq!(snapshot(&buffer), once);
        assert!(!once.is_empty());
    }

    #[test]
    fn test_edit_replaces_stale_tags() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("return 1");
        ctl.highlight(&mut buffer, Some(Path::new("a.py")));
        assert_eq!(tagged(&buffer, "keyword"), vec!["return"]);

        buffer.set_text("value 1");
        ctl.highlight(&mut buffer, None);
        assert!(tagged(&buffer, "keyword").is_empty());
        assert_eq!(tagged(&buffer, "number"), vec!["1"]);
    }

    #[test]
    fn test_visible_range_capped() {
        let text: String = (0..100_000).map(|i| format!("x = {}\n", i)).collect();
        let mut inner = MemoryBuffer::new(&text);
        inner.set_viewport(500, 520);
        let mut buffer = ProbeBuffer::new(inner);

        let mut ctl = HighlightController::new(
            Arc::new(LanguageRegistry::with_builtins()),
            HighlightSettings {
                visible_margin: 10,
                ..Default::default()
            },
        );
        let outcome = ctl.highlight(&mut buffer, Some(Path::new("big.py")));
        assert_eq!(
            outcome,
            HighlightOutcome::Applied {
                lines: 490..531,
                spans: 41,
                rejected: 0
            }
        );

        let lo = buffer.line_to_index(490);
        let hi = buffer.line_to_index(531);
        assert_eq!(*buffer.requests.borrow(), vec![lo..hi]);

        let numbers = buffer.inner.tag_ranges(&tag_name("number"));
        assert_eq!(numbers.len(), 41);
        assert!(numbers.iter().all(|r| r.start >= lo && r.end <= hi));
    }

    #[test]
    fn test_visible_range_respects_max_lines() {
        let text: String = (0..1000).map(|i| format!("{}\n", i)).collect();
        let mut buffer = MemoryBuffer::new(&text);
        buffer.set_viewport(100, 900);

        let mut ctl = HighlightController::new(
            Arc::new(LanguageRegistry::with_builtins()),
            HighlightSettings {
                max_lines: 50,
                visible_margin: 5,
                ..Default::default()
            },
        );
        ctl.set_language(&mut buffer, Path::new("n.txt"));
        assert_eq!(ctl.pass_lines(&buffer), 95..145);
    }

    #[test]
    fn test_viewport_clamped_to_document() {
        let mut buffer = MemoryBuffer::new("a\nb\nc");
        buffer.set_viewport(10, 40);
        let ctl = controller(RenderMode::VisibleOnly);
        assert_eq!(ctl.pass_lines(&buffer), 0..3);
    }

    #[test]
    fn test_full_mode_capped() {
        let text: String = (0..300).map(|i| format!("{}\n", i)).collect();
        let mut buffer = MemoryBuffer::new(&text);
        let mut ctl = HighlightController::new(
            Arc::new(LanguageRegistry::with_builtins()),
            HighlightSettings {
                visible_only: false,
                max_lines: 100,
                ..Default::default()
            },
        );
        ctl.highlight(&mut buffer, Some(Path::new("n.py")));
        let numbers = buffer.tag_ranges(&tag_name("number"));
        assert_eq!(numbers.len(), 100);
        assert!(numbers.iter().all(|r| r.end <= buffer.line_to_index(100)));
    }

    #[test]
    fn test_rejected_span_does_not_stop_pass() {
        let mut buffer = ProbeBuffer::new(MemoryBuffer::new("return 1 # x"));
        buffer.refuse = Some(tag_name("number"));
        let mut ctl = controller(RenderMode::Full);

        let outcome = ctl.highlight(&mut buffer, Some(Path::new("r.py")));
        assert_eq!(
            outcome,
            HighlightOutcome::Applied {
                lines: 0..1,
                spans: 2,
                rejected: 1
            }
        );
        assert_eq!(tagged(&buffer.inner, "keyword"), vec!["return"]);
        assert_eq!(tagged(&buffer.inner, "comment"), vec!["# x"]);
    }

    #[test]
    fn test_clear_highlight_range() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("return 1\nreturn 2\nreturn 3");
        ctl.highlight(&mut buffer, Some(Path::new("r.py")));
        assert_eq!(tagged(&buffer, "keyword").len(), 3);

        ctl.clear_highlight(&mut buffer, Some(1..2));
        assert_eq!(tagged(&buffer, "number"), vec!["1", "3"]);

        ctl.clear_highlight(&mut buffer, None);
        assert!(buffer.tag_names().is_empty());
        assert_eq!(ctl.current_language(), Some("python"));
    }

    #[test]
    fn test_disabling_clears_tags() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("return 1 # x");
        ctl.highlight(&mut buffer, Some(Path::new("r.py")));
        assert!(!buffer.tag_names().is_empty());

        ctl.set_enabled(&mut buffer, false);
        assert!(!ctl.is_enabled());
        assert!(buffer.tag_names().iter().all(|t| !t.starts_with(TAG_PREFIX)));
        assert_eq!(ctl.current_language(), None);

        ctl.set_enabled(&mut buffer, true);
        assert!(matches!(
            ctl.highlight(&mut buffer, Some(Path::new("r.py"))),
            HighlightOutcome::Applied { .. }
        ));
        assert_eq!(tagged(&buffer, "keyword"), vec!["return"]);
    }

    #[test]
    fn test_failed_pass_keeps_previous_tags() {
        let mut buffer = ProbeBuffer::new(MemoryBuffer::new("return 1 # x"));
        let mut ctl = controller(RenderMode::Full);
        ctl.highlight(&mut buffer, Some(Path::new("r.py")));
        let before = snapshot(&buffer.inner);

        buffer.fail_reads = true;
        let outcome = ctl.highlight(&mut buffer, None);
        assert_eq!(
            outcome,
            HighlightOutcome::Abandoned {
                reason: "buffer closed".to_string()
            }
        );
        assert_eq!(snapshot(&buffer.inner), before);
        assert_eq!(ctl.current_language(), Some("python"));
    }

    #[test]
    fn test_unbounded_settings_do_not_overflow() {
        let text: String = (0..200).map(|i| format!("{}\n", i)).collect();
        let mut buffer = MemoryBuffer::new(&text);
        buffer.set_viewport(100, 120);

        let mut ctl = HighlightController::new(
            Arc::new(LanguageRegistry::with_builtins()),
            HighlightSettings {
                max_lines: usize::MAX,
                ..Default::default()
            },
        );
        let outcome = ctl.highlight(&mut buffer, Some(Path::new("n.py")));
        assert_eq!(
            outcome,
            HighlightOutcome::Applied {
                lines: 80..141,
                spans: 61,
                rejected: 0
            }
        );

        let mut ctl = HighlightController::new(
            Arc::new(LanguageRegistry::with_builtins()),
            HighlightSettings {
                max_lines: usize::MAX,
                visible_margin: usize::MAX,
                ..Default::default()
            },
        );
        ctl.set_language(&mut buffer, Path::new("n.py"));
        assert_eq!(ctl.pass_lines(&buffer), 0..201);
    }

    #[test]
    fn test_full_clear_forgets_applied_tags() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("return 1");
        ctl.highlight(&mut buffer, Some(Path::new("r.py")));

        ctl.clear_highlight(&mut buffer, Some(0..0));
        assert_eq!(ctl.session().applied_tags().count(), 2);

        ctl.clear_highlight(&mut buffer, None);
        assert_eq!(ctl.session().applied_tags().count(), 0);
        assert!(buffer.tag_names().is_empty());
    }

    #[test]
    fn test_reset_highlighting() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("return 1");
        ctl.highlight(&mut buffer, Some(Path::new("r.py")));

        ctl.reset_highlighting(&mut buffer);
        assert!(buffer.tag_names().is_empty());
        assert_eq!(ctl.current_language(), None);
        assert_eq!(ctl.session().applied_tags().count(), 0);
        assert_eq!(ctl.highlight(&mut buffer, None), HighlightOutcome::NoLanguage);
    }

    #[test]
    fn test_language_switch_clears_old_tags() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("fn f() {}");
        ctl.highlight(&mut buffer, Some(Path::new("a.rs")));
        assert_eq!(tagged(&buffer, "keyword"), vec!["fn"]);

        ctl.highlight(&mut buffer, Some(Path::new("a.txt")));
        assert_eq!(ctl.current_language(), Some("auto"));
        assert!(tagged(&buffer, "keyword").is_empty());
    }

    #[test]
    fn test_set_language_by_id() {
        let mut ctl = controller(RenderMode::Full);
        let mut buffer = MemoryBuffer::new("SELECT 1");
        assert!(ctl.set_language_by_id(&mut buffer, "cobol").is_none());
        assert!(ctl.set_language_by_id(&mut buffer, "sql").is_some());
        ctl.highlight(&mut buffer, None);
        assert_eq!(tagged(&buffer, "keyword"), vec!["SELECT"]);
    }

    #[test]
    fn test_malformed_user_pattern_isolated() {
        let mut registry = LanguageRegistry::with_builtins();
        let mut lang = LanguageDefinition::new("faulty");
        lang.add_extension("flt");
        lang.add_rule(TokenType::Comment, r"#.*$");
        lang.add_rule(TokenType::String, r#""[^"]*""#);
        lang.add_rule(TokenType::Type, r"[A-Z](");
        lang.add_rule(TokenType::Keyword, r"\bset\b");
        lang.add_rule(TokenType::Number, r"\b\d+\b");
        registry.add_language(&lang).unwrap();

        let mut ctl = HighlightController::new(Arc::new(registry), settings(RenderMode::Full));
        let mut buffer = MemoryBuffer::new("set Name \"v\" 7 # c");
        ctl.highlight(&mut buffer, Some(Path::new("x.flt")));

        assert_eq!(tagged(&buffer, "keyword"), vec!["set"]);
        assert_eq!(tagged(&buffer, "string"), vec!["\"v\""]);
        assert_eq!(tagged(&buffer, "number"), vec!["7"]);
        assert_eq!(tagged(&buffer, "comment"), vec!["# c"]);
        assert!(tagged(&buffer, "type").is_empty());
    }

    #[derive(Default)]
    struct CountingQueue {
        requests: usize,
    }

    impl IdleQueue for CountingQueue {
        fn on_idle(&mut self) {
            self.requests += 1;
        }
    }

    #[test]
    fn test_debounce_runs_one_pass() {
        let mut ctl = controller(RenderMode::VisibleOnly);
        let mut queue = CountingQueue::default();
        let mut buffer = MemoryBuffer::new("x = 1");
        ctl.set_language(&mut buffer, Path::new("a.py"));

        for _ in 0..10 {
            ctl.handle_event(EditorEvent::TextModified, &mut queue);
        }
        assert_eq!(queue.requests, 1);

        // Later edits are visible to the pass when it runs
        buffer.set_text("return 2");
        assert!(matches!(ctl.run_idle(&mut buffer), Some(HighlightOutcome::Applied { .. })));
        assert!(ctl.run_idle(&mut buffer).is_none());
        assert_eq!(ctl.session().passes(), 1);
        assert_eq!(tagged(&buffer, "keyword"), vec!["return"]);
    }

    #[test]
    fn test_full_mode_installs_no_triggers() {
        let mut ctl = controller(RenderMode::Full);
        let mut queue = CountingQueue::default();
        let mut buffer = MemoryBuffer::new("x = 1");

        assert!(!ctl.handle_event(EditorEvent::Scrolled, &mut queue));
        assert_eq!(queue.requests, 0);
        assert!(ctl.run_idle(&mut buffer).is_none());

        ctl.set_visible_only(true);
        assert_eq!(ctl.render_mode(), RenderMode::VisibleOnly);
        assert!(ctl.handle_event(EditorEvent::Scrolled, &mut queue));
        assert_eq!(queue.requests, 1);
    }
}
