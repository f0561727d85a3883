//! Highlight engine
//!
//! Connects the tokenizer to a host text widget:
//! - `TextBuffer`: what the engine needs from the widget
//! - `HighlightController`: language selection and highlight passes
//! - `Scheduler`: folds bursts of editor events into one idle pass

mod buffer;
mod controller;
mod scheduler;

pub use buffer::{MemoryBuffer, Position, RangeSet, TextBuffer};
pub use controller::{tag_name, HighlightController, HighlightOutcome, HighlightSession, RenderMode, TAG_PREFIX};
pub use scheduler::{EditorEvent, IdleQueue, Scheduler, SchedulerState};
