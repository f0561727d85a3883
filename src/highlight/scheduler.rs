//! Re-highlight scheduling
//!
//! Edits, scrolls and resizes do not highlight directly. The first one
//! asks the host for a single idle callback; anything arriving before
//! that callback runs is folded into it. The pass then reads whatever
//! the buffer holds at that moment.

use tracing::trace;

use super::RenderMode;

/// Host facility for running work once the UI is otherwise idle
pub trait IdleQueue {
    /// Request one callback; the host answers by calling
    /// `HighlightController::run_idle`
    fn on_idle(&mut self);
}

/// Events that may make the current highlighting stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    TextModified,
    Scrolled,
    Resized,
    KeyReleased,
}

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Scheduled,
}

/// Debouncer for highlight passes
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    state: SchedulerState,
    /// Whether events are listened to at all
    subscribed: bool,
    /// Events folded into the pending pass
    coalesced: usize,
}

impl Scheduler {
    /// Create a scheduler for a render mode
    pub fn new(mode: RenderMode) -> Self {
        Self {
            subscribed: mode == RenderMode::VisibleOnly,
            ..Default::default()
        }
    }

    /// Follow a render mode change
    ///
    /// Full-document mode ignores every event; highlighting there only
    /// runs when the host asks for it.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.subscribed = mode == RenderMode::VisibleOnly;
    }

    /// Record an event
    ///
    /// Returns true if this event queued a new idle callback.
    pub fn notify<Q: IdleQueue + ?Sized>(&mut self, event: EditorEvent, queue: &mut Q) -> bool {
        if !self.subscribed {
            return false;
        }
        match self.state {
            SchedulerState::Idle => {
                self.state = SchedulerState::Scheduled;
                queue.on_idle();
                trace!(?event, "highlight scheduled");
                true
            }
            SchedulerState::Scheduled => {
                self.coalesced += 1;
                trace!(?event, coalesced = self.coalesced, "event coalesced");
                false
            }
        }
    }

    /// Consume the pending callback, if there is one
    ///
    /// The state returns to idle before the pass runs, so events raised
    /// during the pass schedule a fresh one.
    pub fn take_pending(&mut self) -> bool {
        if self.state != SchedulerState::Scheduled {
            return false;
        }
        self.state = SchedulerState::Idle;
        self.coalesced = 0;
        true
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Events folded into the pending pass so far
    pub fn coalesced(&self) -> usize {
        self.coalesced
    }
}
