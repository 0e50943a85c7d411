//! Mutable state of a dialogue session and its pure transitions.
//!
//! Kept free of timers and I/O so the visibility machine and the
//! outstanding-reply accounting can be tested without a runtime.
//! The manager owns an instance behind a mutex and is its only mutator.

use parley_types::message::Message;
use parley_types::session::Visibility;

/// Outcome of an `open()` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenOutcome {
    /// Already open; nothing changed.
    AlreadyOpen,
    /// Transitioned to open; no welcome needed.
    Opened,
    /// Transitioned to open and the one-shot welcome should be scheduled.
    OpenedScheduleWelcome,
}

/// The state a dialogue session manager owns: panel visibility, the
/// append-only transcript, and the count of outstanding replies.
///
/// `pending` is a counter rather than a flag: with overlapping submissions,
/// a single boolean would let the last-firing timer clear the indicator
/// while earlier-scheduled replies are still in flight.
#[derive(Debug)]
pub(crate) struct DialogueState {
    pub visibility: Visibility,
    pub transcript: Vec<Message>,
    pub outstanding_replies: u32,
    /// Latched once the welcome timer has been scheduled, so a close/reopen
    /// race before it fires cannot schedule a second welcome.
    welcome_scheduled: bool,
}

impl DialogueState {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Closed,
            transcript: Vec::new(),
            outstanding_replies: 0,
            welcome_scheduled: false,
        }
    }

    /// Whether any reply is still outstanding.
    pub fn pending(&self) -> bool {
        self.outstanding_replies > 0
    }

    /// `closed | minimized -> open`; idempotent when already open.
    ///
    /// Reports whether the one-shot welcome should be scheduled: only on a
    /// transition to open with an empty transcript, and at most once per
    /// session lifetime.
    pub fn open(&mut self) -> OpenOutcome {
        if self.visibility == Visibility::Open {
            return OpenOutcome::AlreadyOpen;
        }
        self.visibility = Visibility::Open;
        if self.transcript.is_empty() && !self.welcome_scheduled {
            self.welcome_scheduled = true;
            OpenOutcome::OpenedScheduleWelcome
        } else {
            OpenOutcome::Opened
        }
    }

    /// `open -> minimized`; no-op from any other state. Returns whether the
    /// visibility changed.
    pub fn minimize(&mut self) -> bool {
        if self.visibility == Visibility::Open {
            self.visibility = Visibility::Minimized;
            true
        } else {
            false
        }
    }

    /// `minimized -> open`; no-op from any other state. Returns whether the
    /// visibility changed.
    pub fn restore(&mut self) -> bool {
        if self.visibility == Visibility::Minimized {
            self.visibility = Visibility::Open;
            true
        } else {
            false
        }
    }

    /// `open | minimized -> closed`; transcript and outstanding replies are
    /// untouched so a later open resumes the conversation. Returns whether
    /// the visibility changed.
    pub fn close(&mut self) -> bool {
        if self.visibility == Visibility::Closed {
            false
        } else {
            self.visibility = Visibility::Closed;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_empty_not_pending() {
        let state = DialogueState::new();
        assert_eq!(state.visibility, Visibility::Closed);
        assert!(state.transcript.is_empty());
        assert!(!state.pending());
    }

    #[test]
    fn open_from_closed_schedules_welcome_once() {
        let mut state = DialogueState::new();
        assert_eq!(state.open(), OpenOutcome::OpenedScheduleWelcome);
        assert_eq!(state.visibility, Visibility::Open);

        // Close and reopen before the welcome lands: no second welcome.
        assert!(state.close());
        assert_eq!(state.open(), OpenOutcome::Opened);
    }

    #[test]
    fn open_is_idempotent() {
        let mut state = DialogueState::new();
        state.open();
        assert_eq!(state.open(), OpenOutcome::AlreadyOpen);
        assert_eq!(state.visibility, Visibility::Open);
    }

    #[test]
    fn open_with_transcript_does_not_schedule_welcome() {
        let mut state = DialogueState::new();
        state.transcript.push(Message::agent("hello"));
        assert_eq!(state.open(), OpenOutcome::Opened);
    }

    #[test]
    fn minimize_only_from_open() {
        let mut state = DialogueState::new();
        assert!(!state.minimize()); // closed: no-op
        state.open();
        assert!(state.minimize());
        assert_eq!(state.visibility, Visibility::Minimized);
        assert!(!state.minimize()); // already minimized: no-op
    }

    #[test]
    fn restore_only_from_minimized() {
        let mut state = DialogueState::new();
        assert!(!state.restore()); // closed: no-op
        state.open();
        assert!(!state.restore()); // open: no-op
        state.minimize();
        assert!(state.restore());
        assert_eq!(state.visibility, Visibility::Open);
    }

    #[test]
    fn close_from_open_and_minimized() {
        let mut state = DialogueState::new();
        assert!(!state.close()); // already closed

        state.open();
        assert!(state.close());
        assert_eq!(state.visibility, Visibility::Closed);

        state.open();
        state.minimize();
        assert!(state.close());
        assert_eq!(state.visibility, Visibility::Closed);
    }

    #[test]
    fn close_keeps_transcript_and_counter() {
        let mut state = DialogueState::new();
        state.open();
        state.transcript.push(Message::user("pay my bill"));
        state.outstanding_replies = 1;

        state.close();
        assert_eq!(state.transcript.len(), 1);
        assert!(state.pending());
    }

    #[test]
    fn pending_tracks_counter() {
        let mut state = DialogueState::new();
        assert!(!state.pending());
        state.outstanding_replies = 2;
        assert!(state.pending());
        state.outstanding_replies = 1;
        assert!(state.pending());
        state.outstanding_replies = 0;
        assert!(!state.pending());
    }
}
