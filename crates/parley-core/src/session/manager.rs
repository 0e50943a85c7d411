//! Dialogue session manager.
//!
//! `DialogueSession` is the single owner and mutator of one panel's state:
//! visibility, the append-only transcript, and the outstanding-reply count.
//! The presentation layer only ever sees snapshots and events.
//!
//! Welcome and reply insertions are independent, fire-once tokio tasks.
//! `close()` never cancels them (a reopened panel resumes the conversation,
//! stale replies included); `shutdown()` -- invoked on unmount and on drop --
//! cancels everything outstanding so no task mutates a discarded session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use parley_types::error::ScriptError;
use parley_types::event::DialogueEvent;
use parley_types::message::Message;
use parley_types::script::DialogueScript;
use parley_types::session::{DialogueSnapshot, SessionId, Visibility};

use crate::event::EventBus;
use crate::reply::ReplyStrategy;
use crate::session::state::{DialogueState, OpenOutcome};

/// Event bus capacity per session. One panel produces a trickle of events;
/// 64 absorbs any realistic burst.
const EVENT_CAPACITY: usize = 64;

/// Manages the lifecycle and state of a single dialogue session.
///
/// Generic over the reply strategy so canned content can be swapped for a
/// real backend without touching the session contract.
pub struct DialogueSession<R: ReplyStrategy> {
    id: SessionId,
    started_at: DateTime<Utc>,
    script: Arc<DialogueScript>,
    replies: Arc<R>,
    state: Arc<Mutex<DialogueState>>,
    events: EventBus,
    shutdown: CancellationToken,
}

impl<R: ReplyStrategy + 'static> DialogueSession<R> {
    /// Create a session with all fields at defaults: closed, empty
    /// transcript, nothing pending.
    ///
    /// Fails if the script has no usable content (blank greeting or empty
    /// response set), so reply selection can never fail later.
    pub fn new(script: Arc<DialogueScript>, replies: R) -> Result<Self, ScriptError> {
        script.validate()?;
        let id = SessionId::new();
        info!(session_id = %id, strategy = replies.name(), "dialogue session created");
        Ok(Self {
            id,
            started_at: Utc::now(),
            script,
            replies: Arc::new(replies),
            state: Arc::new(Mutex::new(DialogueState::new())),
            events: EventBus::new(EVENT_CAPACITY),
            shutdown: CancellationToken::new(),
        })
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The script this session draws content from.
    pub fn script(&self) -> &DialogueScript {
        &self.script
    }

    /// Subscribe to this session's event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<DialogueEvent> {
        self.events.subscribe()
    }

    // --- Visibility operations ---

    /// Open the panel. Idempotent when already open.
    ///
    /// On the first open of an empty transcript, schedules the one-shot
    /// welcome message after the script's welcome delay.
    pub async fn open(&self) {
        let outcome = {
            let mut state = self.state.lock().await;
            state.open()
        };
        match outcome {
            OpenOutcome::AlreadyOpen => {}
            OpenOutcome::Opened => self.publish_visibility(Visibility::Open),
            OpenOutcome::OpenedScheduleWelcome => {
                self.publish_visibility(Visibility::Open);
                self.spawn_welcome();
            }
        }
    }

    /// Minimize the panel. No-op unless currently open.
    pub async fn minimize(&self) {
        let changed = self.state.lock().await.minimize();
        if changed {
            self.publish_visibility(Visibility::Minimized);
        }
    }

    /// Restore a minimized panel. No-op unless currently minimized.
    pub async fn restore(&self) {
        let changed = self.state.lock().await.restore();
        if changed {
            self.publish_visibility(Visibility::Open);
        }
    }

    /// Close the panel. The transcript is retained, and outstanding reply
    /// timers keep running, so a later open resumes the conversation.
    pub async fn close(&self) {
        let changed = self.state.lock().await.close();
        if changed {
            self.publish_visibility(Visibility::Closed);
        }
    }

    // --- Message operations ---

    /// Submit user text.
    ///
    /// Text that is empty after trimming is dropped silently (no message, no
    /// pending change). Otherwise the user message is appended synchronously
    /// -- stored exactly as given -- and an independent reply timer is
    /// scheduled. Overlapping submissions each get their own timer; the
    /// pending indicator clears only once every outstanding reply has landed.
    pub async fn submit(&self, text: &str) {
        if text.trim().is_empty() {
            debug!(session_id = %self.id, "dropping blank submission");
            return;
        }

        let message = Message::user(text);
        {
            let mut state = self.state.lock().await;
            state.transcript.push(message.clone());
            state.outstanding_replies += 1;
            self.events.publish(DialogueEvent::MessageAppended {
                session_id: self.id,
                message: message.clone(),
            });
            if state.outstanding_replies == 1 {
                self.events.publish(DialogueEvent::PendingChanged {
                    session_id: self.id,
                    pending: true,
                });
            }
        }
        self.spawn_reply(message.text);
    }

    /// Select one of the suggested actions. Equivalent to submitting the
    /// action text.
    pub async fn select_suggested_action(&self, action: &str) {
        self.submit(action).await;
    }

    // --- Read model ---

    /// The suggested-action menu.
    ///
    /// Non-empty exactly while the transcript holds only the welcome
    /// message; once the user has said anything, the menu is withdrawn.
    pub async fn suggestions(&self) -> Vec<String> {
        let state = self.state.lock().await;
        if state.transcript.len() == 1 {
            self.script.suggested_actions.clone()
        } else {
            Vec::new()
        }
    }

    /// Point-in-time snapshot of visibility, transcript, and pending.
    pub async fn snapshot(&self) -> DialogueSnapshot {
        let state = self.state.lock().await;
        DialogueSnapshot {
            id: self.id,
            visibility: state.visibility,
            transcript: state.transcript.clone(),
            pending: state.pending(),
            started_at: self.started_at,
        }
    }

    /// Current panel visibility.
    pub async fn visibility(&self) -> Visibility {
        self.state.lock().await.visibility
    }

    /// Whether any reply is still outstanding.
    pub async fn pending(&self) -> bool {
        self.state.lock().await.pending()
    }

    // --- Teardown ---

    /// Cancel all outstanding welcome/reply timers.
    ///
    /// Called on unmount; also runs on drop. Idempotent.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    // --- Scheduled tasks ---

    fn publish_visibility(&self, visibility: Visibility) {
        debug!(session_id = %self.id, %visibility, "visibility changed");
        self.events.publish(DialogueEvent::VisibilityChanged {
            session_id: self.id,
            visibility,
        });
    }

    fn spawn_welcome(&self) {
        let session_id = self.id;
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let greeting = self.script.greeting.clone();
        let delay = self.script.welcome_delay();
        let cancel = self.shutdown.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(%session_id, "welcome timer canceled at teardown");
                }
                _ = tokio::time::sleep(delay) => {
                    let message = Message::agent(greeting);
                    let mut state = state.lock().await;
                    state.transcript.push(message.clone());
                    events.publish(DialogueEvent::MessageAppended { session_id, message });
                }
            }
        });
    }

    fn spawn_reply(&self, prompt: String) {
        let session_id = self.id;
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let replies = Arc::clone(&self.replies);
        let delay = self.script.reply_delay();
        let cancel = self.shutdown.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(%session_id, "reply timer canceled at teardown");
                }
                _ = tokio::time::sleep(delay) => {
                    let message = Message::agent(replies.reply(&prompt).await);
                    let mut state = state.lock().await;
                    state.transcript.push(message.clone());
                    state.outstanding_replies -= 1;
                    events.publish(DialogueEvent::MessageAppended { session_id, message });
                    if state.outstanding_replies == 0 {
                        events.publish(DialogueEvent::PendingChanged { session_id, pending: false });
                    }
                }
            }
        });
    }
}

impl<R: ReplyStrategy> Drop for DialogueSession<R> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl<R: ReplyStrategy> std::fmt::Debug for DialogueSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueSession")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .finish()
    }
}
