//! Event types for the Parley session event bus.
//!
//! `DialogueEvent` is the unified event type broadcast as a session mutates.
//! All variants are Clone + Send + Sync for use with tokio broadcast channels.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::session::{SessionId, Visibility};

/// Events emitted as a dialogue session changes state.
///
/// Used by the event bus to let the presentation layer observe transcript
/// growth and state transitions without polling snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueEvent {
    /// A message (user or agent) was appended to the transcript.
    MessageAppended {
        session_id: SessionId,
        message: Message,
    },

    /// The panel visibility changed.
    VisibilityChanged {
        session_id: SessionId,
        visibility: Visibility,
    },

    /// The outstanding-reply indicator flipped.
    ///
    /// `pending` is true from the first scheduled reply until the last
    /// outstanding one has landed.
    PendingChanged { session_id: SessionId, pending: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tagging() {
        let event = DialogueEvent::VisibilityChanged {
            session_id: SessionId::new(),
            visibility: Visibility::Open,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"visibility_changed\""));
        assert!(json.contains("\"visibility\":\"open\""));
    }

    #[test]
    fn test_message_appended_roundtrip() {
        let event = DialogueEvent::MessageAppended {
            session_id: SessionId::new(),
            message: Message::user("check my balance"),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: DialogueEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, DialogueEvent::MessageAppended { .. }));
    }

    #[test]
    fn test_pending_changed_shape() {
        let event = DialogueEvent::PendingChanged {
            session_id: SessionId::new(),
            pending: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"pending_changed\""));
        assert!(json.contains("\"pending\":true"));
    }
}
