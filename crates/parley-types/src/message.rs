//! Transcript message types for Parley.
//!
//! A `Message` is immutable once created. The transcript of a dialogue
//! session is an append-only sequence of messages; insertion order is
//! display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Agent => write!(f, "agent"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "agent" => Ok(Sender::Agent),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message within a dialogue transcript.
///
/// Messages are never edited or removed after creation. The id is a UUID v7,
/// so ids are unique and time-sortable; ordering within a transcript is by
/// insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message from the user side, stamped now.
    ///
    /// Callers are responsible for rejecting blank text before constructing
    /// a message; this type never holds empty content by convention.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    /// Create a message from the agent side, stamped now.
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Agent)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Agent] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Agent).unwrap();
        assert_eq!(json, "\"agent\"");
        let parsed: Sender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Sender::Agent);
    }

    #[test]
    fn test_sender_rejects_unknown() {
        assert!("assistant".parse::<Sender>().is_err());
    }

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hello");
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "hello");

        let agent = Message::agent("hi there");
        assert_eq!(agent.sender, Sender::Agent);
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("a");
        let b = Message::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_serialize() {
        let msg = Message::agent("canned reply");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"agent\""));
        assert!(json.contains("canned reply"));
    }
}
