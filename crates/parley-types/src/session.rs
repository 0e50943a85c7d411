//! Session identity and visibility types for Parley.
//!
//! A dialogue session corresponds to one mounted assistant panel. Its
//! visibility follows a small state machine:
//! `closed --open--> open`, `open --minimize--> minimized`,
//! `minimized --restore--> open`, `{open,minimized} --close--> closed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::message::Message;

/// Unique identifier for a dialogue session, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new SessionId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Visibility of the assistant panel backing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Closed,
    Open,
    Minimized,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Closed => write!(f, "closed"),
            Visibility::Open => write!(f, "open"),
            Visibility::Minimized => write!(f, "minimized"),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "closed" => Ok(Visibility::Closed),
            "open" => Ok(Visibility::Open),
            "minimized" => Ok(Visibility::Minimized),
            other => Err(format!("invalid visibility: '{other}'")),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Closed
    }
}

/// Point-in-time read model of a dialogue session.
///
/// This is what the presentation layer consumes: visibility, the full
/// transcript in display order, and whether any reply is still outstanding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueSnapshot {
    pub id: SessionId,
    pub visibility: Visibility,
    pub transcript: Vec<Message>,
    pub pending: bool,
    pub started_at: DateTime<Utc>,
}
