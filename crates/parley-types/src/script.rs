//! Dialogue script configuration for Parley.
//!
//! `DialogueScript` is the fixed content a session manager draws from: the
//! one-shot greeting, the canned response set, the suggested-action menu,
//! and the scheduling delays. Loaded from a `script.toml`; every field has
//! a sensible default so an empty file yields the stock banking-assistant
//! script.

use serde::{Deserialize, Serialize};

use std::time::Duration;

use crate::error::ScriptError;

/// Fixed dialogue content and timing for a scripted assistant.
///
/// All fields default to the stock banking-assistant script, so deployments
/// only override what they customize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueScript {
    /// Welcome message inserted once per session, shortly after first open.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Canned response set; one entry is chosen uniformly at random per reply.
    #[serde(default = "default_responses")]
    pub responses: Vec<String>,

    /// Pre-written prompts offered while only the welcome message is present.
    #[serde(default = "default_suggested_actions")]
    pub suggested_actions: Vec<String>,

    /// Delay before the welcome message lands, in milliseconds.
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,

    /// Delay before each reply lands, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_greeting() -> String {
    "Hello! I'm your AI Banking Assistant. I'm here to help you manage your \
     accounts, pay bills, and analyze your financial data. How can I assist \
     you today?"
        .to_string()
}

fn default_responses() -> Vec<String> {
    [
        "I can help you with that! Let me pull up your account information...",
        "Sure! I'll process that payment for you. Please confirm the details...",
        "Based on your spending patterns, I've identified some interesting insights...",
        "I've found your recent transactions. Would you like me to categorize them?",
        "Your current account balance is $12,459.32. Is there anything specific you'd like to know?",
        "I can set up that recurring payment for you. What's the frequency you prefer?",
    ]
    .map(String::from)
    .to_vec()
}

fn default_suggested_actions() -> Vec<String> {
    [
        "Show my account balance",
        "Pay electricity bill",
        "Analyze spending patterns",
        "Schedule recurring payment",
        "Show recent transactions",
        "Help with budget planning",
    ]
    .map(String::from)
    .to_vec()
}

fn default_welcome_delay_ms() -> u64 {
    500
}

fn default_reply_delay_ms() -> u64 {
    1500
}

impl Default for DialogueScript {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            responses: default_responses(),
            suggested_actions: default_suggested_actions(),
            welcome_delay_ms: default_welcome_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl DialogueScript {
    /// Check the script for content a session manager cannot work with.
    ///
    /// The greeting must not be blank and the response set must be non-empty
    /// with no blank entries. Delays carry no constraints (zero is valid and
    /// useful in tests).
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.greeting.trim().is_empty() {
            return Err(ScriptError::BlankGreeting);
        }
        if self.responses.is_empty() {
            return Err(ScriptError::EmptyResponseSet);
        }
        if let Some(idx) = self.responses.iter().position(|r| r.trim().is_empty()) {
            return Err(ScriptError::BlankResponse(idx));
        }
        Ok(())
    }

    /// Welcome delay as a `Duration`.
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    /// Reply delay as a `Duration`.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_is_valid() {
        let script = DialogueScript::default();
        script.validate().unwrap();
        assert_eq!(script.responses.len(), 6);
        assert_eq!(script.suggested_actions.len(), 6);
        assert_eq!(script.welcome_delay_ms, 500);
        assert_eq!(script.reply_delay_ms, 1500);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let script: DialogueScript = toml::from_str("").unwrap();
        assert_eq!(script.greeting, DialogueScript::default().greeting);
        assert_eq!(script.responses.len(), 6);
    }

    #[test]
    fn test_toml_overrides() {
        let toml_str = r#"
greeting = "Welcome to support."
responses = ["One moment please."]
reply_delay_ms = 200
"#;
        let script: DialogueScript = toml::from_str(toml_str).unwrap();
        assert_eq!(script.greeting, "Welcome to support.");
        assert_eq!(script.responses, vec!["One moment please.".to_string()]);
        assert_eq!(script.reply_delay_ms, 200);
        // Untouched fields keep defaults
        assert_eq!(script.welcome_delay_ms, 500);
        assert_eq!(script.suggested_actions.len(), 6);
    }

    #[test]
    fn test_validate_rejects_blank_greeting() {
        let script = DialogueScript {
            greeting: "   ".to_string(),
            ..DialogueScript::default()
        };
        assert!(matches!(script.validate(), Err(ScriptError::BlankGreeting)));
    }

    #[test]
    fn test_validate_rejects_empty_response_set() {
        let script = DialogueScript {
            responses: Vec::new(),
            ..DialogueScript::default()
        };
        assert!(matches!(
            script.validate(),
            Err(ScriptError::EmptyResponseSet)
        ));
    }

    #[test]
    fn test_validate_rejects_blank_response() {
        let script = DialogueScript {
            responses: vec!["fine".to_string(), "".to_string()],
            ..DialogueScript::default()
        };
        assert!(matches!(script.validate(), Err(ScriptError::BlankResponse(1))));
    }

    #[test]
    fn test_delay_accessors() {
        let script = DialogueScript::default();
        assert_eq!(script.welcome_delay(), Duration::from_millis(500));
        assert_eq!(script.reply_delay(), Duration::from_millis(1500));
    }
}
