//! Canned reply strategy: uniform random selection from a fixed response set.

use parley_types::error::ScriptError;
use parley_types::script::DialogueScript;
use rand::Rng;

use crate::reply::strategy::ReplyStrategy;

/// Reply strategy that picks uniformly at random from a fixed response set.
///
/// The set is validated non-empty at construction, so selection can never
/// fail at reply time.
#[derive(Debug, Clone)]
pub struct CannedReplies {
    responses: Vec<String>,
}

impl CannedReplies {
    /// Build a strategy from an explicit response set.
    pub fn new(responses: Vec<String>) -> Result<Self, ScriptError> {
        if responses.is_empty() {
            return Err(ScriptError::EmptyResponseSet);
        }
        Ok(Self { responses })
    }

    /// Build a strategy from a dialogue script's response set.
    pub fn from_script(script: &DialogueScript) -> Result<Self, ScriptError> {
        Self::new(script.responses.clone())
    }

    /// The response set this strategy draws from.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

impl ReplyStrategy for CannedReplies {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, _prompt: &str) -> String {
        // ThreadRng is not Send; keep it scoped so the future stays Send.
        let idx = { rand::rng().random_range(0..self.responses.len()) };
        self.responses[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_set() {
        assert!(matches!(
            CannedReplies::new(Vec::new()),
            Err(ScriptError::EmptyResponseSet)
        ));
    }

    #[test]
    fn test_from_script_uses_script_responses() {
        let script = DialogueScript::default();
        let replies = CannedReplies::from_script(&script).unwrap();
        assert_eq!(replies.responses(), &script.responses[..]);
    }

    #[tokio::test]
    async fn test_reply_is_member_of_set() {
        let replies = CannedReplies::from_script(&DialogueScript::default()).unwrap();
        for _ in 0..32 {
            let reply = replies.reply("Show my account balance").await;
            assert!(replies.responses().contains(&reply));
        }
    }

    #[tokio::test]
    async fn test_single_entry_set_is_deterministic() {
        let replies = CannedReplies::new(vec!["Only answer.".to_string()]).unwrap();
        assert_eq!(replies.reply("anything").await, "Only answer.");
    }

    #[test]
    fn test_name() {
        let replies = CannedReplies::new(vec!["x".to_string()]).unwrap();
        assert_eq!(replies.name(), "canned");
    }
}
