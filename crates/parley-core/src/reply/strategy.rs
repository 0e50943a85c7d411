//! ReplyStrategy trait definition.
//!
//! This is the seam between the session manager and reply content. The
//! shipped implementation draws from a canned response set; a real backend
//! can replace it without changing the session manager's contract.

/// Trait for producing an agent reply to a user submission.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The prompt is
/// the user message that triggered the reply; implementations are free to
/// ignore it (the canned strategy does).
pub trait ReplyStrategy: Send + Sync {
    /// Human-readable strategy name (e.g., "canned").
    fn name(&self) -> &str;

    /// Produce one reply for the given user prompt.
    fn reply(&self, prompt: &str) -> impl std::future::Future<Output = String> + Send;
}
