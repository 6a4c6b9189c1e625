//! Testing utilities for the chat engine.
//!
//! Provides a small harness for scripting conversations against a
//! [`ChatSession`] plus assertion helpers for verifying the resulting
//! history.

use crate::session::{ChatSession, Message, Sender};

/// Test harness driving a single conversation.
pub struct TestHarness {
    /// The session under test.
    pub session: ChatSession,
}

impl TestHarness {
    /// Create a harness with a fresh, empty session.
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(),
        }
    }

    /// Create a harness whose session has already been greeted.
    pub fn greeted() -> Self {
        let mut harness = Self::new();
        harness
            .session
            .start()
            .expect("greeting fact must be present");
        harness
    }

    /// Submit user text, panicking if composition fails.
    pub fn submit(&mut self, text: &str) -> &mut Self {
        self.session.submit(text).expect("compose must not fail");
        self
    }

    /// The most recent bot message text, if any.
    pub fn last_bot_text(&self) -> Option<&str> {
        self.session
            .history()
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Bot)
            .map(|m| m.text.as_str())
    }

    /// Number of messages in the history.
    pub fn message_count(&self) -> usize {
        self.session.message_count()
    }

    /// The full history.
    pub fn history(&self) -> &[Message] {
        self.session.history()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the history has exactly the expected number of messages.
#[track_caller]
pub fn assert_message_count(harness: &TestHarness, expected: usize) {
    let actual = harness.message_count();
    assert_eq!(
        actual, expected,
        "Expected {expected} messages in history, got {actual}"
    );
}

/// Assert the most recent bot message contains the given fragment.
#[track_caller]
pub fn assert_last_bot_contains(harness: &TestHarness, fragment: &str) {
    let text = harness
        .last_bot_text()
        .expect("Expected at least one bot message");
    assert!(
        text.contains(fragment),
        "Expected last bot message to contain '{fragment}', got: {text}"
    );
}

/// Assert every user message is immediately followed by a bot reply.
#[track_caller]
pub fn assert_replies_follow_users(harness: &TestHarness) {
    let history = harness.history();
    for (index, message) in history.iter().enumerate() {
        if message.sender == Sender::User {
            let reply = history.get(index + 1);
            assert!(
                reply.map(|m| m.sender) == Some(Sender::Bot),
                "User message at index {index} has no bot reply after it"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_basic() {
        let mut harness = TestHarness::new();
        harness.submit("what is his education?");

        assert_message_count(&harness, 2);
        assert_last_bot_contains(&harness, "EDUCATION INFORMATION");
        assert_replies_follow_users(&harness);
    }

    #[test]
    fn test_greeted_harness() {
        let harness = TestHarness::greeted();
        assert_message_count(&harness, 1);
        assert_last_bot_contains(&harness, "ShreeBot");
    }

    #[test]
    fn test_scripted_conversation() {
        let mut harness = TestHarness::greeted();
        harness
            .submit("experience?")
            .submit("any awards?")
            .submit("   ");

        // The blank submit leaves the count unchanged.
        assert_message_count(&harness, 5);
        assert_last_bot_contains(&harness, "ACHIEVEMENT DATA");
        assert_replies_follow_users(&harness);
    }
}
