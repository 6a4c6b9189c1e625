//! Conversation session - the append-only message history.
//!
//! A [`ChatSession`] owns the ordered sequence of messages exchanged in
//! one chat-widget lifetime. It orchestrates the response pipeline:
//! receive user text, classify it, compose a reply, append the bot
//! message. All state lives in memory and dies with the session.

use crate::bot::{compose, match_intent, Link};
use crate::knowledge::{self, KnowledgeError, Topic};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),
}

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Create a new unique message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The visitor typing into the widget.
    User,
    /// The bot.
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// The message text, verbatim as submitted or composed.
    pub text: String,
    /// Who authored it.
    pub sender: Sender,
    /// Links the UI renders beneath the text. Empty for user messages
    /// and for non-project replies.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::User,
            links: Vec::new(),
        }
    }

    /// Create a bot message with optional links.
    pub fn bot(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::Bot,
            links,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.sender, self.text)
    }
}

/// An in-memory, append-only conversation.
///
/// Messages are only ever appended; nothing reorders or deletes them.
/// The session is owned by the UI surface that created it and is
/// discarded when that surface is torn down.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
}

impl ChatSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the greeting if the session has no messages yet.
    ///
    /// Idempotent: returns `true` only when the greeting was appended,
    /// `false` when the session already had history.
    pub fn start(&mut self) -> Result<bool, SessionError> {
        if !self.messages.is_empty() {
            return Ok(false);
        }

        let greeting = knowledge::fact(Topic::Greeting)?;
        self.messages.push(Message::bot(greeting, Vec::new()));
        debug!("greeting appended");
        Ok(true)
    }

    /// Submit user text and append the bot's reply.
    ///
    /// Blank input (empty or whitespace-only) is silently ignored and
    /// returns `Ok(None)`. Otherwise the user message is appended
    /// verbatim, followed by the composed reply, and a reference to the
    /// reply message is returned. The user message always precedes its
    /// reply in the history.
    pub fn submit(&mut self, text: &str) -> Result<Option<&Message>, SessionError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let intent = match_intent(text);
        let reply = compose(intent)?;
        debug!(?intent, "composed reply");

        self.messages.push(Message::user(text));
        self.messages.push(Message::bot(reply.text, reply.links));
        Ok(self.messages.last())
    }

    /// Append an already-built message. The widget layer uses this to
    /// defer the bot append behind the typing delay.
    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full message history, oldest first.
    ///
    /// Read-only view; calling it repeatedly has no side effects.
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the session.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Whether the session has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
