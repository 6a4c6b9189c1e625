//! Chat widget lifecycle.
//!
//! Wraps a [`ChatSession`] with the open/close state machine and the
//! simulated typing delay. The pure session appends synchronously; this
//! layer defers the bot append behind a timer so the UI can show a
//! typing indicator, and cancels the timer if the widget closes first.
//!
//! Submits are serialized: while a reply is pending, further input is
//! rejected, so at most one deferred append exists per widget and the
//! user message always lands before its reply.

use crate::bot::{compose, match_intent};
use crate::knowledge::{self, Topic};
use crate::session::{ChatSession, Message, SessionError};
use rand::Rng;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

/// Delay before the greeting appears on first open.
const DEFAULT_GREETING_DELAY_MS: u64 = 1500;

/// Typing-delay range for replies, in milliseconds.
const DEFAULT_TYPING_DELAY_MS: Range<u64> = 1500..2500;

/// Lifecycle state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Not visible; input is not accepted.
    Closed,
    /// Opened for the first time; the greeting is scheduled.
    AwaitingGreeting,
    /// Open and ready for input.
    Idle,
    /// A reply is pending behind the typing delay.
    AwaitingResponse,
}

/// Configuration for the widget's timers.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Delay before the greeting is appended on first open.
    pub greeting_delay: Duration,
    /// Range the per-reply typing delay is drawn from, in milliseconds.
    pub typing_delay_ms: Range<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting_delay: Duration::from_millis(DEFAULT_GREETING_DELAY_MS),
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
        }
    }
}

impl WidgetConfig {
    /// Create a config with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with zero delays, for headless use.
    pub fn instant() -> Self {
        Self {
            greeting_delay: Duration::ZERO,
            typing_delay_ms: 0..0,
        }
    }

    /// Set the greeting delay.
    pub fn with_greeting_delay(mut self, delay: Duration) -> Self {
        self.greeting_delay = delay;
        self
    }

    /// Set the typing-delay range in milliseconds.
    pub fn with_typing_delay_ms(mut self, range: Range<u64>) -> Self {
        self.typing_delay_ms = range;
        self
    }

    /// Draw a typing delay from the configured range.
    fn sample_typing_delay(&self) -> Duration {
        let millis = if self.typing_delay_ms.is_empty() {
            self.typing_delay_ms.start
        } else {
            rand::thread_rng().gen_range(self.typing_delay_ms.clone())
        };
        Duration::from_millis(millis)
    }
}

/// State shared with the deferred append tasks.
#[derive(Debug)]
struct WidgetInner {
    session: ChatSession,
    state: WidgetState,
}

/// A chat widget: one session plus the open/close and typing machinery.
///
/// Requires a tokio runtime; the deferred appends run as spawned tasks.
/// Dropping the widget aborts any pending append, so a torn-down widget
/// never receives a late message.
#[derive(Debug)]
pub struct ChatWidget {
    inner: Arc<Mutex<WidgetInner>>,
    config: WidgetConfig,
    pending: Option<JoinHandle<()>>,
}

impl ChatWidget {
    /// Create a closed widget with an empty session.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WidgetInner {
                session: ChatSession::new(),
                state: WidgetState::Closed,
            })),
            config,
            pending: None,
        }
    }

    /// Open the widget.
    ///
    /// On the first open of an empty session, schedules the greeting
    /// after the configured delay. Re-opening a widget that already has
    /// history goes straight to `Idle` without greeting again. Opening
    /// an already-open widget is a no-op.
    pub async fn open(&mut self) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().await;
        if inner.state != WidgetState::Closed {
            return Ok(());
        }

        if !inner.session.is_empty() {
            inner.state = WidgetState::Idle;
            return Ok(());
        }

        let greeting = knowledge::fact(Topic::Greeting)?;
        inner.state = WidgetState::AwaitingGreeting;
        drop(inner);
        debug!("widget opened, greeting scheduled");

        let delay = self.config.greeting_delay;
        let shared = Arc::clone(&self.inner);
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let mut inner = shared.lock().await;
            if inner.session.is_empty() {
                inner.session.push(Message::bot(greeting, Vec::new()));
            }
            inner.state = WidgetState::Idle;
        }));

        Ok(())
    }

    /// Submit user text.
    ///
    /// Returns `Ok(true)` when the text was accepted: the user message
    /// is appended immediately and the reply is scheduled behind the
    /// typing delay. Returns `Ok(false)` for blank input, while a reply
    /// or the greeting is still pending, or while the widget is closed.
    pub async fn send(&mut self, text: &str) -> Result<bool, SessionError> {
        if text.trim().is_empty() {
            return Ok(false);
        }

        let mut inner = self.inner.lock().await;
        if inner.state != WidgetState::Idle {
            debug!(state = ?inner.state, "input rejected");
            return Ok(false);
        }

        let intent = match_intent(text);
        let reply = compose(intent)?;
        inner.session.push(Message::user(text));
        inner.state = WidgetState::AwaitingResponse;
        drop(inner);
        debug!(?intent, "reply scheduled");

        let delay = self.config.sample_typing_delay();
        let shared = Arc::clone(&self.inner);
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let mut inner = shared.lock().await;
            inner.session.push(Message::bot(reply.text, reply.links));
            inner.state = WidgetState::Idle;
        }));

        Ok(true)
    }

    /// Close the widget, cancelling any pending deferred append.
    ///
    /// History is kept; the next `open` resumes where the conversation
    /// left off. A greeting that was cancelled before it landed is
    /// rescheduled on the next open.
    pub async fn close(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let mut inner = self.inner.lock().await;
        inner.state = WidgetState::Closed;
        debug!("widget closed");
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> WidgetState {
        self.inner.lock().await.state
    }

    /// Whether the typing indicator should show.
    pub async fn is_typing(&self) -> bool {
        matches!(
            self.state().await,
            WidgetState::AwaitingGreeting | WidgetState::AwaitingResponse
        )
    }

    /// A snapshot of the conversation so far, oldest first.
    pub async fn history_snapshot(&self) -> Vec<Message> {
        self.inner.lock().await.session.history().to_vec()
    }

    /// Number of messages in the conversation.
    pub async fn message_count(&self) -> usize {
        self.inner.lock().await.session.message_count()
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
