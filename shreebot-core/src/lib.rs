//! Rule-based chat engine behind the ShreeBot portfolio assistant.
//!
//! This crate provides:
//! - A static knowledge base of portfolio facts
//! - Keyword-rule intent classification with a fixed priority order
//! - Deterministic reply composition, including repository links
//! - An append-only conversation session and the widget lifecycle
//!   around it (greeting, typing delay, cancellation)
//!
//! # Quick Start
//!
//! ```
//! use shreebot_core::ChatSession;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = ChatSession::new();
//!     session.start()?;
//!
//!     session.submit("What AI/ML skills does Shreeraj have?")?;
//!     for message in session.history() {
//!         println!("{message}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The [`widget::ChatWidget`] layer adds the simulated typing delay and
//! the open/close state machine on top of the synchronous session; it
//! needs a tokio runtime.

pub mod bot;
pub mod knowledge;
pub mod session;
pub mod testing;
pub mod widget;

// Primary public API
pub use bot::{compose, match_intent, Intent, Link, Reply};
pub use knowledge::{KnowledgeError, Topic, SAMPLE_QUESTIONS};
pub use session::{ChatSession, Message, MessageId, Sender, SessionError};
pub use widget::{ChatWidget, WidgetConfig, WidgetState};
