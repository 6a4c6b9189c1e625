//! Rule-based response engine.
//!
//! Contains intent classification and reply composition for the
//! portfolio chat. Classification scans an ordered keyword-rule table;
//! composition assembles the reply from knowledge base facts.

pub mod composer;
pub mod intent;

pub use composer::{compose, Link, Reply};
pub use intent::{match_intent, Intent, Rule, RULES};
