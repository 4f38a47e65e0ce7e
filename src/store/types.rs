//! Conversation and message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The person (or bot) on the other side of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub avatar: String,
    pub initial: String,
    #[serde(default)]
    pub is_bot: bool,
}

impl User {
    /// Name followed by the company, if any
    pub fn display_name(&self) -> String {
        match &self.company {
            Some(company) => format!("{} · {}", self.name, company),
            None => self.name.clone(),
        }
    }
}

/// A support thread as listed in the inbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub user: User,
    pub preview: String,
    #[serde(default)]
    pub subtext: Option<String>,
    pub time: String,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub priority: bool,
}

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
    System,
    Notification,
}

/// One line in a conversation thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub seen: bool,
    pub has_bot: bool,
}

impl Message {
    /// Create a fresh message stamped now
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
            seen: false,
            has_bot: false,
        }
    }
}
