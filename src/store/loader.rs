//! Loading the conversation store

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::Conversation;

const SAMPLE_CONVERSATIONS: &str = include_str!("sample_conversations.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid conversation data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate conversation id: {0}")]
    DuplicateId(String),
}

/// Immutable, shared list of conversations
#[derive(Debug, Clone)]
pub struct ConversationStore {
    conversations: Arc<[Conversation]>,
}

impl ConversationStore {
    pub fn new(conversations: Vec<Conversation>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for conversation in &conversations {
            if !seen.insert(conversation.id.as_str()) {
                return Err(StoreError::DuplicateId(conversation.id.clone()));
            }
        }
        Ok(Self {
            conversations: conversations.into(),
        })
    }

    /// The built-in sample inbox
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_json(SAMPLE_CONVERSATIONS)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let conversations: Vec<Conversation> = serde_json::from_str(json)?;
        Self::new(conversations)
    }

    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), count = store.len(), "loaded conversations");
        Ok(store)
    }

    pub fn all(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn first(&self) -> Option<&Conversation> {
        self.conversations.first()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store() {
        let store = ConversationStore::sample().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.first().unwrap().id, "1");

        let ivan = store.get("2").unwrap();
        assert!(ivan.unread);
        assert!(ivan.priority);

        let bot = store.get("4").unwrap();
        assert!(bot.user.is_bot);
        assert_eq!(bot.subtext.as_deref(), Some("Luis · Small Crafts"));
        assert_eq!(bot.user.company, None);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"[{"id":"a","user":{"name":"Ann","initial":"A"},"preview":"hi","time":"1m"}]"#;
        let store = ConversationStore::from_json(json).unwrap();
        let c = store.get("a").unwrap();
        assert!(!c.unread);
        assert!(!c.priority);
        assert!(!c.user.is_bot);
        assert_eq!(c.user.display_name(), "Ann");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"a","user":{"name":"Ann","initial":"A"},"preview":"hi","time":"1m"},
            {"id":"a","user":{"name":"Bob","initial":"B"},"preview":"yo","time":"2m"}
        ]"#;
        let err = ConversationStore::from_json(json).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_invalid_json() {
        let err = ConversationStore::from_json("not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ConversationStore::from_file(Path::new("/nonexistent/inbox.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = ConversationStore::from_json("[]").unwrap();
        assert!(store.is_empty());
        assert!(store.first().is_none());
    }
}
