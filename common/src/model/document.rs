use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of a document's version history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: u32,
    /// Display timestamp, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    pub author: String,
    pub action: String,
    /// Display size, e.g. `12.5k palavras`.
    pub size: String,
}

/// The document opened in Studio.
///
/// Metadata is fabricated; only `content` is edited, and only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockDocument {
    pub id: String,
    pub title: String,
    pub document_type: String,
    pub course: String,
    pub author: String,
    pub created_at: String,
    pub modified_at: String,
    pub status: String,
    pub pages: u32,
    pub word_count: u32,
    pub versions: Vec<Version>,
    pub content: String,
}

/// Fresh id for a document created in this session, `doc-<hex>`.
pub fn new_document_id() -> String {
    format!("doc-{}", Uuid::new_v4().simple())
}

/// What Studio hands to the store on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub document_id: String,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_ids_are_distinct() {
        let first = new_document_id();
        assert!(first.starts_with("doc-"));
        assert_eq!(first.len(), "doc-".len() + 32);
        assert_ne!(first, new_document_id());
    }
}
