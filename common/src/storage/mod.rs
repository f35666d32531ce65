//! Storage seam for drafts and Studio saves.
//!
//! Nothing in the front end survives a reload; the views still write through
//! a [`DocumentStore`] so the behaviour is explicit and tests can inspect it.
//! [`InMemoryStore`] is the only implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FormData;
use crate::model::document::DocumentSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("identificador vazio")]
    EmptyId,
}

/// Form values saved with "Salvar Rascunho".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub template_id: String,
    pub values: FormData,
}

pub trait DocumentStore {
    fn save_draft(&self, draft: Draft) -> Result<(), StorageError>;
    fn load_draft(&self, template_id: &str) -> Result<Option<Draft>, StorageError>;
    fn save_document(&self, snapshot: DocumentSnapshot) -> Result<(), StorageError>;
    fn load_document(&self, document_id: &str) -> Result<Option<DocumentSnapshot>, StorageError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Rc<S> {
    fn save_draft(&self, draft: Draft) -> Result<(), StorageError> {
        (**self).save_draft(draft)
    }

    fn load_draft(&self, template_id: &str) -> Result<Option<Draft>, StorageError> {
        (**self).load_draft(template_id)
    }

    fn save_document(&self, snapshot: DocumentSnapshot) -> Result<(), StorageError> {
        (**self).save_document(snapshot)
    }

    fn load_document(&self, document_id: &str) -> Result<Option<DocumentSnapshot>, StorageError> {
        (**self).load_document(document_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    drafts: RefCell<HashMap<String, Draft>>,
    documents: RefCell<HashMap<String, DocumentSnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft_count(&self) -> usize {
        self.drafts.borrow().len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.borrow().len()
    }
}

impl DocumentStore for InMemoryStore {
    fn save_draft(&self, draft: Draft) -> Result<(), StorageError> {
        if draft.template_id.trim().is_empty() {
            return Err(StorageError::EmptyId);
        }
        debug!("draft saved for template {}", draft.template_id);
        self.drafts
            .borrow_mut()
            .insert(draft.template_id.clone(), draft);
        Ok(())
    }

    fn load_draft(&self, template_id: &str) -> Result<Option<Draft>, StorageError> {
        Ok(self.drafts.borrow().get(template_id).cloned())
    }

    fn save_document(&self, snapshot: DocumentSnapshot) -> Result<(), StorageError> {
        if snapshot.document_id.trim().is_empty() {
            return Err(StorageError::EmptyId);
        }
        debug!("document {} saved", snapshot.document_id);
        self.documents
            .borrow_mut()
            .insert(snapshot.document_id.clone(), snapshot);
        Ok(())
    }

    fn load_document(&self, document_id: &str) -> Result<Option<DocumentSnapshot>, StorageError> {
        Ok(self.documents.borrow().get(document_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trip_and_overwrite() {
        let store = InMemoryStore::new();
        let mut values = FormData::new();
        values.insert("titulo".to_string(), "v1".to_string());
        store
            .save_draft(Draft {
                template_id: "1".to_string(),
                values: values.clone(),
            })
            .unwrap();
        values.insert("titulo".to_string(), "v2".to_string());
        store
            .save_draft(Draft {
                template_id: "1".to_string(),
                values,
            })
            .unwrap();

        let draft = store.load_draft("1").unwrap().unwrap();
        assert_eq!(draft.values["titulo"], "v2");
        assert_eq!(store.draft_count(), 1);
        assert!(store.load_draft("3").unwrap().is_none());
    }

    #[test]
    fn test_empty_ids_are_rejected() {
        let store = InMemoryStore::new();
        let err = store
            .save_document(DocumentSnapshot {
                document_id: " ".to_string(),
                title: String::new(),
                content: String::new(),
            })
            .unwrap_err();
        assert_eq!(err, StorageError::EmptyId);
        assert_eq!(store.document_count(), 0);
    }

    #[test]
    fn test_shared_through_rc() {
        let store = Rc::new(InMemoryStore::new());
        let view_side: Rc<InMemoryStore> = store.clone();
        view_side
            .save_document(DocumentSnapshot {
                document_id: "1".to_string(),
                title: "T".to_string(),
                content: "# T".to_string(),
            })
            .unwrap();
        assert_eq!(store.load_document("1").unwrap().unwrap().content, "# T");
    }
}
