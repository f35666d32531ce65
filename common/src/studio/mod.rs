//! # Studio editor buffer
//!
//! Studio edits one document's markdown text in memory. This module holds
//! everything the Studio page needs that is not rendering:
//!
//! - **Access**: a document id without a premium entitlement opens the
//!   upsell view instead of the editor ([`open_studio`]).
//! - **Editing**: every change is pushed on a linear undo/redo history.
//! - **Dirty tracking**: the MD5 of the text at the last load/save is kept
//!   and compared to the current text.
//! - **Save / export**: simulated latency; save writes a snapshot to the
//!   injected store, export only produces a notice.
//! - **Restore version**: advertised but not implemented. It takes `&self`
//!   and only returns a notice.

pub mod format;
mod sample;

use std::time::Duration;

use log::{debug, info};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::entitlement::Entitlement;
use crate::jobs::pipeline::Delay;
use crate::model::document::{DocumentSnapshot, MockDocument, Version};
use crate::storage::{DocumentStore, StorageError};

/// Hex MD5 digest of a text; used for dirty checking.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Word,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Word => "WORD",
        }
    }
}

/// A heading of the document, for the structure sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Markdown heading level, 1 for `#`.
    pub level: u8,
    pub title: String,
}

/// What the Studio route resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum StudioAccess {
    /// Premium upsell; the document is not loaded.
    Locked,
    Editor(StudioEditor),
}

impl StudioAccess {
    /// Whether `open_studio` would now resolve differently, e.g. once the
    /// profile turns a free session into a premium one.
    pub fn is_stale(&self, document_id: Option<&str>, entitlement: Entitlement) -> bool {
        if document_id.is_none_or(|id| id.trim().is_empty()) {
            return false;
        }
        match self {
            StudioAccess::Locked => entitlement.is_premium(),
            StudioAccess::Editor(_) => !entitlement.is_premium(),
        }
    }
}

/// Opens Studio for the `doc` query parameter.
///
/// A snapshot saved earlier in the session replaces the sample content.
pub fn open_studio<S: DocumentStore>(
    document_id: Option<&str>,
    entitlement: Entitlement,
    store: &S,
) -> StudioAccess {
    let Some(document_id) = document_id.filter(|id| !id.trim().is_empty()) else {
        return StudioAccess::Editor(StudioEditor::blank());
    };
    if !entitlement.is_premium() {
        info!("studio locked for document {}", document_id);
        return StudioAccess::Locked;
    }

    let mut document = sample::sample_document(document_id);
    match store.load_document(document_id) {
        Ok(Some(snapshot)) => {
            document.title = snapshot.title;
            document.content = snapshot.content;
        }
        Ok(None) => {}
        Err(e) => log::warn!("could not read saved document {}: {}", document_id, e),
    }
    StudioAccess::Editor(StudioEditor::new(document))
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudioEditor {
    document: MockDocument,
    text: String,
    /// Linear history; each entry is a full snapshot of `text`.
    history: Vec<String>,
    history_index: usize,
    saved_md5: String,
}

impl StudioEditor {
    pub fn new(document: MockDocument) -> Self {
        let text = document.content.clone();
        Self {
            saved_md5: compute_md5(&text),
            history: vec![text.clone()],
            history_index: 0,
            text,
            document,
        }
    }

    pub fn blank() -> Self {
        Self::new(sample::blank_document())
    }

    pub fn document(&self) -> &MockDocument {
        &self.document
    }

    pub fn versions(&self) -> &[Version] {
        &self.document.versions
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        &self.document.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.title = title.into();
    }

    /// Replaces the buffer. No-op when the text is unchanged.
    pub fn edit(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        if self.text == new_text {
            return;
        }
        self.history.truncate(self.history_index + 1);
        self.history.push(new_text.clone());
        self.history_index = self.history.len() - 1;
        self.text = new_text;
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.history_index -= 1;
        self.text = self.history[self.history_index].clone();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.history_index += 1;
        self.text = self.history[self.history_index].clone();
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.saved_md5 != compute_md5(&self.text)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn outline(&self) -> Vec<OutlineEntry> {
        outline(&self.text)
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            document_id: self.document.id.clone(),
            title: self.document.title.clone(),
            content: self.text.clone(),
        }
    }

    /// Records `snapshot` as the saved state. Edits made while the save was
    /// in flight stay dirty.
    pub fn mark_saved(&mut self, snapshot: &DocumentSnapshot) {
        self.saved_md5 = compute_md5(&snapshot.content);
    }

    /// Notice for the "restore" button of a version. The buffer is untouched.
    pub fn restore_version(&self, version_id: u32) -> String {
        debug!("restore of version {} requested", version_id);
        format!("Revertendo para a versão {}...", version_id)
    }
}

/// Headings of a markdown text, in document order.
pub fn outline(markdown: &str) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(HeadingLevel, String)> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => current = Some((level, String::new())),
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, title)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current.take() {
                    entries.push(OutlineEntry {
                        level: level as u8,
                        title: title.trim().to_string(),
                    });
                }
            }
            _ => {}
        }
    }
    entries
}

/// Waits the save latency, then writes `snapshot` to `store`.
pub async fn save_document<D: Delay, S: DocumentStore>(
    delay: &D,
    latency: Duration,
    store: &S,
    snapshot: DocumentSnapshot,
) -> Result<DocumentSnapshot, StorageError> {
    delay.sleep(latency).await;
    store.save_document(snapshot.clone())?;
    info!("document {} saved from studio", snapshot.document_id);
    Ok(snapshot)
}

/// Waits the export latency and returns the notice to show. No file is
/// produced.
pub async fn export_document<D: Delay>(delay: &D, latency: Duration, format: ExportFormat) -> String {
    delay.sleep(latency).await;
    format!("Exportando documento como {}...", format.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use std::future::Future;

    struct NoDelay;

    impl Delay for NoDelay {
        fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
            std::future::ready(())
        }
    }

    fn editor() -> StudioEditor {
        match open_studio(Some("7"), Entitlement::Premium, &InMemoryStore::new()) {
            StudioAccess::Editor(editor) => editor,
            StudioAccess::Locked => panic!("premium user should get the editor"),
        }
    }

    #[test]
    fn test_free_user_with_document_is_locked() {
        let access = open_studio(Some("7"), Entitlement::Free, &InMemoryStore::new());
        assert_eq!(access, StudioAccess::Locked);
    }

    #[test]
    fn test_locked_access_goes_stale_when_premium_arrives() {
        let store = InMemoryStore::new();
        let access = open_studio(Some("7"), Entitlement::Free, &store);
        assert!(!access.is_stale(Some("7"), Entitlement::Free));
        assert!(access.is_stale(Some("7"), Entitlement::Premium));

        let reopened = open_studio(Some("7"), Entitlement::Premium, &store);
        assert!(matches!(reopened, StudioAccess::Editor(_)));
        assert!(!reopened.is_stale(Some("7"), Entitlement::Premium));
        assert!(reopened.is_stale(Some("7"), Entitlement::Free));
    }

    #[test]
    fn test_blank_access_never_stale() {
        let access = open_studio(None, Entitlement::Free, &InMemoryStore::new());
        assert!(!access.is_stale(None, Entitlement::Premium));
        assert!(!access.is_stale(Some(" "), Entitlement::Premium));
    }

    #[tokio::test]
    async fn test_blank_editor_save_succeeds() {
        let store = InMemoryStore::new();
        let StudioAccess::Editor(mut editor) = open_studio(None, Entitlement::Free, &store) else {
            panic!("blank studio is not gated");
        };
        editor.edit("# Meu texto");
        let saved = save_document(&NoDelay, Duration::ZERO, &store, editor.snapshot())
            .await
            .unwrap();
        editor.mark_saved(&saved);
        assert!(!editor.is_dirty());
        let stored = store.load_document(&editor.document().id).unwrap().unwrap();
        assert_eq!(stored.content, "# Meu texto");
    }

    #[test]
    fn test_without_document_opens_blank_buffer() {
        let access = open_studio(None, Entitlement::Free, &InMemoryStore::new());
        match access {
            StudioAccess::Editor(editor) => {
                assert!(editor.text().is_empty());
                assert!(!editor.is_dirty());
            }
            StudioAccess::Locked => panic!("blank studio is not gated"),
        }
    }

    #[test]
    fn test_loads_sample_keyed_by_document_id() {
        let editor = editor();
        assert_eq!(editor.document().id, "7");
        assert!(editor.text().starts_with("# Monografia em Informática"));
        assert_eq!(editor.versions().len(), 3);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_edit_undo_redo() {
        let mut editor = editor();
        let original = editor.text().to_string();
        editor.edit("novo texto");
        assert!(editor.is_dirty());
        assert!(editor.undo());
        assert_eq!(editor.text(), original);
        assert!(!editor.is_dirty());
        assert!(editor.redo());
        assert_eq!(editor.text(), "novo texto");
        assert!(!editor.redo());
    }

    #[test]
    fn test_edit_after_undo_drops_redo_branch() {
        let mut editor = StudioEditor::blank();
        editor.edit("a");
        editor.edit("ab");
        editor.undo();
        editor.edit("ac");
        assert!(!editor.can_redo());
        editor.undo();
        assert_eq!(editor.text(), "a");
    }

    #[test]
    fn test_restore_version_does_not_touch_buffer() {
        let mut editor = editor();
        editor.edit("conteúdo editado");
        let before = editor.clone();
        let notice = editor.restore_version(2);
        assert_eq!(notice, "Revertendo para a versão 2...");
        assert_eq!(editor, before);
    }

    #[test]
    fn test_outline_lists_headings() {
        let editor = editor();
        let outline = editor.outline();
        assert_eq!(outline[0].level, 1);
        assert_eq!(outline[1], OutlineEntry { level: 2, title: "Resumo".to_string() });
        assert!(outline.contains(&OutlineEntry {
            level: 3,
            title: "2.2 Deep Learning".to_string(),
        }));
        assert_eq!(outline.last().unwrap().title, "Referências");
    }

    #[test]
    fn test_word_count() {
        let mut editor = StudioEditor::blank();
        editor.edit("uma  duas\ntrês");
        assert_eq!(editor.word_count(), 3);
    }

    #[tokio::test]
    async fn test_save_writes_snapshot_and_clears_dirty() {
        let store = InMemoryStore::new();
        let mut editor = editor();
        editor.edit("# Novo");
        let saved = save_document(&NoDelay, Duration::from_millis(1500), &store, editor.snapshot())
            .await
            .unwrap();
        editor.mark_saved(&saved);
        assert!(!editor.is_dirty());
        assert_eq!(store.load_document("7").unwrap().unwrap().content, "# Novo");

        // Reopening in the same session picks up the saved text.
        match open_studio(Some("7"), Entitlement::Premium, &store) {
            StudioAccess::Editor(reopened) => assert_eq!(reopened.text(), "# Novo"),
            StudioAccess::Locked => panic!("premium user should get the editor"),
        }
    }

    #[tokio::test]
    async fn test_edits_during_save_stay_dirty() {
        let store = InMemoryStore::new();
        let mut editor = editor();
        editor.edit("v1");
        let snapshot = editor.snapshot();
        editor.edit("v2");
        let saved = save_document(&NoDelay, Duration::ZERO, &store, snapshot).await.unwrap();
        editor.mark_saved(&saved);
        assert!(editor.is_dirty());
    }

    #[tokio::test]
    async fn test_export_only_returns_notice() {
        let notice = export_document(&NoDelay, Duration::ZERO, ExportFormat::Pdf).await;
        assert_eq!(notice, "Exportando documento como PDF...");
        let notice = export_document(&NoDelay, Duration::ZERO, ExportFormat::Word).await;
        assert_eq!(notice, "Exportando documento como WORD...");
    }
}
