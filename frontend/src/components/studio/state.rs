use log::warn;
use saber_common::jobs::task::TaskHandle;
use saber_common::studio::{open_studio, StudioAccess, StudioEditor};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

pub struct StudioPage {
    pub access: StudioAccess,
    /// `false` when Studio was opened without `?doc=`.
    pub has_document: bool,
    pub active_tab: Tab,
    pub textarea_ref: NodeRef,
    pub versions_sheet: NodeRef,
    pub versions_open: bool,
    pub save_task: Option<TaskHandle>,
    pub export_task: Option<TaskHandle>,
    /// Local time of the last successful save.
    pub last_saved: Option<String>,
    pub checking_out: bool,
}

impl StudioPage {
    pub fn new(document_id: Option<&str>, app: &AppContext) -> Self {
        let access = open_studio(document_id, app.entitlement, &app.store);
        Self {
            access,
            has_document: document_id.is_some_and(|id| !id.trim().is_empty()),
            active_tab: Tab::Editor,
            textarea_ref: NodeRef::default(),
            versions_sheet: NodeRef::default(),
            versions_open: false,
            save_task: None,
            export_task: None,
            last_saved: None,
            checking_out: false,
        }
    }

    pub fn editor(&self) -> Option<&StudioEditor> {
        match &self.access {
            StudioAccess::Editor(editor) => Some(editor),
            StudioAccess::Locked => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut StudioEditor> {
        match &mut self.access {
            StudioAccess::Editor(editor) => Some(editor),
            StudioAccess::Locked => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.save_task.is_some()
    }

    pub fn is_exporting(&self) -> bool {
        self.export_task.is_some()
    }

    /// Grows the textarea to its content so the page, not the field, scrolls.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(element) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = element.style();
                let height = format!("{}px", textarea.scroll_height());
                if let Err(e) = style
                    .set_property("height", "auto")
                    .and_then(|_| style.set_property("height", &height))
                {
                    warn!("textarea not resized: {:?}", e);
                }
            }
        }
    }
}
