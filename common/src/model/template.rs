use serde::{Deserialize, Serialize};

/// A template listed in the model library.
///
/// Templates are browsed through `catalog::Catalog` and, once selected, their
/// `id` is the key used to resolve a form schema (`Catalog::resolve_schema`).
/// Not every listed template has a schema yet; the form page renders those as
/// "model not found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateModel {
    /// Numeric id as a string, e.g. `"1"`. Also used in `/documentos?model=<id>`.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Subcategory this template belongs to (`monografias`, `cvs`, ...).
    pub subcategory_id: String,
    /// Course facet value, present for academic work (`Informática`, `Direito`).
    pub course: Option<String>,
    /// Type facet value, present for non-academic documents (`Estudante`).
    pub kind: Option<String>,
    /// Level facet value (`Superior`, `Técnico`).
    pub level: Option<String>,
    pub downloads: u32,
    /// Average rating on a 0 to 5 scale.
    pub rating: f32,
    pub tags: Vec<String>,
    /// Path of the preview image served with the front end assets.
    pub preview: String,
    #[serde(default)]
    pub featured: bool,
}

impl TemplateModel {
    /// Label shown on the model card badge: the course when there is one,
    /// otherwise the document type.
    pub fn badge(&self) -> Option<&str> {
        self.course.as_deref().or(self.kind.as_deref())
    }

    /// Route of the form page that fills this template.
    pub fn form_href(&self) -> String {
        format!("/documentos?model={}", self.id)
    }
}
