use serde::{Deserialize, Serialize};

/// Input kind of a form field. Serialized with the HTML `type` names so the
/// view can pass it straight to `<input type=...>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Textarea,
}

impl FieldKind {
    pub fn html_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}

/// One input of a template's form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Key into the form data map.
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Section key the field is grouped under (`metadados`, `capitulos`, ...).
    pub section: String,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FieldSchema {
    pub fn new(id: &str, label: &str, kind: FieldKind, required: bool, section: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required,
            section: section.to_string(),
            default_value: None,
            placeholder: None,
        }
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}

/// The form schema of a template plus the header metadata of the form page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSchema {
    pub template_id: String,
    pub name: String,
    /// Document type (`monografia`, `cv`).
    pub document_type: String,
    pub course: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub estimated_pages: String,
    pub fields: Vec<FieldSchema>,
}

impl TemplateSchema {
    pub fn field(&self, id: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.required)
    }
}
