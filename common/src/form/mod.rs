//! # Form state and validation
//!
//! `FormState` backs the document form page. It holds the typed-in values
//! and the last validation result for one schema.
//!
//! - Values are seeded once, when the template loads: from a stored draft if
//!   there is one, otherwise from the schema defaults.
//! - Editing a field clears that field's error only. Errors are not
//!   re-validated live.
//! - `validate` recomputes the whole error map from scratch.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::field::TemplateSchema;

/// Field id → current value.
pub type FormData = BTreeMap<String, String>;

/// Field id → human-readable message.
///
/// A field id is present only if the field is required and its trimmed value
/// is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    pub fn clear_field(&mut self, field_id: &str) -> Option<String> {
        self.0.remove(field_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.values().map(String::as_str).collect()
    }
}

/// Message shown under a required field left empty.
pub fn required_message(label: &str) -> String {
    format!("{} é obrigatório", label)
}

/// Checks every required field of `schema` against `data`.
pub fn validate(schema: &TemplateSchema, data: &FormData) -> ValidationErrors {
    let errors = schema
        .required_fields()
        .filter(|field| {
            data.get(&field.id)
                .map_or(true, |value| value.trim().is_empty())
        })
        .map(|field| (field.id.clone(), required_message(&field.label)))
        .collect();
    ValidationErrors(errors)
}

/// Values seeded from the schema defaults.
pub fn initial_data(schema: &TemplateSchema) -> FormData {
    schema
        .fields
        .iter()
        .filter_map(|f| {
            f.default_value
                .as_ref()
                .map(|value| (f.id.clone(), value.clone()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    template_id: String,
    values: FormData,
    errors: ValidationErrors,
}

impl FormState {
    /// Fresh form for `schema`, seeded with its defaults.
    pub fn new(schema: &TemplateSchema) -> Self {
        Self {
            template_id: schema.template_id.clone(),
            values: initial_data(schema),
            errors: ValidationErrors::default(),
        }
    }

    /// Form restored from a saved draft. The draft replaces the defaults.
    pub fn from_draft(schema: &TemplateSchema, values: FormData) -> Self {
        Self {
            template_id: schema.template_id.clone(),
            values,
            errors: ValidationErrors::default(),
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn values(&self) -> &FormData {
        &self.values
    }

    pub fn value(&self, field_id: &str) -> &str {
        self.values.get(field_id).map_or("", String::as_str)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id)
    }

    /// Stores a keystroke and clears the error of that field only.
    pub fn set_field(&mut self, field_id: &str, value: impl Into<String>) {
        self.values.insert(field_id.to_string(), value.into());
        self.errors.clear_field(field_id);
    }

    /// Recomputes all errors. Returns `true` when the form can be submitted.
    pub fn validate(&mut self, schema: &TemplateSchema) -> bool {
        self.errors = validate(schema, &self.values);
        if !self.errors.is_empty() {
            debug!(
                "form {} has {} missing required field(s)",
                self.template_id,
                self.errors.len()
            );
        }
        self.errors.is_empty()
    }

    /// Validates and, when valid, hands back the values to submit.
    pub fn submit(&mut self, schema: &TemplateSchema) -> Result<FormData, ValidationErrors> {
        if self.validate(schema) {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Title shown on the preview card: the document title, else the CV name.
    pub fn preview_title(&self) -> Option<&str> {
        ["titulo", "nome_completo"]
            .iter()
            .map(|id| self.value(id))
            .find(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::field::{FieldKind, FieldSchema};

    fn monograph() -> &'static TemplateSchema {
        Catalog::builtin().resolve_schema("1").unwrap()
    }

    fn fill_all(state: &mut FormState, schema: &TemplateSchema) {
        for field in &schema.fields {
            state.set_field(&field.id, format!("valor de {}", field.id));
        }
    }

    #[test]
    fn test_defaults_seed_initial_values() {
        let state = FormState::new(monograph());
        assert_eq!(state.value("curso"), "Informática");
        assert_eq!(state.value("titulo"), "");
        assert_eq!(state.values().len(), 1);
    }

    #[test]
    fn test_missing_required_fields_are_reported_by_label() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        fill_all(&mut state, schema);
        state.set_field("titulo", "");
        state.set_field("autor", "   ");

        assert!(!state.validate(schema));
        assert_eq!(state.errors().len(), 2);
        assert_eq!(state.error("titulo"), Some("Título da Monografia é obrigatório"));
        assert_eq!(state.error("autor"), Some("Nome do Autor é obrigatório"));
    }

    #[test]
    fn test_optional_fields_may_stay_blank() {
        let schema = Catalog::builtin().resolve_schema("3").unwrap();
        let mut state = FormState::new(schema);
        for field in schema.required_fields() {
            state.set_field(&field.id, "x");
        }
        assert!(state.validate(schema));
        assert!(state.value("idiomas").is_empty());
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        state.validate(schema);
        let before = state.errors().len();
        assert!(state.error("titulo").is_some());

        state.set_field("titulo", "Redes Neurais");
        assert!(state.error("titulo").is_none());
        assert!(state.error("autor").is_some());
        assert_eq!(state.errors().len(), before - 1);
    }

    #[test]
    fn test_clearing_a_value_does_not_revalidate() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        state.set_field("titulo", "x");
        state.set_field("titulo", "");
        assert!(state.error("titulo").is_none());
    }

    #[test]
    fn test_errors_recomputed_wholesale() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        state.validate(schema);
        fill_all(&mut state, schema);
        // Clear a field without touching its error, then revalidate.
        state.values.insert("resumo".to_string(), " ".to_string());
        assert!(!state.validate(schema));
        assert_eq!(state.errors().messages(), vec!["Resumo é obrigatório"]);
    }

    #[test]
    fn test_submit_blocks_on_errors() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        assert!(state.submit(schema).is_err());
        fill_all(&mut state, schema);
        let data = state.submit(schema).unwrap();
        assert_eq!(data.len(), schema.fields.len());
    }

    #[test]
    fn test_pure_validate_ignores_unknown_keys() {
        let schema = TemplateSchema {
            template_id: "t".to_string(),
            name: "T".to_string(),
            document_type: "cv".to_string(),
            course: None,
            category: "c".to_string(),
            subcategory: "s".to_string(),
            estimated_pages: "1".to_string(),
            fields: vec![
                FieldSchema::new("a", "Campo A", FieldKind::Text, true, "x"),
                FieldSchema::new("b", "Campo B", FieldKind::Email, false, "x"),
            ],
        };
        let mut data = FormData::new();
        data.insert("zzz".to_string(), "".to_string());
        let errors = validate(&schema, &data);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("a"), Some("Campo A é obrigatório"));
    }

    #[test]
    fn test_preview_title_prefers_document_title() {
        let schema = monograph();
        let mut state = FormState::new(schema);
        assert_eq!(state.preview_title(), None);
        state.set_field("titulo", "Redes Neurais");
        assert_eq!(state.preview_title(), Some("Redes Neurais"));
    }

    #[test]
    fn test_draft_replaces_defaults() {
        let schema = monograph();
        let mut draft = FormData::new();
        draft.insert("titulo".to_string(), "Rascunho".to_string());
        let state = FormState::from_draft(schema, draft);
        assert_eq!(state.value("titulo"), "Rascunho");
        assert_eq!(state.value("curso"), "");
    }
}
