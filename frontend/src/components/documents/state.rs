use log::{info, warn};
use saber_common::catalog::Catalog;
use saber_common::form::FormState;
use saber_common::jobs::task::TaskHandle;
use saber_common::jobs::GenerationTracker;
use saber_common::model::field::TemplateSchema;
use saber_common::schema::SchemaError;
use saber_common::storage::DocumentStore;

use crate::context::AppContext;

pub struct DocumentsPage {
    /// `Err` renders the not-found view; the form is never partial.
    pub schema: Result<&'static TemplateSchema, SchemaError>,
    pub form: Option<FormState>,
    pub tracker: GenerationTracker,
    /// Handle of the running generation, if any.
    pub task: Option<TaskHandle>,
    /// Premium upsell shown after a refused start.
    pub notice: Option<&'static str>,
    /// Id the generated document opens under in Studio.
    pub generated_id: Option<String>,
}

impl DocumentsPage {
    pub fn new(model_id: Option<&str>, app: &AppContext) -> Self {
        let schema = Catalog::builtin().resolve_schema(model_id.unwrap_or_default());
        let form = match &schema {
            Ok(schema) => Some(load_form(schema, app)),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };
        Self {
            schema,
            form,
            tracker: GenerationTracker::new(),
            task: None,
            notice: None,
            generated_id: None,
        }
    }
}

/// A draft saved earlier in the session wins over the schema defaults.
fn load_form(schema: &TemplateSchema, app: &AppContext) -> FormState {
    match app.store.load_draft(&schema.template_id) {
        Ok(Some(draft)) => {
            info!("restoring draft of template {}", schema.template_id);
            FormState::from_draft(schema, draft.values)
        }
        Ok(None) => FormState::new(schema),
        Err(e) => {
            warn!("draft of template {} unreadable: {}", schema.template_id, e);
            FormState::new(schema)
        }
    }
}
