//! # Template catalog
//!
//! Read-only lookups over the model library: categories → subcategories →
//! models, plus the form schemas keyed by model id. The content is built once
//! (`Catalog::builtin`) and shared for the lifetime of the page.
//!
//! The browse page walks the library with [`BrowseView`]; the form page calls
//! [`Catalog::resolve_schema`] with the `model` query parameter.

mod data;

use std::sync::OnceLock;

use crate::model::category::{Subcategory, TemplateCategory};
use crate::model::field::TemplateSchema;
use crate::model::template::TemplateModel;
use crate::schema::SchemaError;

pub struct Catalog {
    categories: Vec<TemplateCategory>,
    models: Vec<TemplateModel>,
    schemas: Vec<TemplateSchema>,
}

/// Facet selection on the models view. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub course: Option<String>,
    pub level: Option<String>,
}

impl Catalog {
    pub fn new(
        categories: Vec<TemplateCategory>,
        models: Vec<TemplateModel>,
        schemas: Vec<TemplateSchema>,
    ) -> Self {
        Self {
            categories,
            models,
            schemas,
        }
    }

    /// The library shipped with the front end.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(data::categories(), data::models(), data::schemas()))
    }

    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&TemplateCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Subcategories of a category; empty for an unknown id.
    pub fn subcategories(&self, category_id: &str) -> &[Subcategory] {
        self.category(category_id)
            .map(|c| c.subcategories.as_slice())
            .unwrap_or(&[])
    }

    pub fn subcategory(&self, subcategory_id: &str) -> Option<&Subcategory> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .find(|s| s.id == subcategory_id)
    }

    /// Models listed under a subcategory, in library order.
    pub fn models_for(&self, subcategory_id: &str) -> Vec<&TemplateModel> {
        self.models
            .iter()
            .filter(|m| m.subcategory_id == subcategory_id)
            .collect()
    }

    /// Models of a subcategory narrowed by the facet selection.
    ///
    /// A facet only hides models that carry a different value for it; models
    /// without the facet stay visible.
    pub fn filter_models(&self, subcategory_id: &str, filter: &ModelFilter) -> Vec<&TemplateModel> {
        fn keeps(selected: &Option<String>, value: &Option<String>) -> bool {
            match (selected, value) {
                (Some(selected), Some(value)) => selected == value,
                _ => true,
            }
        }

        self.models_for(subcategory_id)
            .into_iter()
            .filter(|m| keeps(&filter.course, &m.course) && keeps(&filter.level, &m.level))
            .collect()
    }

    pub fn model(&self, model_id: &str) -> Option<&TemplateModel> {
        self.models.iter().find(|m| m.id == model_id)
    }

    pub fn featured_models(&self) -> impl Iterator<Item = &TemplateModel> {
        self.models.iter().filter(|m| m.featured)
    }

    /// Resolves the form schema of a model.
    ///
    /// Listed models without a schema resolve to `NotFound` just like unknown ids.
    pub fn resolve_schema(&self, template_id: &str) -> Result<&TemplateSchema, SchemaError> {
        self.schemas
            .iter()
            .find(|s| s.template_id == template_id)
            .ok_or_else(|| SchemaError::NotFound(template_id.to_string()))
    }
}

/// Where the browse page currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseView {
    #[default]
    Categories,
    Subcategories {
        category_id: String,
    },
    Models {
        category_id: String,
        subcategory_id: String,
    },
}

impl BrowseView {
    pub fn select_category(&self, category_id: &str) -> BrowseView {
        BrowseView::Subcategories {
            category_id: category_id.to_string(),
        }
    }

    /// Opens a subcategory of the current category. Ignored outside the
    /// subcategories view.
    pub fn select_subcategory(&self, subcategory_id: &str) -> BrowseView {
        match self {
            BrowseView::Subcategories { category_id } => BrowseView::Models {
                category_id: category_id.clone(),
                subcategory_id: subcategory_id.to_string(),
            },
            other => other.clone(),
        }
    }

    pub fn back(&self) -> BrowseView {
        match self {
            BrowseView::Models { category_id, .. } => BrowseView::Subcategories {
                category_id: category_id.clone(),
            },
            BrowseView::Subcategories { .. } | BrowseView::Categories => BrowseView::Categories,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !matches!(self, BrowseView::Categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategories_of_known_category() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .subcategories("trabalhos-escolares")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["monografias", "tfc", "trabalhos-normais"]);
    }

    #[test]
    fn test_unknown_ids_yield_empty_results() {
        let catalog = Catalog::builtin();
        assert!(catalog.subcategories("nope").is_empty());
        assert!(catalog.models_for("nope").is_empty());
        assert!(catalog.subcategory("nope").is_none());
        assert!(catalog.model("42").is_none());
    }

    #[test]
    fn test_models_for_subcategory() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .models_for("monografias")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(catalog.models_for("cvs")[0].title, "CV Estudante Universitário");
    }

    #[test]
    fn test_course_filter_keeps_unlabelled_models() {
        let catalog = Catalog::builtin();
        let law = ModelFilter {
            course: Some("Direito".to_string()),
            level: None,
        };
        assert!(catalog.filter_models("monografias", &law).is_empty());
        // CVs have no course label, so the course facet never hides them.
        assert_eq!(catalog.filter_models("cvs", &law).len(), 1);

        let it = ModelFilter {
            course: Some("Informática".to_string()),
            level: Some("Superior".to_string()),
        };
        assert_eq!(catalog.filter_models("monografias", &it).len(), 2);
    }

    #[test]
    fn test_listed_model_without_schema_is_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.model("2").is_some());
        assert_eq!(
            catalog.resolve_schema("2"),
            Err(SchemaError::NotFound("2".to_string()))
        );
        assert!(catalog.resolve_schema("1").is_ok());
    }

    #[test]
    fn test_browse_navigation() {
        let view = BrowseView::default().select_category("outros-documentos");
        let view = view.select_subcategory("cvs");
        assert_eq!(
            view,
            BrowseView::Models {
                category_id: "outros-documentos".to_string(),
                subcategory_id: "cvs".to_string(),
            }
        );
        let view = view.back();
        assert!(matches!(view, BrowseView::Subcategories { .. }));
        assert_eq!(view.back(), BrowseView::Categories);
        assert!(!BrowseView::Categories.can_go_back());
    }

    #[test]
    fn test_select_subcategory_outside_subcategories_view_is_ignored() {
        let view = BrowseView::Categories.select_subcategory("cvs");
        assert_eq!(view, BrowseView::Categories);
    }

    #[test]
    fn test_preview_badges_follow_card_limits() {
        let catalog = Catalog::builtin();
        let monographs = catalog.subcategory("monografias").unwrap();
        assert_eq!(monographs.preview_badges(), vec!["Informática", "Direito", "Mecânica"]);
        let normal = catalog.subcategory("trabalhos-normais").unwrap();
        assert_eq!(normal.preview_badges(), vec!["Ensino Médio", "Superior"]);
    }
}
