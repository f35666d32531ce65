use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Material icon name rendered on the category card.
    pub icon: String,
    /// Advertised number of models; a marketing figure, not a count of `models`.
    pub advertised_count: u32,
    pub subcategories: Vec<Subcategory>,
}

/// A subcategory and the facet values its model list can be filtered by.
///
/// Facets are optional: academic work is filtered by course or level,
/// other documents by type. An empty facet list means the filter is not shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Subcategory {
    /// Facet values shown as badges on the subcategory card, in the same
    /// order the card uses: three courses, two levels, three types.
    pub fn preview_badges(&self) -> Vec<&str> {
        self.courses
            .iter()
            .take(3)
            .chain(self.levels.iter().take(2))
            .chain(self.types.iter().take(3))
            .map(String::as_str)
            .collect()
    }
}
