//! Form schema helpers: resolution errors and section grouping.
//!
//! A schema is an ordered field list; the form page renders it section by
//! section. Sections appear in the order their first field appears, and fields
//! keep their schema order inside a section.

use thiserror::Error;

use crate::model::field::FieldSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Modelo não encontrado: {0}")]
    NotFound(String),
}

/// Fields of one section, borrowed from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup<'a> {
    pub key: &'a str,
    pub title: &'static str,
    pub fields: Vec<&'a FieldSchema>,
}

/// Groups fields by section key in first-appearance order.
pub fn group_by_section(fields: &[FieldSchema]) -> Vec<SectionGroup<'_>> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();
    for field in fields {
        match groups.iter_mut().find(|g| g.key == field.section) {
            Some(group) => group.fields.push(field),
            None => groups.push(SectionGroup {
                key: &field.section,
                title: section_title(&field.section),
                fields: vec![field],
            }),
        }
    }
    groups
}

/// Display title of a section key.
///
/// Unknown keys have no title; the view shows the raw key instead
/// (see [`SectionGroup::heading`]).
pub fn section_title(key: &str) -> &'static str {
    match key {
        "metadados" => "Informações Básicas",
        "dados_pessoais" => "Dados Pessoais",
        "objetivo" => "Objetivo Profissional",
        "formacao" => "Formação Acadêmica",
        "experiencia" => "Experiência Profissional",
        "habilidades" => "Habilidades",
        "complementares" => "Informações Complementares",
        "conteudo" => "Conteúdo Principal",
        "capitulos" => "Estrutura do Trabalho",
        "referencias" => "Referências e Fontes",
        _ => "",
    }
}

impl SectionGroup<'_> {
    pub fn heading(&self) -> &str {
        if self.title.is_empty() {
            self.key
        } else {
            self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::field::FieldKind;

    #[test]
    fn test_monograph_sections_in_display_order() {
        let schema = Catalog::builtin().resolve_schema("1").unwrap();
        let keys: Vec<&str> = group_by_section(&schema.fields).into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["metadados", "conteudo", "capitulos", "referencias"]);
    }

    #[test]
    fn test_grouping_is_stable_and_order_preserving() {
        let schema = Catalog::builtin().resolve_schema("3").unwrap();
        let first = group_by_section(&schema.fields);
        let second = group_by_section(&schema.fields);
        assert_eq!(first, second);

        let flattened: Vec<&str> = first
            .iter()
            .flat_map(|g| g.fields.iter().map(|f| f.id.as_str()))
            .collect();
        let original: Vec<&str> = schema.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(flattened, original);
    }

    #[test]
    fn test_interleaved_sections_bucket_by_first_appearance() {
        let fields = vec![
            FieldSchema::new("a", "A", FieldKind::Text, true, "x"),
            FieldSchema::new("b", "B", FieldKind::Text, true, "y"),
            FieldSchema::new("c", "C", FieldKind::Text, true, "x"),
        ];
        let groups = group_by_section(&fields);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "x");
        let ids: Vec<&str> = groups[0].fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(groups[1].fields[0].id, "b");
    }

    #[test]
    fn test_unknown_section_heading_falls_back_to_key() {
        let fields = vec![FieldSchema::new("a", "A", FieldKind::Text, false, "anexos")];
        let groups = group_by_section(&fields);
        assert_eq!(groups[0].heading(), "anexos");
        assert_eq!(section_title("capitulos"), "Estrutura do Trabalho");
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = Catalog::builtin().resolve_schema("999").unwrap_err();
        assert_eq!(err, SchemaError::NotFound("999".to_string()));
        assert_eq!(err.to_string(), "Modelo não encontrado: 999");
    }
}
