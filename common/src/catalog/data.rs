//! Built-in library content: categories, listed models and the form schemas
//! of the models that can be filled in.

use crate::model::category::{Subcategory, TemplateCategory};
use crate::model::field::{FieldKind, FieldSchema, TemplateSchema};
use crate::model::template::TemplateModel;

const ACADEMIC_COURSES: [&str; 6] = [
    "Informática",
    "Direito",
    "Mecânica",
    "Gestão",
    "Medicina",
    "Engenharia",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn subcategory(id: &str, name: &str, description: &str) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        courses: Vec::new(),
        levels: Vec::new(),
        subjects: Vec::new(),
        types: Vec::new(),
    }
}

pub(super) fn categories() -> Vec<TemplateCategory> {
    vec![
        TemplateCategory {
            id: "trabalhos-escolares".to_string(),
            name: "Trabalhos Escolares".to_string(),
            description: "Monografias, TFC e trabalhos acadêmicos".to_string(),
            icon: "menu_book".to_string(),
            advertised_count: 45,
            subcategories: vec![
                Subcategory {
                    courses: strings(&ACADEMIC_COURSES),
                    ..subcategory(
                        "monografias",
                        "Monografias",
                        "Trabalhos de pesquisa acadêmica",
                    )
                },
                Subcategory {
                    courses: strings(&ACADEMIC_COURSES),
                    ..subcategory(
                        "tfc",
                        "Trabalhos de Final de Curso (TFC)",
                        "Projetos de conclusão de curso",
                    )
                },
                Subcategory {
                    levels: strings(&["Ensino Médio", "Superior", "Técnico"]),
                    subjects: strings(&[
                        "Matemática",
                        "História",
                        "Programação",
                        "Física",
                        "Química",
                        "Literatura",
                    ]),
                    ..subcategory(
                        "trabalhos-normais",
                        "Trabalhos Normais",
                        "Trabalhos do dia a dia acadêmico",
                    )
                },
            ],
        },
        TemplateCategory {
            id: "outros-documentos".to_string(),
            name: "Outros Documentos".to_string(),
            description: "CVs, cartas formais e certificados".to_string(),
            icon: "description".to_string(),
            advertised_count: 25,
            subcategories: vec![
                Subcategory {
                    types: strings(&["Estudante", "Profissional", "Primeiro Emprego", "Executivo"]),
                    ..subcategory("cvs", "Currículos (CVs)", "Modelos de currículo profissional")
                },
                Subcategory {
                    types: strings(&["Recomendação", "Motivação", "Pedido", "Apresentação"]),
                    ..subcategory(
                        "cartas-formais",
                        "Cartas Formais",
                        "Cartas de recomendação, motivação e pedido",
                    )
                },
                Subcategory {
                    types: strings(&["Participação", "Conclusão", "Matrícula", "Frequência"]),
                    ..subcategory(
                        "certificados-declaracoes",
                        "Certificados e Declarações",
                        "Documentos oficiais e certificações",
                    )
                },
            ],
        },
    ]
}

pub(super) fn models() -> Vec<TemplateModel> {
    vec![
        TemplateModel {
            id: "1".to_string(),
            title: "Monografia em Informática - Formato ABNT".to_string(),
            description: "Estrutura completa para monografia em Informática seguindo normas ABNT"
                .to_string(),
            subcategory_id: "monografias".to_string(),
            course: Some("Informática".to_string()),
            kind: None,
            level: Some("Superior".to_string()),
            downloads: 1234,
            rating: 4.8,
            tags: strings(&["ABNT", "Monografia", "Informática"]),
            preview: "/academic-thesis-template.jpg".to_string(),
            featured: true,
        },
        TemplateModel {
            id: "2".to_string(),
            title: "Monografia em Informática - Formato Simples".to_string(),
            description: "Modelo simplificado para monografia em Informática".to_string(),
            subcategory_id: "monografias".to_string(),
            course: Some("Informática".to_string()),
            kind: None,
            level: Some("Superior".to_string()),
            downloads: 987,
            rating: 4.6,
            tags: strings(&["Monografia", "Informática"]),
            preview: "/academic-thesis-template.jpg".to_string(),
            featured: false,
        },
        TemplateModel {
            id: "3".to_string(),
            title: "CV Estudante Universitário".to_string(),
            description: "Currículo otimizado para estudantes sem experiência profissional"
                .to_string(),
            subcategory_id: "cvs".to_string(),
            course: None,
            kind: Some("Estudante".to_string()),
            level: None,
            downloads: 2156,
            rating: 4.9,
            tags: strings(&["CV", "Estudante", "Primeiro Emprego"]),
            preview: "/student-cv-template.jpg".to_string(),
            featured: true,
        },
    ]
}

fn monograph_schema() -> TemplateSchema {
    use FieldKind::{Date, Text, Textarea};

    TemplateSchema {
        template_id: "1".to_string(),
        name: "Monografia em Informática - Formato ABNT".to_string(),
        document_type: "monografia".to_string(),
        course: Some("Informática".to_string()),
        category: "Trabalhos Escolares".to_string(),
        subcategory: "Monografias".to_string(),
        estimated_pages: "40-60 páginas".to_string(),
        fields: vec![
            FieldSchema::new("titulo", "Título da Monografia", Text, true, "metadados"),
            FieldSchema::new("autor", "Nome do Autor", Text, true, "metadados"),
            FieldSchema::new("curso", "Curso", Text, true, "metadados").with_default("Informática"),
            FieldSchema::new("orientador", "Professor Orientador", Text, true, "metadados"),
            FieldSchema::new("instituicao", "Instituição de Ensino", Text, true, "metadados"),
            FieldSchema::new("data", "Data de Apresentação", Date, true, "metadados"),
            FieldSchema::new("resumo", "Resumo", Textarea, true, "conteudo")
                .with_placeholder("Resumo executivo da monografia (máx. 500 palavras)"),
            FieldSchema::new("palavras_chave", "Palavras-chave", Text, true, "conteudo")
                .with_placeholder("Separadas por vírgula"),
            FieldSchema::new("introducao", "Introdução", Textarea, true, "capitulos")
                .with_placeholder("Contextualização e objetivos do trabalho"),
            FieldSchema::new("desenvolvimento", "Desenvolvimento", Textarea, true, "capitulos")
                .with_placeholder("Conteúdo principal da pesquisa"),
            FieldSchema::new("conclusao", "Conclusão", Textarea, true, "capitulos")
                .with_placeholder("Considerações finais e resultados"),
            FieldSchema::new(
                "referencias",
                "Referências Bibliográficas",
                Textarea,
                true,
                "referencias",
            )
            .with_placeholder("Lista de referências no formato ABNT"),
        ],
    }
}

fn student_cv_schema() -> TemplateSchema {
    use FieldKind::{Email, Tel, Text, Textarea};

    TemplateSchema {
        template_id: "3".to_string(),
        name: "CV Estudante Universitário".to_string(),
        document_type: "cv".to_string(),
        course: None,
        category: "Outros Documentos".to_string(),
        subcategory: "CVs".to_string(),
        estimated_pages: "1-2 páginas".to_string(),
        fields: vec![
            FieldSchema::new("nome_completo", "Nome Completo", Text, true, "dados_pessoais"),
            FieldSchema::new("email", "E-mail", Email, true, "dados_pessoais"),
            FieldSchema::new("telefone", "Telefone", Tel, true, "dados_pessoais"),
            FieldSchema::new("endereco", "Endereço", Text, true, "dados_pessoais"),
            FieldSchema::new("objetivo", "Objetivo Profissional", Textarea, true, "objetivo")
                .with_placeholder("Descreva seu objetivo profissional"),
            FieldSchema::new("formacao", "Formação Acadêmica", Textarea, true, "formacao")
                .with_placeholder("Curso atual, instituição, período"),
            FieldSchema::new(
                "experiencias",
                "Experiências (Estágios/Trabalhos)",
                Textarea,
                false,
                "experiencia",
            )
            .with_placeholder("Descreva suas experiências profissionais"),
            FieldSchema::new(
                "habilidades",
                "Habilidades e Competências",
                Textarea,
                true,
                "habilidades",
            )
            .with_placeholder("Liste suas principais habilidades"),
            FieldSchema::new("idiomas", "Idiomas", Text, false, "complementares")
                .with_placeholder("Ex: Inglês (intermediário), Francês (básico)"),
            FieldSchema::new(
                "cursos_extras",
                "Cursos Complementares",
                Textarea,
                false,
                "complementares",
            )
            .with_placeholder("Cursos, certificações, workshops"),
        ],
    }
}

pub(super) fn schemas() -> Vec<TemplateSchema> {
    vec![monograph_schema(), student_cv_schema()]
}
