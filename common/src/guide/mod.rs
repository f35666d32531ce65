//! Help center: guide categories, popular guides, FAQ and contact channels.

use crate::landing::FaqEntry;

pub struct GuideCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    pub guides: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideFormat {
    Video,
    Tutorial,
    Article,
}

impl GuideFormat {
    pub fn label(self) -> &'static str {
        match self {
            GuideFormat::Video => "Vídeo",
            GuideFormat::Tutorial => "Tutorial",
            GuideFormat::Article => "Artigo",
        }
    }

    /// Text of the guide card button.
    pub fn action_label(self) -> &'static str {
        match self {
            GuideFormat::Video => "Assistir Guia",
            GuideFormat::Tutorial | GuideFormat::Article => "Ler Guia",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub format: GuideFormat,
    pub difficulty: &'static str,
    pub views: u32,
    pub rating: f32,
}

pub const CATEGORIES: [GuideCategory; 4] = [
    GuideCategory {
        id: "getting-started",
        name: "Primeiros Passos",
        description: "Aprenda o básico para começar a usar a plataforma",
        icon: "menu_book",
        guides: 12,
    },
    GuideCategory {
        id: "models-templates",
        name: "Modelos e Templates",
        description: "Como usar e personalizar nossos modelos",
        icon: "description",
        guides: 8,
    },
    GuideCategory {
        id: "studio-tools",
        name: "Ferramentas do Studio",
        description: "Guias completos para todas as ferramentas criativas",
        icon: "lightbulb",
        guides: 15,
    },
    GuideCategory {
        id: "tips-tricks",
        name: "Dicas e Truques",
        description: "Maximize sua produtividade com essas dicas",
        icon: "star",
        guides: 6,
    },
];

pub fn popular_guides() -> Vec<Guide> {
    vec![
        Guide {
            id: 1,
            title: "Como criar sua primeira apresentação",
            description: "Passo a passo para criar apresentações profissionais",
            category: "Primeiros Passos",
            duration: "10 min",
            format: GuideFormat::Video,
            difficulty: "Iniciante",
            views: 2341,
            rating: 4.8,
        },
        Guide {
            id: 2,
            title: "Personalizando templates de documentos",
            description: "Aprenda a adaptar nossos templates às suas necessidades",
            category: "Modelos e Templates",
            duration: "15 min",
            format: GuideFormat::Tutorial,
            difficulty: "Intermediário",
            views: 1876,
            rating: 4.9,
        },
        Guide {
            id: 3,
            title: "Ferramentas avançadas do Studio",
            description: "Explore recursos avançados para projetos complexos",
            category: "Ferramentas do Studio",
            duration: "25 min",
            format: GuideFormat::Video,
            difficulty: "Avançado",
            views: 1432,
            rating: 4.7,
        },
        Guide {
            id: 4,
            title: "Otimizando seu fluxo de trabalho",
            description: "Dicas para trabalhar de forma mais eficiente",
            category: "Dicas e Truques",
            duration: "8 min",
            format: GuideFormat::Article,
            difficulty: "Intermediário",
            views: 1123,
            rating: 4.6,
        },
    ]
}

pub static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "Como faço para baixar um modelo?",
        answer: "Para baixar um modelo, navegue até a página de Modelos, encontre o template desejado e clique no botão 'Baixar'. Você precisará estar logado em sua conta para fazer o download.",
    },
    FaqEntry {
        question: "Posso personalizar os templates baixados?",
        answer: "Sim! Todos os nossos templates são totalmente personalizáveis. Você pode usar as ferramentas do Studio ou qualquer software compatível para fazer as modificações necessárias.",
    },
    FaqEntry {
        question: "Como acesso as ferramentas do Studio?",
        answer: "Acesse a página do Studio através do menu principal. Lá você encontrará todas as ferramentas disponíveis, incluindo editores de documento, apresentação e design.",
    },
    FaqEntry {
        question: "Existe limite para downloads?",
        answer: "Usuários gratuitos têm limite de 5 downloads por mês. Usuários premium têm downloads ilimitados, além de acesso a templates exclusivos.",
    },
    FaqEntry {
        question: "Como posso contribuir com conteúdo?",
        answer: "Valorizamos contribuições da comunidade! Entre em contato conosco através do botão de contato para saber como você pode compartilhar seus templates e conhecimentos.",
    },
    FaqEntry {
        question: "Os templates são compatíveis com que softwares?",
        answer: "Nossos templates são criados para serem compatíveis com os principais softwares do mercado, incluindo Microsoft Office, Google Workspace, LibreOffice e outros.",
    },
];

/// Channels of the floating contact button: label, icon, link.
pub const CONTACT_OPTIONS: [(&str, &str, &str); 3] = [
    ("Email", "mail", "mailto:info@saberangola.ao"),
    ("Telefone", "phone", "tel:+244900000000"),
    ("WhatsApp", "chat", "https://wa.me/244900000000"),
];

/// Guides whose title, description or category contain `query`, ignoring
/// case. A blank query keeps everything.
pub fn search<'a>(guides: &'a [Guide], query: &str) -> Vec<&'a Guide> {
    let query = query.trim().to_lowercase();
    guides
        .iter()
        .filter(|g| {
            query.is_empty()
                || [g.title, g.description, g.category]
                    .iter()
                    .any(|text| text.to_lowercase().contains(&query))
        })
        .collect()
}

/// FAQ entries whose question or answer contain `query`, ignoring case.
pub fn search_faq(query: &str) -> Vec<(usize, &'static FaqEntry)> {
    let query = query.trim().to_lowercase();
    FAQ.iter()
        .enumerate()
        .filter(|(_, entry)| {
            query.is_empty()
                || entry.question.to_lowercase().contains(&query)
                || entry.answer.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_keeps_all_guides() {
        let guides = popular_guides();
        assert_eq!(search(&guides, "  ").len(), 4);
    }

    #[test]
    fn test_search_matches_category_ignoring_case() {
        let guides = popular_guides();
        let found = search(&guides, "STUDIO");
        assert_eq!(found.iter().map(|g| g.id).collect::<Vec<_>>(), vec![3]);
        assert!(search(&guides, "inexistente").is_empty());
    }

    #[test]
    fn test_faq_search_keeps_original_index() {
        let found = search_faq("downloads");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 3);
        assert_eq!(search_faq("").len(), FAQ.len());
    }

    #[test]
    fn test_action_label_by_format() {
        assert_eq!(GuideFormat::Video.action_label(), "Assistir Guia");
        assert_eq!(GuideFormat::Article.action_label(), "Ler Guia");
        assert_eq!(GuideFormat::Tutorial.label(), "Tutorial");
    }

    #[test]
    fn test_category_guide_totals() {
        assert_eq!(CATEGORIES.iter().map(|c| c.guides).sum::<u32>(), 41);
    }
}
