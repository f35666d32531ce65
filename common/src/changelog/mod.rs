//! Release notes and roadmap shown on the updates page.

use crate::model::release::{
    ReleaseKind, ReleaseNote, ReleaseStatus, RoadmapItem, RoadmapQuarter, RoadmapStatus,
};

fn note(
    id: u32,
    version: &str,
    title: &str,
    date: &str,
    kind: ReleaseKind,
    priority: &str,
    description: &str,
    changes: &[&str],
    status: ReleaseStatus,
) -> ReleaseNote {
    ReleaseNote {
        id,
        version: version.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        kind,
        priority: priority.to_string(),
        description: description.to_string(),
        changes: changes.iter().map(|c| c.to_string()).collect(),
        status,
    }
}

pub fn release_notes() -> Vec<ReleaseNote> {
    vec![
        note(
            1,
            "2.4.0",
            "Novo Editor de Apresentações",
            "2024-03-15",
            ReleaseKind::Feature,
            "major",
            "Lançamos um editor de apresentações completamente renovado com novos recursos de design e colaboração em tempo real.",
            &[
                "Interface redesenhada com foco na usabilidade",
                "Novos templates de apresentação profissionais",
                "Colaboração em tempo real com outros usuários",
                "Exportação em múltiplos formatos (PDF, PPTX, HTML)",
                "Biblioteca expandida de ícones e imagens",
            ],
            ReleaseStatus::Released,
        ),
        note(
            2,
            "2.3.2",
            "Correções de Bugs e Melhorias",
            "2024-03-08",
            ReleaseKind::Bugfix,
            "minor",
            "Correções importantes e melhorias de performance baseadas no feedback dos usuários.",
            &[
                "Corrigido problema de sincronização de projetos",
                "Melhorada velocidade de carregamento de templates",
                "Resolvido erro de exportação em alguns navegadores",
                "Otimizada performance do editor de documentos",
                "Corrigidos problemas de responsividade mobile",
            ],
            ReleaseStatus::Released,
        ),
        note(
            3,
            "2.3.1",
            "Novos Templates Acadêmicos",
            "2024-02-28",
            ReleaseKind::Content,
            "minor",
            "Adicionamos uma nova coleção de templates específicos para trabalhos acadêmicos angolanos.",
            &[
                "15 novos templates para teses e dissertações",
                "Modelos específicos para universidades angolanas",
                "Templates para artigos científicos em português",
                "Guias de formatação ABNT atualizados",
                "Exemplos de referências bibliográficas locais",
            ],
            ReleaseStatus::Released,
        ),
        note(
            4,
            "2.4.1",
            "Melhorias no Studio",
            "2024-03-22",
            ReleaseKind::Improvement,
            "minor",
            "Aprimoramentos nas ferramentas do Studio baseados no feedback da comunidade.",
            &[
                "Nova ferramenta de edição de imagens integrada",
                "Melhorado sistema de versionamento de projetos",
                "Adicionados atalhos de teclado personalizáveis",
                "Interface mais intuitiva para iniciantes",
                "Suporte aprimorado para arquivos grandes",
            ],
            ReleaseStatus::ComingSoon,
        ),
    ]
}

fn item(title: &str, description: &str, status: RoadmapStatus) -> RoadmapItem {
    RoadmapItem {
        title: title.to_string(),
        description: description.to_string(),
        status,
    }
}

pub fn roadmap() -> Vec<RoadmapQuarter> {
    vec![
        RoadmapQuarter {
            quarter: "Q2 2024".to_string(),
            items: vec![
                item(
                    "Editor de Vídeo Integrado",
                    "Ferramenta completa para criação de vídeos educacionais",
                    RoadmapStatus::InDevelopment,
                ),
                item(
                    "Colaboração Avançada",
                    "Comentários, revisões e aprovações em tempo real",
                    RoadmapStatus::Planned,
                ),
                item("App Mobile", "Aplicativo nativo para iOS e Android", RoadmapStatus::Planned),
            ],
        },
        RoadmapQuarter {
            quarter: "Q3 2024".to_string(),
            items: vec![
                item(
                    "IA para Geração de Conteúdo",
                    "Assistente inteligente para criação de textos e designs",
                    RoadmapStatus::Research,
                ),
                item(
                    "Integração com LMS",
                    "Conectividade com principais sistemas de gestão de aprendizagem",
                    RoadmapStatus::Planned,
                ),
            ],
        },
        RoadmapQuarter {
            quarter: "Q4 2024".to_string(),
            items: vec![
                item(
                    "Marketplace de Templates",
                    "Plataforma para compartilhamento de templates da comunidade",
                    RoadmapStatus::Research,
                ),
                item(
                    "Analytics Avançado",
                    "Métricas detalhadas de uso e engajamento",
                    RoadmapStatus::Research,
                ),
            ],
        },
    ]
}

/// Released notes, newest first, optionally narrowed to one kind.
pub fn released(notes: &[ReleaseNote], kind: Option<ReleaseKind>) -> Vec<&ReleaseNote> {
    let mut out: Vec<&ReleaseNote> = notes
        .iter()
        .filter(|n| n.status == ReleaseStatus::Released)
        .filter(|n| kind.is_none_or(|k| n.kind == k))
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

pub fn coming_soon(notes: &[ReleaseNote]) -> Vec<&ReleaseNote> {
    notes
        .iter()
        .filter(|n| n.status == ReleaseStatus::ComingSoon)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_newest_first() {
        let notes = release_notes();
        let versions: Vec<&str> = released(&notes, None)
            .iter()
            .map(|n| n.version.as_str())
            .collect();
        assert_eq!(versions, vec!["2.4.0", "2.3.2", "2.3.1"]);
    }

    #[test]
    fn test_filter_by_kind() {
        let notes = release_notes();
        let bugfixes = released(&notes, Some(ReleaseKind::Bugfix));
        assert_eq!(bugfixes.len(), 1);
        assert_eq!(bugfixes[0].version, "2.3.2");
        assert!(released(&notes, Some(ReleaseKind::Improvement)).is_empty());
    }

    #[test]
    fn test_coming_soon() {
        let notes = release_notes();
        let upcoming = coming_soon(&notes);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Melhorias no Studio");
    }

    #[test]
    fn test_roadmap_quarters() {
        let quarters: Vec<String> = roadmap().into_iter().map(|q| q.quarter).collect();
        assert_eq!(quarters, vec!["Q2 2024", "Q3 2024", "Q4 2024"]);
    }
}
