use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    Feature,
    Bugfix,
    Content,
    Improvement,
}

impl ReleaseKind {
    pub fn label(self) -> &'static str {
        match self {
            ReleaseKind::Feature => "Nova Funcionalidade",
            ReleaseKind::Bugfix => "Correção",
            ReleaseKind::Content => "Conteúdo",
            ReleaseKind::Improvement => "Melhoria",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseStatus {
    Released,
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseNote {
    pub id: u32,
    pub version: String,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`; sorts lexically.
    pub date: String,
    pub kind: ReleaseKind,
    /// `major` or `minor`.
    pub priority: String,
    pub description: String,
    pub changes: Vec<String>,
    pub status: ReleaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    InDevelopment,
    Planned,
    Research,
}

impl RoadmapStatus {
    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::InDevelopment => "Em desenvolvimento",
            RoadmapStatus::Planned => "Planeado",
            RoadmapStatus::Research => "Pesquisa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapQuarter {
    pub quarter: String,
    pub items: Vec<RoadmapItem>,
}
