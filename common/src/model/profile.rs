use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_downloads: u32,
    pub projects_created: u32,
    pub templates_used: u32,
    pub study_hours: u32,
    pub level: String,
    pub points: u32,
    pub next_level_points: u32,
}

impl UserStats {
    /// Percentage towards the next level, clamped to 0..=100.
    pub fn level_progress(&self) -> u8 {
        if self.next_level_points == 0 {
            return 100;
        }
        let pct = u64::from(self.points) * 100 / u64::from(self.next_level_points);
        pct.min(100) as u8
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.next_level_points.saturating_sub(self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Date the achievement was earned; `None` while still locked.
    pub earned_on: Option<String>,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_on.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Download,
    Create,
    Complete,
}

impl ActivityKind {
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Download => "download",
            ActivityKind::Create => "palette",
            ActivityKind::Complete => "emoji_events",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub action: String,
    pub item: String,
    /// Relative time label (`2 horas atrás`).
    pub when: String,
    pub kind: ActivityKind,
}
