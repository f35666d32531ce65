//! Static content of the profile page: stats, achievements and activity.

use crate::model::profile::{Achievement, Activity, ActivityKind, UserStats};

pub fn user_stats() -> UserStats {
    UserStats {
        total_downloads: 127,
        projects_created: 23,
        templates_used: 45,
        study_hours: 89,
        level: "Avançado".to_string(),
        points: 2340,
        next_level_points: 3000,
    }
}

fn achievement(id: u32, title: &str, description: &str, icon: &str, earned_on: Option<&str>) -> Achievement {
    Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        earned_on: earned_on.map(str::to_string),
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "Primeiro Download", "Baixou seu primeiro template", "download", Some("2024-01-15")),
        achievement(2, "Criador Ativo", "Criou 10 projetos no Studio", "palette", Some("2024-02-20")),
        achievement(3, "Estudante Dedicado", "Completou 50 horas de estudo", "menu_book", Some("2024-03-01")),
        achievement(4, "Explorador", "Visitou todas as seções da plataforma", "public", None),
        achievement(5, "Mestre dos Templates", "Usou 100 templates diferentes", "emoji_events", None),
    ]
}

fn activity(id: u32, action: &str, item: &str, when: &str, kind: ActivityKind) -> Activity {
    Activity {
        id,
        action: action.to_string(),
        item: item.to_string(),
        when: when.to_string(),
        kind,
    }
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        activity(1, "Baixou template", "Modelo de Tese de Mestrado", "2 horas atrás", ActivityKind::Download),
        activity(2, "Criou projeto", "Apresentação Corporativa", "1 dia atrás", ActivityKind::Create),
        activity(3, "Completou guia", "Como usar o Studio", "3 dias atrás", ActivityKind::Complete),
        activity(4, "Baixou documento", "Manual de Normas ABNT", "5 dias atrás", ActivityKind::Download),
    ]
}

/// `(earned, total)` for the achievements header.
pub fn achievement_summary(achievements: &[Achievement]) -> (usize, usize) {
    let earned = achievements.iter().filter(|a| a.is_earned()).count();
    (earned, achievements.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_progress() {
        let stats = user_stats();
        assert_eq!(stats.level_progress(), 78);
        assert_eq!(stats.points_to_next_level(), 660);
    }

    #[test]
    fn test_level_progress_is_clamped() {
        let mut stats = user_stats();
        stats.points = 5000;
        assert_eq!(stats.level_progress(), 100);
        assert_eq!(stats.points_to_next_level(), 0);
        stats.next_level_points = 0;
        assert_eq!(stats.level_progress(), 100);
    }

    #[test]
    fn test_achievement_summary() {
        assert_eq!(achievement_summary(&achievements()), (3, 5));
    }
}
