//! Dashboard data: the profile and recent documents requests, each with its
//! own loading state, plus the static "popular content" list.
//!
//! A failed request stays visible as `Loadable::Failed` until the user hits
//! retry, which puts it back to `Loading` before the request is re-issued.

use crate::entitlement::Entitlement;
use crate::requests::{DocumentSummary, FetchError, UserProfile};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Loadable::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub profile: Loadable<UserProfile>,
    pub documents: Loadable<Vec<DocumentSummary>>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.profile.is_loading() || self.documents.is_loading()
    }

    /// Puts every failed request back to `Loading`; returns whether anything
    /// needs to be fetched again.
    pub fn retry_failed(&mut self) -> (bool, bool) {
        let profile = matches!(self.profile, Loadable::Failed(_));
        let documents = matches!(self.documents, Loadable::Failed(_));
        if profile {
            self.profile = Loadable::Loading;
        }
        if documents {
            self.documents = Loadable::Loading;
        }
        (profile, documents)
    }

    pub fn entitlement(&self) -> Entitlement {
        self.profile
            .loaded()
            .map(UserProfile::entitlement)
            .unwrap_or_default()
    }

    pub fn welcome_title(&self) -> String {
        match self.profile.loaded() {
            Some(profile) if !profile.name.trim().is_empty() => {
                format!("Bem-vindo de volta, {}", profile.name)
            }
            _ => "Bem-vindo de volta".to_string(),
        }
    }
}

/// `YYYY-MM-DD...` → `DD/MM/YYYY`; anything else is returned unchanged.
pub fn display_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2 => format!("{}/{}/{}", d, m, y),
        _ => iso.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopularContent {
    pub title: &'static str,
    pub category: &'static str,
    pub views: &'static str,
    pub rating: f32,
}

pub fn popular_content() -> Vec<PopularContent> {
    vec![
        PopularContent {
            title: "Modelos de Teses e Dissertações",
            category: "Modelos",
            views: "2.3k",
            rating: 4.8,
        },
        PopularContent {
            title: "Guia Completo de APA 7ª Edição",
            category: "Documentos",
            views: "1.8k",
            rating: 4.9,
        },
        PopularContent {
            title: "Templates de Apresentação",
            category: "Studio",
            views: "1.5k",
            rating: 4.7,
        },
        PopularContent {
            title: "Metodologia de Investigação",
            category: "Documentos",
            views: "1.2k",
            rating: 4.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(plan: &str) -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@saber.ao".to_string(),
            plan: plan.to_string(),
            documents_count: 2,
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert_eq!(state.entitlement(), Entitlement::Free);
        assert_eq!(state.welcome_title(), "Bem-vindo de volta");
    }

    #[test]
    fn test_failures_are_kept_until_retry() {
        let mut state = DashboardState {
            profile: Loadable::from_result(Ok(profile("premium"))),
            documents: Loadable::from_result(Err(FetchError::Network("offline".to_string()))),
        };
        assert!(!state.is_loading());
        assert!(state.documents.error().is_some());
        assert_eq!(state.entitlement(), Entitlement::Premium);
        assert_eq!(state.welcome_title(), "Bem-vindo de volta, Ana");

        assert_eq!(state.retry_failed(), (false, true));
        assert!(state.documents.is_loading());
        assert!(state.profile.loaded().is_some());
        assert_eq!(state.retry_failed(), (false, false));
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-20T14:30:00Z"), "20/01/2024");
        assert_eq!(display_date("2024-01-20"), "20/01/2024");
        assert_eq!(display_date("ontem"), "ontem");
    }

    #[test]
    fn test_popular_content() {
        assert_eq!(popular_content().len(), 4);
    }
}
