//! # Document generation jobs
//!
//! The generation of a document is a mock job: it never leaves the browser.
//! Starting it validates the form, checks the premium entitlement, then walks
//! three fixed steps, each after a fixed delay:
//!
//! | step | state        | progress |
//! |------|--------------|----------|
//! | 0    | `Queued`     | 33       |
//! | 1    | `Processing` | 66       |
//! | 2    | `Completed`  | 99       |
//!
//! - [`GenerationTracker`] owns the state a view renders and rejects any
//!   update that would skip a state, go backwards, or lower the progress.
//! - [`pipeline`] drives the steps on an injected [`pipeline::Delay`].
//! - [`task`] wraps the run so the owning view can cancel it on teardown.

pub mod pipeline;
pub mod task;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entitlement::Entitlement;
use crate::form::{FormState, ValidationErrors};
use crate::model::field::TemplateSchema;

/// Notice shown when a free user tries to generate a document.
pub const PREMIUM_NOTICE: &str =
    "O Studio é um recurso premium. Assine o plano ou pague avulso para gerar seu documento.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    #[default]
    Idle,
    Queued,
    Processing,
    Completed,
    Error,
}

impl GenerationState {
    pub fn is_running(self) -> bool {
        matches!(self, GenerationState::Queued | GenerationState::Processing)
    }

    /// State that must directly precede `self` inside a run.
    fn predecessor(self) -> Option<GenerationState> {
        match self {
            GenerationState::Processing => Some(GenerationState::Queued),
            GenerationState::Completed => Some(GenerationState::Processing),
            _ => None,
        }
    }

    /// Status line under the progress bar.
    pub fn status_label(self) -> &'static str {
        match self {
            GenerationState::Idle => "",
            GenerationState::Queued => "Na fila de processamento...",
            GenerationState::Processing => "Gerando documento...",
            GenerationState::Completed => "Documento gerado!",
            GenerationState::Error => "Falha na geração do documento.",
        }
    }
}

/// How step indices map to a progress percentage.
///
/// `Stepwise` keeps the historical `(step + 1) * 33`, which finishes at 99.
/// Whether the bar should end at 100 is a product decision; until it is made
/// the default stays `Stepwise` and `CompleteAtHundred` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressPolicy {
    #[default]
    Stepwise,
    CompleteAtHundred,
}

impl ProgressPolicy {
    pub fn progress(self, step_index: usize, total_steps: usize) -> u8 {
        let total = total_steps.max(1);
        let stepwise = ((step_index + 1) * (100 / total)).min(100) as u8;
        match self {
            ProgressPolicy::Stepwise => stepwise,
            ProgressPolicy::CompleteAtHundred if step_index + 1 >= total => 100,
            ProgressPolicy::CompleteAtHundred => stepwise,
        }
    }
}

/// States a run visits after `Idle`, in order.
pub const GENERATION_STEPS: [GenerationState; 3] = [
    GenerationState::Queued,
    GenerationState::Processing,
    GenerationState::Completed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationUpdate {
    pub state: GenerationState,
    pub progress: u8,
}

/// Updates a full run emits, one per step.
pub fn plan(policy: ProgressPolicy) -> Vec<GenerationUpdate> {
    GENERATION_STEPS
        .iter()
        .enumerate()
        .map(|(i, state)| GenerationUpdate {
            state: *state,
            progress: policy.progress(i, GENERATION_STEPS.len()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("O formulário tem {} campo(s) obrigatório(s) por preencher", .0.len())]
    Invalid(ValidationErrors),
    #[error("{}", PREMIUM_NOTICE)]
    PremiumRequired,
    #[error("A geração do documento já está em curso")]
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("invalid generation transition {from:?} -> {to:?}")]
    Invalid {
        from: GenerationState,
        to: GenerationState,
    },
    #[error("generation progress cannot go back from {from} to {to}")]
    ProgressRegression { from: u8, to: u8 },
}

/// State of the generation card on the form page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationTracker {
    state: GenerationState,
    progress: u8,
    error: Option<String>,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Validates the form, checks the entitlement and enters `Queued`.
    ///
    /// Validation runs first so field errors show even for free users.
    /// On any error the tracker is left exactly as it was.
    pub fn start(
        &mut self,
        schema: &TemplateSchema,
        form: &mut FormState,
        entitlement: Entitlement,
    ) -> Result<(), StartError> {
        if self.is_running() {
            return Err(StartError::AlreadyRunning);
        }
        if !form.validate(schema) {
            return Err(StartError::Invalid(form.errors().clone()));
        }
        if !entitlement.is_premium() {
            info!("generation of {} refused: premium required", schema.template_id);
            return Err(StartError::PremiumRequired);
        }

        info!("generation of {} queued", schema.template_id);
        self.state = GenerationState::Queued;
        self.progress = 0;
        self.error = None;
        Ok(())
    }

    /// Applies one pipeline update.
    pub fn apply(&mut self, update: GenerationUpdate) -> Result<(), TransitionError> {
        let allowed = if update.state == self.state {
            self.state.is_running()
        } else {
            update.state.predecessor() == Some(self.state)
        };
        if !allowed {
            warn!("rejected generation update {:?} in {:?}", update, self.state);
            return Err(TransitionError::Invalid {
                from: self.state,
                to: update.state,
            });
        }
        if update.progress < self.progress {
            warn!("rejected generation progress {} after {}", update.progress, self.progress);
            return Err(TransitionError::ProgressRegression {
                from: self.progress,
                to: update.progress,
            });
        }

        self.state = update.state;
        self.progress = update.progress;
        Ok(())
    }

    /// Moves a running job to `Error`, e.g. after a user cancel.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        if !self.is_running() {
            return Err(TransitionError::Invalid {
                from: self.state,
                to: GenerationState::Error,
            });
        }
        self.state = GenerationState::Error;
        self.error = Some(message.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn filled_form(schema: &TemplateSchema) -> FormState {
        let mut form = FormState::new(schema);
        for field in &schema.fields {
            form.set_field(&field.id, "preenchido");
        }
        form
    }

    #[test]
    fn test_plan_visits_states_in_order() {
        let updates = plan(ProgressPolicy::Stepwise);
        let states: Vec<_> = updates.iter().map(|u| u.state).collect();
        assert_eq!(states, GENERATION_STEPS.to_vec());
        let progress: Vec<u8> = updates.iter().map(|u| u.progress).collect();
        assert_eq!(progress, vec![33, 66, 99]);
    }

    #[test]
    fn test_complete_at_hundred_policy() {
        let progress: Vec<u8> = plan(ProgressPolicy::CompleteAtHundred)
            .iter()
            .map(|u| u.progress)
            .collect();
        assert_eq!(progress, vec![33, 66, 100]);
    }

    #[test]
    fn test_start_with_invalid_form_stays_idle() {
        let schema = Catalog::builtin().resolve_schema("1").unwrap();
        let mut form = FormState::new(schema);
        let mut tracker = GenerationTracker::new();

        let err = tracker
            .start(schema, &mut form, Entitlement::Premium)
            .unwrap_err();
        assert!(matches!(err, StartError::Invalid(ref e) if e.len() == 11));
        assert_eq!(tracker.state(), GenerationState::Idle);
        assert!(form.error("titulo").is_some());
    }

    #[test]
    fn test_start_without_premium_is_refused() {
        let schema = Catalog::builtin().resolve_schema("1").unwrap();
        let mut form = filled_form(schema);
        let mut tracker = GenerationTracker::new();

        let err = tracker.start(schema, &mut form, Entitlement::Free).unwrap_err();
        assert_eq!(err, StartError::PremiumRequired);
        assert_eq!(err.to_string(), PREMIUM_NOTICE);
        assert_eq!(tracker, GenerationTracker::new());
    }

    #[test]
    fn test_full_run_reaches_completed() {
        let schema = Catalog::builtin().resolve_schema("3").unwrap();
        let mut form = filled_form(schema);
        let mut tracker = GenerationTracker::new();
        tracker.start(schema, &mut form, Entitlement::Premium).unwrap();
        assert_eq!(tracker.state(), GenerationState::Queued);
        assert_eq!(tracker.progress(), 0);

        for update in plan(ProgressPolicy::Stepwise) {
            tracker.apply(update).unwrap();
        }
        assert_eq!(tracker.state(), GenerationState::Completed);
        assert_eq!(tracker.progress(), 99);
        assert!(!tracker.is_running());
    }

    #[test]
    fn test_skipping_a_state_is_rejected() {
        let mut tracker = GenerationTracker {
            state: GenerationState::Queued,
            progress: 33,
            error: None,
        };
        let err = tracker
            .apply(GenerationUpdate {
                state: GenerationState::Completed,
                progress: 99,
            })
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::Invalid {
                from: GenerationState::Queued,
                to: GenerationState::Completed,
            }
        );
        assert_eq!(tracker.state(), GenerationState::Queued);
    }

    #[test]
    fn test_backward_transition_and_regression_are_rejected() {
        let mut tracker = GenerationTracker {
            state: GenerationState::Processing,
            progress: 66,
            error: None,
        };
        assert!(tracker
            .apply(GenerationUpdate {
                state: GenerationState::Queued,
                progress: 70,
            })
            .is_err());
        assert_eq!(
            tracker.apply(GenerationUpdate {
                state: GenerationState::Processing,
                progress: 50,
            }),
            Err(TransitionError::ProgressRegression { from: 66, to: 50 })
        );
        assert_eq!(tracker.progress(), 66);
    }

    #[test]
    fn test_idle_does_not_accept_updates() {
        let mut tracker = GenerationTracker::new();
        assert!(tracker
            .apply(GenerationUpdate {
                state: GenerationState::Idle,
                progress: 0,
            })
            .is_err());
        assert!(tracker
            .apply(GenerationUpdate {
                state: GenerationState::Processing,
                progress: 66,
            })
            .is_err());
    }

    #[test]
    fn test_cannot_start_twice_and_can_restart_after_completion() {
        let schema = Catalog::builtin().resolve_schema("3").unwrap();
        let mut form = filled_form(schema);
        let mut tracker = GenerationTracker::new();
        tracker.start(schema, &mut form, Entitlement::Premium).unwrap();
        assert_eq!(
            tracker.start(schema, &mut form, Entitlement::Premium),
            Err(StartError::AlreadyRunning)
        );

        for update in plan(ProgressPolicy::Stepwise) {
            tracker.apply(update).unwrap();
        }
        tracker.start(schema, &mut form, Entitlement::Premium).unwrap();
        assert_eq!(tracker.state(), GenerationState::Queued);
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn test_fail_only_while_running() {
        let mut tracker = GenerationTracker::new();
        assert!(tracker.fail("cancelado").is_err());

        tracker.state = GenerationState::Processing;
        tracker.fail("Geração cancelada").unwrap();
        assert_eq!(tracker.state(), GenerationState::Error);
        assert_eq!(tracker.error_message(), Some("Geração cancelada"));
    }
}
