//! Runs the mock generation steps on an injected timer.

use std::future::Future;
use std::time::Duration;

use log::debug;

use super::task::{Cancelled, TaskHandle, cancellable};
use super::{GenerationUpdate, plan};
use crate::config::WorkflowConfig;

/// Source of the artificial waits.
///
/// The browser sleeps on `setTimeout`; tests sleep on a paused tokio clock.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Emits every step of a run, each after `config.step_delay()`.
pub async fn run_generation<D, F>(delay: &D, config: &WorkflowConfig, mut on_update: F)
where
    D: Delay,
    F: FnMut(GenerationUpdate),
{
    for update in plan(config.progress_policy) {
        delay.sleep(config.step_delay()).await;
        debug!("generation step {:?} at {}%", update.state, update.progress);
        on_update(update);
    }
}

/// A run wrapped as a cancellable task.
///
/// The caller spawns the returned future and keeps the handle for as long as
/// updates may be delivered.
pub fn generation_task<D, F>(
    delay: D,
    config: WorkflowConfig,
    on_update: F,
) -> (impl Future<Output = Result<(), Cancelled>>, TaskHandle)
where
    D: Delay,
    F: FnMut(GenerationUpdate),
{
    cancellable(async move { run_generation(&delay, &config, on_update).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{GenerationState, ProgressPolicy};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::Instant;

    struct TokioDelay;

    impl Delay for TokioDelay {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            tokio::time::sleep(duration)
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<GenerationUpdate>>>, impl FnMut(GenerationUpdate)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |u| sink.borrow_mut().push(u))
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_emits_steps_after_fixed_delays() {
        let (seen, sink) = recorder();
        let started = Instant::now();
        let (task, _handle) = generation_task(TokioDelay, WorkflowConfig::default(), sink);

        assert_eq!(task.await, Ok(()));
        assert!(started.elapsed() >= Duration::from_secs(6));

        let seen = seen.borrow();
        let states: Vec<_> = seen.iter().map(|u| u.state).collect();
        assert_eq!(
            states,
            vec![
                GenerationState::Queued,
                GenerationState::Processing,
                GenerationState::Completed,
            ]
        );
        assert!(seen.windows(2).all(|w| w[0].progress <= w[1].progress));
        assert_eq!(seen.last().map(|u| u.progress), Some(99));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_further_updates() {
        let (seen, sink) = recorder();
        let (task, handle) = generation_task(TokioDelay, WorkflowConfig::default(), sink);
        let teardown = async move {
            tokio::time::sleep(Duration::from_millis(3000)).await;
            drop(handle);
        };

        let (result, ()) = tokio::join!(task, teardown);
        assert_eq!(result, Err(Cancelled));

        // Only the first step (at 2s) was delivered before the teardown at 3s.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].state, GenerationState::Queued);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay_and_policy() {
        let (seen, sink) = recorder();
        let config = WorkflowConfig::default()
            .with_step_delay(Duration::from_millis(10))
            .with_progress_policy(ProgressPolicy::CompleteAtHundred);
        let started = Instant::now();
        run_generation(&TokioDelay, &config, sink).await;
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert_eq!(seen.borrow().last().map(|u| u.progress), Some(100));
    }
}
