//! Cancellable tasks.
//!
//! Every artificial delay of the workflow runs inside a future wrapped by
//! [`cancellable`]. The view that spawned it keeps the [`TaskHandle`]; when the
//! view is torn down the handle is dropped, the task is aborted, and the
//! wrapped future is never polled again. No callback can reach a view that
//! no longer exists.

use std::future::Future;

use futures_util::future::{AbortHandle, abortable};
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task cancelled")]
pub struct Cancelled;

/// Owner side of a cancellable task. Cancels the task when dropped.
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            debug!("cancelling task");
            self.abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Wraps `future` so it can be cancelled through the returned handle.
///
/// The wrapper resolves to `Err(Cancelled)` once the handle is cancelled or
/// dropped, even if the inner future was about to finish.
pub fn cancellable<F: Future>(
    future: F,
) -> (impl Future<Output = Result<F::Output, Cancelled>>, TaskHandle) {
    let (task, abort) = abortable(future);
    let task = async move { task.await.map_err(|_| Cancelled) };
    (task, TaskHandle { abort })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completes_when_not_cancelled() {
        let (task, _handle) = cancellable(async { 7 });
        assert_eq!(task.await, Ok(7));
    }

    #[tokio::test]
    async fn test_cancel_before_poll() {
        let (task, handle) = cancellable(async { 7 });
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(task.await, Err(Cancelled));
    }

    #[tokio::test]
    async fn test_dropping_handle_cancels() {
        let (task, handle) = cancellable(async { 7 });
        drop(handle);
        assert_eq!(task.await, Err(Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_sleeping() {
        let (task, handle) = cancellable(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            "done"
        });
        let canceller = async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            handle.cancel();
        };
        let (result, ()) = tokio::join!(task, canceller);
        assert_eq!(result, Err(Cancelled));
    }
}
