//! Quiescence timer: run a task only after input has been idle for a window.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Holds at most one pending task. Scheduling a new task aborts the pending
/// one, so only the last call in a burst ever runs.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self { Self::new(DEFAULT_WINDOW) }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self { Self { window, pending: None } }

    pub fn window(&self) -> Duration { self.window }

    /// Schedules `task` to run once `window` has elapsed without another call.
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool { self.pending.as_ref().is_some_and(|h| !h.is_finished()) }
}

impl Drop for Debouncer {
    fn drop(&mut self) { self.cancel(); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> Arc<Mutex<Vec<&'static str>>> { Arc::new(Mutex::new(Vec::new())) }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_in_burst_runs() {
        let hits = recorder();
        let mut debouncer = Debouncer::default();
        for query in ["s", "si", "silk"] {
            let hits = hits.clone();
            debouncer.call(async move { hits.lock().unwrap().push(query) });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(debouncer.is_pending());
        tokio::time::sleep(Duration::from_millis(450)).await;
        assert_eq!(*hits.lock().unwrap(), vec!["silk"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_run() {
        let hits = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        for query in ["a", "b"] {
            let hits = hits.clone();
            debouncer.call(async move { hits.lock().unwrap().push(query) });
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        assert_eq!(*hits.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_task() {
        let hits = recorder();
        let mut debouncer = Debouncer::default();
        let h = hits.clone();
        debouncer.call(async move { h.lock().unwrap().push("x") });
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(hits.lock().unwrap().is_empty());
    }
}
