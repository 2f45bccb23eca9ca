//! Keyed debouncing
//!
//! A [`DebounceScheduler`] coalesces bursts of requests per key into a single
//! execution that runs `delay` after the last request. Each key has at most
//! one pending task; scheduling again replaces it, so the most recently
//! supplied work is the one that runs.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct PendingTask {
    generation: u64,
    handle: JoinHandle<()>,
}

struct SchedulerState<K> {
    delay: Duration,
    pending: HashMap<K, PendingTask>,
    next_generation: u64,
    disposed: bool,
}

/// Per-key trailing-edge debouncer.
///
/// Work that has already started is never interrupted; only tasks still
/// waiting out their delay are replaced or cancelled.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(feature = "runtime")]
/// # {
/// use std::time::Duration;
///
/// use piiguard_common::time::DebounceScheduler;
///
/// #[tokio::main]
/// async fn main() {
///     let scheduler = DebounceScheduler::new(Duration::from_millis(500));
///     scheduler.schedule("file:///notes.txt", || async { println!("first") });
///     scheduler.schedule("file:///notes.txt", || async { println!("only this runs") });
///     tokio::time::sleep(Duration::from_millis(600)).await;
/// }
/// # }
/// ```
pub struct DebounceScheduler<K> {
    state: Arc<Mutex<SchedulerState<K>>>,
}

impl<K> std::fmt::Debug for DebounceScheduler<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DebounceScheduler")
            .field("delay", &state.delay)
            .field("pending", &state.pending.len())
            .field("disposed", &state.disposed)
            .finish()
    }
}

impl<K> DebounceScheduler<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    /// Scheduler firing tasks `delay` after their last `schedule` call.
    pub fn new(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SchedulerState {
                delay,
                pending: HashMap::new(),
                next_generation: 0,
                disposed: false,
            })),
        }
    }

    /// Delay applied to new schedules.
    pub fn delay(&self) -> Duration {
        self.state.lock().delay
    }

    /// Change the delay used by subsequent `schedule` calls. Tasks already
    /// waiting keep the delay they were scheduled with.
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().delay = delay;
    }

    /// Schedule `run` for `key`, replacing any task still pending for it.
    ///
    /// Returns `false` without scheduling anything if the scheduler has been
    /// disposed or no tokio runtime is available.
    pub fn schedule<F, Fut>(&self, key: K, run: F) -> bool
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            warn!("debounce schedule requested outside a tokio runtime");
            return false;
        };

        let mut state = self.state.lock();
        if state.disposed {
            debug!("debounce schedule ignored after dispose");
            return false;
        }

        let generation = state.next_generation;
        state.next_generation = state.next_generation.wrapping_add(1);

        let delay = state.delay;
        let shared = Arc::clone(&self.state);
        let task_key = key.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            {
                let mut state = shared.lock();
                match state.pending.get(&task_key) {
                    Some(task) if task.generation == generation => {
                        state.pending.remove(&task_key);
                    }
                    // Superseded or cancelled between wake-up and lock.
                    _ => return,
                }
            }

            run().await;
        });

        if let Some(previous) = state.pending.insert(key, PendingTask { generation, handle }) {
            previous.handle.abort();
        }
        true
    }

    /// Cancel the pending task for `key`. Returns whether one was pending.
    pub fn cancel(&self, key: &K) -> bool {
        match self.state.lock().pending.remove(key) {
            Some(task) => {
                task.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Whether a task for `key` is waiting to fire.
    pub fn is_pending(&self, key: &K) -> bool {
        self.state.lock().pending.contains_key(key)
    }

    /// Number of tasks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Cancel every pending task. The scheduler stays usable. Returns how
    /// many tasks were cancelled.
    pub fn cancel_all(&self) -> usize {
        self.drain(false)
    }

    /// Cancel everything pending and refuse further scheduling. Idempotent.
    pub fn dispose(&self) {
        let cancelled = self.drain(true);
        if cancelled > 0 {
            debug!(cancelled, "debounce scheduler disposed");
        }
    }

    fn drain(&self, dispose: bool) -> usize {
        let drained: Vec<PendingTask> = {
            let mut state = self.state.lock();
            state.disposed |= dispose;
            state.pending.drain().map(|(_, task)| task).collect()
        };

        let cancelled = drained.len();
        for task in drained {
            task.handle.abort();
        }
        cancelled
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl<K> Drop for DebounceScheduler<K> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.disposed = true;
        for (_, task) in state.pending.drain() {
            task.handle.abort();
        }
    }
}
