//! "Run once after delay": rapid calls collapse into one delayed call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::Result;

/// Hook run synchronously at the start of every call.
pub type BeforeHook = Box<dyn Fn() + Send + Sync>;

/// Debounced wrapper around `f`. At most one run is pending at a time and
/// each new call replaces it.
pub struct AsyncOnce<A> {
    f: Arc<dyn Fn(A) + Send + Sync>,
    before: Option<BeforeHook>,
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Build a debounced `f` on the current tokio runtime.
pub fn async_once<A, F>(f: F, delay: Duration, before: Option<BeforeHook>) -> Result<AsyncOnce<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let runtime = Handle::try_current()?;
    Ok(AsyncOnce::with_runtime(f, delay, before, runtime))
}

impl<A> AsyncOnce<A>
where
    A: Send + 'static,
{
    pub fn with_runtime<F>(f: F, delay: Duration, before: Option<BeforeHook>, runtime: Handle) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            before,
            delay,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Run `before`, cancel any pending run, and schedule `f(args)` after the delay.
    pub fn call(&self, args: A) {
        if let Some(before) = &self.before {
            before();
        }

        let mut pending = self.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!("superseded pending delayed call");
        }

        let f = Arc::clone(&self.f);
        let delay = self.delay;
        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            f(args);
        }));
        trace!(delay_ms = delay.as_millis() as u64, "scheduled delayed call");
    }

    /// Whether a scheduled run has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::time::{sleep, Instant};

    use super::*;
    use crate::error::HelperError;

    type Fired = Arc<Mutex<Vec<(u32, Instant)>>>;

    fn recorder() -> (Fired, impl Fn(u32) + Send + Sync + 'static) {
        let fired: Fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        (fired, move |n| sink.lock().unwrap().push((n, Instant::now())))
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_calls_run_once_with_last_arguments() {
        let (fired, f) = recorder();
        let before_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&before_calls);
        let hook: BeforeHook = Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let debounced = async_once(f, Duration::from_millis(50), Some(hook)).unwrap();
        for n in 1..=5 {
            debounced.call(n);
            sleep(Duration::from_millis(2)).await;
        }
        let last_call = Instant::now() - Duration::from_millis(2);
        assert!(debounced.is_pending());

        sleep(Duration::from_millis(100)).await;

        let fired = fired.lock().unwrap();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, 5);
        let waited = fired[0].1.duration_since(last_call);
        assert!(waited >= Duration::from_millis(50), "fired after {waited:?}");
        assert!(waited < Duration::from_millis(60), "fired after {waited:?}");
        assert_eq!(before_calls.load(Ordering::SeqCst), 5);
        assert!(!debounced.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn calls_spaced_beyond_delay_each_run() {
        let (fired, f) = recorder();
        let debounced = async_once(f, Duration::from_millis(20), None).unwrap();

        debounced.call(1);
        sleep(Duration::from_millis(30)).await;
        debounced.call(2);
        sleep(Duration::from_millis(30)).await;

        let seen: Vec<u32> = fired.lock().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(seen, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn instances_do_not_cancel_each_other() {
        let (fired, f) = recorder();
        let shared = Arc::new(f);
        let first = Arc::clone(&shared);
        let second = Arc::clone(&shared);
        let a = async_once(move |n: u32| (*first)(n), Duration::from_millis(10), None).unwrap();
        let b = async_once(move |n: u32| (*second)(n), Duration::from_millis(10), None).unwrap();

        a.call(1);
        b.call(2);
        sleep(Duration::from_millis(20)).await;

        let mut seen: Vec<u32> = fired.lock().unwrap().iter().map(|(n, _)| *n).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn requires_a_runtime() {
        let result = async_once(|_: u32| {}, Duration::from_millis(1), None);
        assert!(matches!(result, Err(HelperError::NoRuntime(_))));
    }
}
