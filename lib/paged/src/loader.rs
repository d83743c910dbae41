use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Ref-counted busy flag for overlapping fetches.
///
/// The count moves with guards, so the flag stays raised until the last
/// in-flight operation settles, however it settles.
#[derive(Clone, Default)]
pub struct Loader {
    in_flight: Arc<AtomicUsize>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Raises the flag immediately and holds it until the returned guard
    /// drops.
    pub fn begin(&self) -> LoadGuard {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        LoadGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Tracks a fetch for its full lifetime. The flag raises when this is
    /// called, not when the returned future is first polled, and releases
    /// when the future completes or is dropped.
    pub fn load_from<F: Future>(&self, fut: F) -> impl Future<Output = F::Output> {
        let guard = self.begin();
        async move {
            let _guard = guard;
            fut.await
        }
    }
}

pub struct LoadGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}
