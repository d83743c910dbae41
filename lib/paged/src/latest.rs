use std::sync::{Arc, Mutex, MutexGuard};

/// Opaque handle identifying one attempt to replace the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

struct LatestInner<T> {
    generation: u64,
    value: T,
}

/// Last-writer-wins cell for values produced by overlapping async work.
///
/// Each attempt takes a token up front; only the holder of the newest token
/// may publish. A slow fetch that was superseded finds its token stale and
/// its result is discarded.
#[derive(Clone)]
pub struct Latest<T> {
    inner: Arc<Mutex<LatestInner<T>>>,
}

impl<T: Default> Default for Latest<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Latest<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LatestInner {
                generation: 0,
                value: initial,
            })),
        }
    }

    /// Registers a new attempt, invalidating every token handed out before.
    pub fn begin(&self) -> Token {
        let mut inner = self.lock();
        inner.generation += 1;
        Token(inner.generation)
    }

    pub fn is_current(&self, token: Token) -> bool {
        self.lock().generation == token.0
    }

    /// Installs `value` if `token` is still the newest attempt. Returns
    /// whether the value was applied.
    pub fn publish(&self, token: Token, value: T) -> bool {
        let mut inner = self.lock();
        if inner.generation != token.0 {
            return false;
        }
        inner.value = value;
        true
    }

    /// Mutates the value in place without registering a new attempt. Used
    /// for eager resets that should not invalidate the fetch they precede.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.lock().value)
    }

    fn lock(&self) -> MutexGuard<'_, LatestInner<T>> {
        self.inner.lock().expect("poisoned mutex")
    }
}

impl<T: Clone> Latest<T> {
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }
}
