use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::AbortHandle;

/// Supervised registry of live connection tasks.
///
/// The accept loop spawns connections fire-and-forget and never joins
/// them; the registry keeps an abort handle per live task so callers
/// (tests in particular) can count and terminate connections
/// deterministically. Unbounded by design, like the accept loop itself.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<Mutex<HashMap<u64, AbortHandle>>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a connection task and tracks it until it finishes.
    ///
    /// The map entry is removed by the task itself on completion; holding
    /// the lock across insert keeps an instantly-finishing task from
    /// deregistering before it is registered.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::clone(&self.inner);

        let mut guard = self.inner.lock().unwrap();
        let handle = tokio::spawn(async move {
            fut.await;
            inner.lock().unwrap().remove(&id);
        });
        guard.insert(id, handle.abort_handle());
    }

    /// Number of currently live connection tasks.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aborts every live connection task.
    pub fn abort_all(&self) {
        let mut guard = self.inner.lock().unwrap();
        for (_, handle) in guard.drain() {
            handle.abort();
        }
    }
}
