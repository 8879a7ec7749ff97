//! Implements a struct that holds the state of the REST server.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// The state of the REST server.
///
/// Generic over the transaction store so that route handlers can be exercised
/// against test doubles.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The store holding the transaction dataset.
    pub store: S,
    seed_complete: Arc<AtomicBool>,
}

impl<S> AppState<S> {
    /// Create a new [AppState] wrapping `store`.
    ///
    /// The seed-complete flag starts out unset; the server accepts requests
    /// regardless, so requests arriving before seeding finishes may observe
    /// an empty or partially loaded dataset.
    pub fn new(store: S) -> Self {
        Self {
            store,
            seed_complete: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Record that the seed dataset has been loaded into the store.
    pub fn mark_seeded(&self) {
        self.seed_complete.store(true, Ordering::Release);
    }

    /// Whether the seed dataset has finished loading.
    pub fn is_seeded(&self) -> bool {
        self.seed_complete.load(Ordering::Acquire)
    }
}
