//! Application state with repository-based storage.
//!
//! The shared state handed to every request handler. It carries the quote
//! repository as a trait object so the storage backend can be swapped via
//! feature flags without touching the handlers.

use std::sync::Arc;

use quotes_core::storage::QuoteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for database access.
#[derive(Clone)]
pub struct AppState {
    /// Quote repository backing the API handlers.
    pub quote_repo: Arc<dyn QuoteRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    pub fn new(quote_repo: Arc<dyn QuoteRepository>) -> Self {
        Self { quote_repo }
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(
            crate::storage::inmemory::InMemoryRepository::new(),
        ))
    }
}
