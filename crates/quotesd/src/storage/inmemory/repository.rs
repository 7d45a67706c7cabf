//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quotes_core::quote::{NewQuote, Quote};
use quotes_core::storage::{QuoteRepository, Result};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    quotes: Vec<Quote>,
}

/// In-memory storage backend for testing.
///
/// Uses a `Vec` wrapped in `Arc<RwLock<_>>` for thread-safe access. Ids are
/// assigned from a counter starting at 1, mirroring an auto-increment
/// column. Data is not persisted and will be lost when the repository is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryRepository {
    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        let inner = self.inner.read().await;
        Ok(inner.quotes.clone())
    }

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let quote = new_quote.with_id(inner.next_id);
        inner.quotes.push(quote.clone());
        Ok(quote)
    }
}
