use async_trait::async_trait;

use crate::quote::{NewQuote, Quote};

use super::Result;

/// Repository for quote operations.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Lists every stored quote in storage order.
    async fn list_quotes(&self) -> Result<Vec<Quote>>;

    /// Inserts a new quote and returns it with its generated id.
    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote>;
}
