//! MySQL storage backend implementation.
//!
//! Implements `quotes_core::storage::QuoteRepository` over a `sqlx`
//! connection pool. The database and the quotes table are created on
//! startup if absent; both statements use `IF NOT EXISTS`, so startup is
//! safe to repeat.

mod error;
mod repository;
mod schema;

pub use repository::MySqlRepository;
