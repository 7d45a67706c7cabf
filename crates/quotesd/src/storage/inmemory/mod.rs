//! In-memory storage backend for testing.
//!
//! Stores quotes in a `Vec` wrapped in `Arc<RwLock<_>>`. Useful for testing
//! and development scenarios where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
