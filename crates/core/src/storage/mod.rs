//! Storage abstraction for quotes.
//!
//! Defines the repository trait that storage backends implement, the error
//! type they surface, and a pure mapping from those errors to HTTP status
//! codes. Concrete backends live in the server crate and are selected at
//! compile time via feature flags.

mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::QuoteRepository;
