//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `quotes_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-process storage for tests and development
//! - `mysql`: MySQL storage backend using `sqlx`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! Build with MySQL:
//! ```bash
//! cargo build -p quotesd --no-default-features --features mysql
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "mysql"))]
compile_error!(
    "Features 'inmemory' and 'mysql' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "mysql")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'mysql' feature. \
    Example: cargo build -p quotesd --features inmemory"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "mysql")]
pub mod mysql;
