pub mod error;
pub mod health;
pub mod quotes;

pub use error::AppError;
