//! Core domain types for the quotes API.
//!
//! This crate follows the Functional Core pattern: pure data types and pure
//! functions, no I/O. Storage backends implement the repository trait
//! defined in [`storage`].

pub mod quote;
pub mod storage;
