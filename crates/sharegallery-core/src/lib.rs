//! # sharegallery-core
//!
//! Core crate for Share Gallery. Contains the configuration schemas and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other Share Gallery crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
