//! # sharegallery-entity
//!
//! Domain entity models for Share Gallery. Every struct in this crate is a
//! value object handed between the share access layer, the gallery
//! builders and the HTTP layer. All entities derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize`.

pub mod file;
pub mod section;
pub mod share;
