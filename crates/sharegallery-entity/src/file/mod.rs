//! File domain entities.

pub mod media;
pub mod model;

pub use media::{is_archive, is_image};
pub use model::FileRecord;
