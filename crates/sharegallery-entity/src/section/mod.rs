//! Gallery section entities.

pub mod model;

pub use model::{ArchiveGallery, Section};
