//! Share lookup.

pub mod access;
pub mod manifest;

pub use access::ShareAccess;
pub use manifest::ManifestShareStore;
