//! Application resource adapters

mod manifest;

pub use manifest::ManifestResources;
