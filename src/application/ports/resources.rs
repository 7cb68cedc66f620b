//! Application resource port interface

use thiserror::Error;

use crate::domain::notification::Intent;
use crate::domain::{Color, ResourceId, ResourceKind};

/// Scheme of the URIs the platform uses for packaged raw resources
pub const RESOURCE_URI_SCHEME: &str = "android.resource";

/// Resource and metadata lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Metadata '{key}' references unknown resource '{reference}'")]
    UnknownReference { key: String, reference: String },

    #[error("Metadata '{key}' is not a resource reference: {value}")]
    NotAResource { key: String, value: String },
}

/// How the application names itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationLabel {
    /// Label stored as a (possibly localized) string resource
    Resource(ResourceId),
    /// Label given inline, without localization
    Literal(String),
}

/// Port for reading the application's packaged resources and metadata.
///
/// Lookups that find nothing return `None`; only failures of the lookup
/// itself are errors.
pub trait ResourceResolver: Send + Sync {
    /// Package name of the application
    fn package_name(&self) -> &str;

    /// Find a resource by name within a category
    fn identifier(&self, name: &str, kind: ResourceKind) -> Option<ResourceId>;

    /// Raw value of a string resource
    fn string(&self, id: ResourceId) -> Option<String>;

    /// Value of a color resource
    fn color(&self, id: ResourceId) -> Option<Color>;

    /// The application's label
    fn application_label(&self) -> ApplicationLabel;

    /// The application's own icon
    fn application_icon(&self) -> ResourceId;

    /// Resource referenced by a package metadata entry.
    ///
    /// # Returns
    /// `Ok(None)` when the entry is not set, `Err` when the package metadata
    /// could not be read or the entry does not reference a resource
    fn metadata_resource(&self, key: &str) -> Result<Option<ResourceId>, ResourceError>;

    /// Intent that launches the application, if it has a launcher entry
    fn launch_intent(&self) -> Option<Intent>;

    /// URI addressing a raw resource
    fn resource_uri(&self, id: ResourceId) -> String {
        format!("{}://{}/{}", RESOURCE_URI_SCHEME, self.package_name(), id)
    }
}
