//! Application resource identifiers

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Identifier of an application resource.
///
/// The platform uses 0 as "no such resource", so an id is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(NonZeroU32);

impl ResourceId {
    /// Wrap a raw id, returning `None` for the "not found" value 0
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Get the raw numeric id
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resource categories the notification mapping looks up by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Drawable,
    String,
    Raw,
    Color,
}

impl ResourceKind {
    /// All kinds, in type-index order
    pub const ALL: [ResourceKind; 4] = [Self::Drawable, Self::String, Self::Raw, Self::Color];

    /// Resource type name as used in `@type/name` references
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Drawable => "drawable",
            Self::String => "string",
            Self::Raw => "raw",
            Self::Color => "color",
        }
    }

    /// Parse a resource type name
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
