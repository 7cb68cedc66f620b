//! Resource resolver backed by a TOML application manifest
//!
//! Stands in for a packaged application's resources on the desktop:
//!
//! ```toml
//! package = "com.example.app"
//! label = "Example"
//! icon = "ic_launcher"
//! launch_activity = "com.example.app.MainActivity"
//!
//! [drawables]
//! ic_launcher = "icons/launcher.png"
//!
//! [strings]
//! welcome_title = "Welcome, %1$s!"
//!
//! [raw]
//! custom_tone = "sounds/custom_tone.oga"
//!
//! [colors]
//! brand = "#FF3366"
//!
//! [metadata]
//! "com.google.firebase.messaging.default_notification_color" = "@color/brand"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::fs;

use crate::application::ports::{
    ApplicationLabel, ResourceError, ResourceResolver, RESOURCE_URI_SCHEME,
};
use crate::domain::error::ManifestError;
use crate::domain::notification::Intent;
use crate::domain::{Color, ResourceId, ResourceKind};

/// Package id prefix of application resource ids
const APP_PACKAGE_ID: u32 = 0x7f00_0000;

#[derive(Debug, Deserialize)]
struct ManifestFile {
    package: String,
    label: Option<String>,
    label_res: Option<String>,
    icon: String,
    launch_activity: Option<String>,
    #[serde(default)]
    drawables: BTreeMap<String, String>,
    #[serde(default)]
    strings: BTreeMap<String, String>,
    #[serde(default)]
    raw: BTreeMap<String, String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    metadata: BTreeMap<String, MetadataValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MetadataValue {
    Int(i64),
    Text(String),
}

/// Application resources loaded from a manifest file
#[derive(Debug)]
pub struct ManifestResources {
    package: String,
    label: ApplicationLabel,
    icon: ResourceId,
    launch_activity: Option<String>,
    ids: HashMap<(ResourceKind, String), ResourceId>,
    strings: HashMap<ResourceId, String>,
    colors: HashMap<ResourceId, Color>,
    files: HashMap<ResourceId, (ResourceKind, PathBuf)>,
    metadata: BTreeMap<String, MetadataValue>,
}

impl ManifestResources {
    /// Load a manifest; relative file paths resolve against its directory
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ManifestError::ReadError(format!("{}: {}", path.display(), e)))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, base_dir)
    }

    /// Parse manifest TOML content
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ManifestError> {
        let file: ManifestFile =
            toml::from_str(content).map_err(|e| ManifestError::ParseError(e.to_string()))?;

        let mut ids = HashMap::new();
        let mut strings = HashMap::new();
        let mut colors = HashMap::new();
        let mut files = HashMap::new();

        let tables = [
            (ResourceKind::Drawable, &file.drawables),
            (ResourceKind::String, &file.strings),
            (ResourceKind::Raw, &file.raw),
            (ResourceKind::Color, &file.colors),
        ];

        for (kind, table) in tables {
            for (index, (name, value)) in table.iter().enumerate() {
                let id = Self::assign_id(kind, index)?;
                ids.insert((kind, name.clone()), id);

                match kind {
                    ResourceKind::String => {
                        strings.insert(id, value.clone());
                    }
                    ResourceKind::Color => {
                        let color = value.parse::<Color>().map_err(|e| {
                            ManifestError::Invalid(format!("color '{}': {}", name, e))
                        })?;
                        colors.insert(id, color);
                    }
                    ResourceKind::Drawable | ResourceKind::Raw => {
                        files.insert(id, (kind, resolve_path(base_dir, value)));
                    }
                }
            }
        }

        let icon = ids
            .get(&(ResourceKind::Drawable, file.icon.clone()))
            .copied()
            .ok_or_else(|| {
                ManifestError::Invalid(format!("icon '{}' is not a drawable", file.icon))
            })?;

        let label = match (&file.label_res, file.label) {
            (Some(name), _) => ids
                .get(&(ResourceKind::String, name.clone()))
                .copied()
                .map(ApplicationLabel::Resource)
                .ok_or_else(|| {
                    ManifestError::Invalid(format!("label_res '{}' is not a string", name))
                })?,
            (None, Some(label)) => ApplicationLabel::Literal(label),
            (None, None) => {
                return Err(ManifestError::Invalid(
                    "either 'label' or 'label_res' must be set".to_string(),
                ))
            }
        };

        Ok(Self {
            package: file.package,
            label,
            icon,
            launch_activity: file.launch_activity,
            ids,
            strings,
            colors,
            files,
            metadata: file.metadata,
        })
    }

    /// Ids are `0x7fTTNNNN`: type index, then 1-based position in name order
    fn assign_id(kind: ResourceKind, index: usize) -> Result<ResourceId, ManifestError> {
        let type_index = ResourceKind::ALL
            .iter()
            .position(|k| *k == kind)
            .map(|p| p as u32 + 1)
            .unwrap_or_default();

        let entry = u32::try_from(index + 1)
            .ok()
            .filter(|n| *n <= 0xFFFF)
            .ok_or_else(|| ManifestError::Invalid(format!("too many {} resources", kind)))?;

        ResourceId::new(APP_PACKAGE_ID | type_index << 16 | entry)
            .ok_or_else(|| ManifestError::Invalid(format!("invalid {} resource id", kind)))
    }

    /// File backing a drawable or raw resource
    pub fn file_path(&self, id: ResourceId) -> Option<&Path> {
        self.files.get(&id).map(|(_, path)| path.as_path())
    }

    /// Files of all drawable resources, keyed by id
    pub fn icon_paths(&self) -> HashMap<ResourceId, PathBuf> {
        self.files
            .iter()
            .filter(|(_, (kind, _))| *kind == ResourceKind::Drawable)
            .map(|(id, (_, path))| (*id, path.clone()))
            .collect()
    }

    /// Display label, resolved for use as an application name
    pub fn display_name(&self) -> String {
        match &self.label {
            ApplicationLabel::Resource(id) => self.strings.get(id).cloned().unwrap_or_default(),
            ApplicationLabel::Literal(label) => label.clone(),
        }
    }

    fn parse_reference(value: &str) -> Option<(ResourceKind, &str)> {
        let (kind, name) = value.strip_prefix('@')?.split_once('/')?;
        Some((ResourceKind::from_type_name(kind)?, name))
    }
}

fn resolve_path(base_dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

impl ResourceResolver for ManifestResources {
    fn package_name(&self) -> &str {
        &self.package
    }

    fn identifier(&self, name: &str, kind: ResourceKind) -> Option<ResourceId> {
        self.ids.get(&(kind, name.to_string())).copied()
    }

    fn string(&self, id: ResourceId) -> Option<String> {
        self.strings.get(&id).cloned()
    }

    fn color(&self, id: ResourceId) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    fn application_label(&self) -> ApplicationLabel {
        self.label.clone()
    }

    fn application_icon(&self) -> ResourceId {
        self.icon
    }

    fn metadata_resource(&self, key: &str) -> Result<Option<ResourceId>, ResourceError> {
        let not_a_resource = |value: String| ResourceError::NotAResource {
            key: key.to_string(),
            value,
        };

        match self.metadata.get(key) {
            None => Ok(None),
            Some(MetadataValue::Int(raw)) => u32::try_from(*raw)
                .map(ResourceId::new)
                .map_err(|_| not_a_resource(raw.to_string())),
            Some(MetadataValue::Text(value)) => {
                let (kind, name) =
                    Self::parse_reference(value).ok_or_else(|| not_a_resource(value.clone()))?;
                self.identifier(name, kind)
                    .map(Some)
                    .ok_or_else(|| ResourceError::UnknownReference {
                        key: key.to_string(),
                        reference: value.clone(),
                    })
            }
        }
    }

    fn launch_intent(&self) -> Option<Intent> {
        self.launch_activity
            .as_deref()
            .map(|activity| Intent::launcher(self.package.as_str(), activity))
    }

    /// Raw resources with a backing file are addressed by `file://` URI
    fn resource_uri(&self, id: ResourceId) -> String {
        match self.file_path(id) {
            Some(path) => format!("file://{}", path.display()),
            None => format!("{}://{}/{}", RESOURCE_URI_SCHEME, self.package, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r##"
package = "com.example.app"
label = "Example"
icon = "ic_launcher"
launch_activity = "com.example.app.MainActivity"

[drawables]
ic_launcher = "icons/launcher.png"
ic_stat_news = "/usr/share/icons/news.png"

[strings]
app_name = "Example (localized)"
welcome_title = "Welcome, %1$s!"

[raw]
custom_tone = "sounds/custom_tone.oga"

[colors]
brand = "#FF3366"

[metadata]
"com.google.firebase.messaging.default_notification_color" = "@color/brand"
"com.google.firebase.messaging.default_notification_icon" = "@drawable/ic_stat_news"
unset = 0
numeric = 2130771969
broken = "@drawable/missing"
plain = "hello"
negative = -1
"##;

    fn resources() -> ManifestResources {
        ManifestResources::from_toml_str(MANIFEST, Path::new("/opt/app")).unwrap()
    }

    #[test]
    fn ids_follow_kind_and_name_order() {
        let res = resources();
        assert_eq!(
            res.identifier("ic_launcher", ResourceKind::Drawable).map(ResourceId::get),
            Some(0x7f01_0001)
        );
        assert_eq!(
            res.identifier("ic_stat_news", ResourceKind::Drawable).map(ResourceId::get),
            Some(0x7f01_0002)
        );
        assert_eq!(
            res.identifier("welcome_title", ResourceKind::String).map(ResourceId::get),
            Some(0x7f02_0002)
        );
        assert_eq!(
            res.identifier("custom_tone", ResourceKind::Raw).map(ResourceId::get),
            Some(0x7f03_0001)
        );
        assert_eq!(
            res.identifier("brand", ResourceKind::Color).map(ResourceId::get),
            Some(0x7f04_0001)
        );
    }

    #[test]
    fn lookup_is_per_kind() {
        let res = resources();
        assert!(res.identifier("brand", ResourceKind::Drawable).is_none());
        assert!(res.identifier("nope", ResourceKind::String).is_none());
    }

    #[test]
    fn values_resolve_by_id() {
        let res = resources();
        let title = res.identifier("welcome_title", ResourceKind::String).unwrap();
        assert_eq!(res.string(title).as_deref(), Some("Welcome, %1$s!"));

        let brand = res.identifier("brand", ResourceKind::Color).unwrap();
        assert_eq!(res.color(brand), Some(Color::from_rgb(0xFF, 0x33, 0x66)));
    }

    #[test]
    fn application_identity() {
        let res = resources();
        assert_eq!(res.package_name(), "com.example.app");
        assert_eq!(res.application_label(), ApplicationLabel::Literal("Example".to_string()));
        assert_eq!(res.display_name(), "Example");
        assert_eq!(res.application_icon().get(), 0x7f01_0001);
    }

    #[test]
    fn label_res_takes_precedence() {
        let manifest = MANIFEST.replace("label = \"Example\"", "label = \"Example\"\nlabel_res = \"app_name\"");
        let res = ManifestResources::from_toml_str(&manifest, Path::new("/opt/app")).unwrap();
        assert!(matches!(res.application_label(), ApplicationLabel::Resource(_)));
        assert_eq!(res.display_name(), "Example (localized)");
    }

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let res = resources();
        let launcher = res.application_icon();
        assert_eq!(res.file_path(launcher), Some(Path::new("/opt/app/icons/launcher.png")));

        let news = res.identifier("ic_stat_news", ResourceKind::Drawable).unwrap();
        assert_eq!(res.file_path(news), Some(Path::new("/usr/share/icons/news.png")));
        assert_eq!(res.icon_paths().len(), 2);
    }

    #[test]
    fn raw_resource_uri_is_file_uri() {
        let res = resources();
        let tone = res.identifier("custom_tone", ResourceKind::Raw).unwrap();
        assert_eq!(res.resource_uri(tone), "file:///opt/app/sounds/custom_tone.oga");
    }

    #[test]
    fn metadata_references_resolve() {
        let res = resources();
        let brand = res.identifier("brand", ResourceKind::Color).unwrap();
        assert_eq!(
            res.metadata_resource("com.google.firebase.messaging.default_notification_color"),
            Ok(Some(brand))
        );
        assert_eq!(
            res.metadata_resource("numeric").unwrap().map(ResourceId::get),
            Some(2130771969)
        );
    }

    #[test]
    fn metadata_unset_values() {
        let res = resources();
        assert_eq!(res.metadata_resource("absent"), Ok(None));
        assert_eq!(res.metadata_resource("unset"), Ok(None));
    }

    #[test]
    fn metadata_lookup_failures() {
        let res = resources();
        assert!(matches!(
            res.metadata_resource("broken"),
            Err(ResourceError::UnknownReference { .. })
        ));
        assert!(matches!(
            res.metadata_resource("plain"),
            Err(ResourceError::NotAResource { .. })
        ));
        assert!(matches!(
            res.metadata_resource("negative"),
            Err(ResourceError::NotAResource { .. })
        ));
    }

    #[test]
    fn launch_intent_targets_activity() {
        let intent = resources().launch_intent().unwrap();
        assert_eq!(intent.component.as_deref(), Some("com.example.app.MainActivity"));
    }

    #[test]
    fn missing_icon_is_invalid() {
        let manifest = MANIFEST.replace("icon = \"ic_launcher\"", "icon = \"ic_missing\"");
        let err = ManifestResources::from_toml_str(&manifest, Path::new("/")).unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)));
    }

    #[test]
    fn bad_color_is_invalid() {
        let manifest = MANIFEST.replace("brand = \"#FF3366\"", "brand = \"bluish\"");
        let err = ManifestResources::from_toml_str(&manifest, Path::new("/")).unwrap_err();
        assert!(err.to_string().contains("bluish"));
    }

    #[test]
    fn missing_label_is_invalid() {
        let manifest = MANIFEST.replace("label = \"Example\"\n", "");
        assert!(ManifestResources::from_toml_str(&manifest, Path::new("/")).is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = ManifestResources::from_toml_str("package = ", Path::new("/")).unwrap_err();
        assert!(matches!(err, ManifestError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        tokio::fs::write(&path, MANIFEST).await.unwrap();

        let res = ManifestResources::load(&path).await.unwrap();
        let launcher = res.application_icon();
        assert_eq!(res.file_path(launcher), Some(dir.path().join("icons/launcher.png").as_path()));
    }

    #[tokio::test]
    async fn load_missing_file_is_read_error() {
        let err = ManifestResources::load("/nonexistent/app.toml").await.unwrap_err();
        assert!(matches!(err, ManifestError::ReadError(_)));
    }
}
