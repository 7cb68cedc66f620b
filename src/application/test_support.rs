//! In-memory port implementations for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::notification::Intent;
use crate::domain::{Color, NotificationDescriptor, ResourceId, ResourceKind};

use super::ports::{
    ApplicationLabel, NotificationService, NotificationServiceError, ResourceError,
    ResourceResolver,
};

pub const PACKAGE: &str = "com.example.app";
pub const APP_NAME: &str = "Example App";
pub const LAUNCH_ACTIVITY: &str = "com.example.app.MainActivity";

pub fn rid(raw: u32) -> ResourceId {
    ResourceId::new(raw).unwrap()
}

/// Resource table held in memory
pub struct FakeResources {
    next_id: u32,
    names: HashMap<(ResourceKind, String), ResourceId>,
    strings: HashMap<ResourceId, String>,
    colors: HashMap<ResourceId, Color>,
    metadata: HashMap<String, Result<Option<ResourceId>, ResourceError>>,
    pub label: ApplicationLabel,
    pub icon: ResourceId,
    pub launch: Option<Intent>,
}

impl FakeResources {
    pub fn new() -> Self {
        Self {
            next_id: 1000,
            names: HashMap::new(),
            strings: HashMap::new(),
            colors: HashMap::new(),
            metadata: HashMap::new(),
            label: ApplicationLabel::Literal(APP_NAME.to_string()),
            icon: rid(100),
            launch: Some(Intent::launcher(PACKAGE, LAUNCH_ACTIVITY)),
        }
    }

    pub fn add(&mut self, kind: ResourceKind, name: &str) -> ResourceId {
        self.next_id += 1;
        let id = rid(self.next_id);
        self.names.insert((kind, name.to_string()), id);
        id
    }

    pub fn add_string(&mut self, name: &str, value: &str) -> ResourceId {
        let id = self.add(ResourceKind::String, name);
        self.strings.insert(id, value.to_string());
        id
    }

    pub fn add_color(&mut self, name: &str, color: Color) -> ResourceId {
        let id = self.add(ResourceKind::Color, name);
        self.colors.insert(id, color);
        id
    }

    pub fn set_metadata(&mut self, key: &str, value: Result<Option<ResourceId>, ResourceError>) {
        self.metadata.insert(key.to_string(), value);
    }
}

impl ResourceResolver for FakeResources {
    fn package_name(&self) -> &str {
        PACKAGE
    }

    fn identifier(&self, name: &str, kind: ResourceKind) -> Option<ResourceId> {
        self.names.get(&(kind, name.to_string())).copied()
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
        self.metadata.get(key).cloned().unwrap_or(Ok(None))
    }

    fn launch_intent(&self) -> Option<Intent> {
        self.launch.clone()
    }
}

/// One recorded `post` call
#[derive(Debug, Clone)]
pub struct Posted {
    pub tag: Option<String>,
    pub id: i32,
    pub notification: NotificationDescriptor,
}

/// Notification service that records posts, optionally failing them
#[derive(Default)]
pub struct RecordingService {
    pub posted: Mutex<Vec<Posted>>,
    pub fail_with: Option<String>,
}

impl RecordingService {
    pub fn failing(message: &str) -> Self {
        Self {
            posted: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn posts(&self) -> Vec<Posted> {
        self.posted.lock().unwrap().clone()
    }
}

impl NotificationService for RecordingService {
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError> {
        if let Some(message) = &self.fail_with {
            return Err(NotificationServiceError::PostFailed(message.clone()));
        }
        self.posted.lock().unwrap().push(Posted {
            tag: tag.map(str::to_string),
            id,
            notification: notification.clone(),
        });
        Ok(())
    }
}
