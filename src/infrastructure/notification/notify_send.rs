//! notify-send notification adapter

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::application::ports::{NotificationService, NotificationServiceError};
use crate::domain::{NotificationDescriptor, NotificationSound, ResourceId};

use super::notify_rust::DEFAULT_SOUND_NAME;
use super::{stack_key, STACK_HINTS};

/// notify-send notification adapter
pub struct NotifySendService {
    /// Application name for notifications
    app_name: String,
    icons: HashMap<ResourceId, PathBuf>,
}

impl NotifySendService {
    /// Create a new notify-send service
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            icons: HashMap::new(),
        }
    }

    /// Attach the icon files small icons resolve to
    pub fn with_icons(mut self, icons: HashMap<ResourceId, PathBuf>) -> Self {
        self.icons = icons;
        self
    }

    /// Build the notify-send argument list
    fn args(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Vec<String> {
        let mut args = vec!["--app-name".to_string(), self.app_name.clone()];

        let key = stack_key(tag, id);
        for hint in STACK_HINTS {
            args.push(format!("--hint=string:{}:{}", hint, key));
        }

        if let Some(icon) = self.icons.get(&notification.small_icon) {
            args.push("--icon".to_string());
            args.push(icon.to_string_lossy().into_owned());
        }

        match &notification.sound {
            Some(NotificationSound::Uri(uri)) if uri.starts_with("file://") => {
                let path = uri.trim_start_matches("file://");
                args.push(format!("--hint=string:sound-file:{}", path));
            }
            Some(_) => args.push(format!("--hint=string:sound-name:{}", DEFAULT_SOUND_NAME)),
            None => {}
        }

        if !notification.auto_cancel {
            args.push("--hint=boolean:resident:true".to_string());
        }

        args.push(notification.title.clone());
        if let Some(body) = &notification.body {
            args.push(body.clone());
        }

        args
    }
}

impl NotificationService for NotifySendService {
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError> {
        let status = Command::new("notify-send")
            .args(self.args(tag, id, notification))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationServiceError::NotifySendNotFound
                } else {
                    NotificationServiceError::PostFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationServiceError::PostFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
