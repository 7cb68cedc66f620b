//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::application::ports::{NotificationService, NotificationServiceError};
use crate::domain::{NotificationDescriptor, NotificationSound, ResourceId};

/// Freedesktop sound theme name for the default notification sound
pub const DEFAULT_SOUND_NAME: &str = "message-new-instant";

/// Cross-platform notification service using notify-rust
pub struct NotifyRustService {
    /// Application name for notifications
    app_name: String,
    /// Icon files by drawable resource id
    icons: HashMap<ResourceId, PathBuf>,
}

impl NotifyRustService {
    /// Create a new notify-rust service
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

    /// Hints that let the server replace an earlier post with the same key
    #[cfg(all(unix, not(target_os = "macos")))]
    fn stack_hints(tag: Option<&str>, id: i32) -> Vec<notify_rust::Hint> {
        let key = super::stack_key(tag, id);
        super::STACK_HINTS
            .iter()
            .map(|hint| notify_rust::Hint::Custom(hint.to_string(), key.clone()))
            .collect()
    }

    fn icon_for(&self, notification: &NotificationDescriptor) -> Option<String> {
        self.icons
            .get(&notification.small_icon)
            .map(|path| path.to_string_lossy().into_owned())
    }
}

impl NotificationService for NotifyRustService {
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError> {
        let mut toast = notify_rust::Notification::new();
        toast.appname(&self.app_name).summary(&notification.title);

        #[cfg(all(unix, not(target_os = "macos")))]
        for hint in Self::stack_hints(tag, id) {
            toast.hint(hint);
        }
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        let _ = (tag, id);

        if let Some(body) = &notification.body {
            toast.body(body);
        }
        if let Some(icon) = self.icon_for(notification) {
            toast.icon(&icon);
        }

        match &notification.sound {
            Some(NotificationSound::Default) => {
                toast.sound_name(DEFAULT_SOUND_NAME);
            }
            #[cfg(all(unix, not(target_os = "macos")))]
            Some(NotificationSound::Uri(uri)) => {
                if let Some(path) = uri.strip_prefix("file://") {
                    toast.hint(notify_rust::Hint::SoundFile(path.to_string()));
                } else {
                    toast.sound_name(DEFAULT_SOUND_NAME);
                }
            }
            #[cfg(not(all(unix, not(target_os = "macos"))))]
            Some(NotificationSound::Uri(_)) => {
                toast.sound_name(DEFAULT_SOUND_NAME);
            }
            None => {}
        }

        toast
            .show()
            .map_err(|e| NotificationServiceError::PostFailed(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Intent, NotificationBuilder, PendingIntent};

    fn rid(raw: u32) -> ResourceId {
        ResourceId::new(raw).unwrap()
    }

    #[test]
    fn service_with_app_name() {
        let service = NotifyRustService::new("TestApp");
        assert_eq!(service.app_name, "TestApp");
        assert!(service.icons.is_empty());
    }

    #[test]
    fn icon_resolves_from_table() {
        let mut icons = HashMap::new();
        icons.insert(rid(7), PathBuf::from("/opt/app/icon.png"));
        let service = NotifyRustService::new("TestApp").with_icons(icons);

        let known = NotificationBuilder::new("t", rid(7), PendingIntent::one_shot(0, Intent::default())).build();
        assert_eq!(service.icon_for(&known).as_deref(), Some("/opt/app/icon.png"));

        let unknown = NotificationBuilder::new("t", rid(8), PendingIntent::one_shot(0, Intent::default())).build();
        assert!(service.icon_for(&unknown).is_none());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn tagged_post_carries_stack_hints() {
        use notify_rust::Hint;

        assert_eq!(
            NotifyRustService::stack_hints(Some("news"), 0),
            vec![
                Hint::Custom("x-dunst-stack-tag".to_string(), "news".to_string()),
                Hint::Custom("x-canonical-private-synchronous".to_string(), "news".to_string()),
            ]
        );
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn untagged_post_stacks_by_id() {
        use notify_rust::Hint;

        let hints = NotifyRustService::stack_hints(None, 96354);
        assert!(hints.contains(&Hint::Custom(
            "x-dunst-stack-tag".to_string(),
            "id:96354".to_string()
        )));
    }
}
