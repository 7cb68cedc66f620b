//! Notification descriptor and builder

mod intent;

pub use intent::{
    Intent, PendingIntent, EXTRA_COLLAPSE_KEY, EXTRA_FROM, EXTRA_MESSAGE_ID, EXTRA_SENT_TIME,
};

use serde::Serialize;

use super::color::Color;
use super::resource::ResourceId;

/// Sound played when the notification is posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSound {
    /// The platform's default notification sound
    Default,
    /// A specific sound resource
    Uri(String),
}

/// Everything the OS notification service needs to show one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationDescriptor {
    pub title: String,
    pub body: Option<String>,
    pub small_icon: ResourceId,
    pub color: Option<Color>,
    pub sound: Option<NotificationSound>,
    pub auto_cancel: bool,
    pub content_intent: PendingIntent,
}

/// Builder for [`NotificationDescriptor`].
///
/// Returned by the mapper before building so callers can adjust the
/// resolved notification.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    title: String,
    body: Option<String>,
    small_icon: ResourceId,
    color: Option<Color>,
    sound: Option<NotificationSound>,
    auto_cancel: bool,
    content_intent: PendingIntent,
}

impl NotificationBuilder {
    /// Start a builder with the fields every notification needs
    pub fn new(title: impl Into<String>, small_icon: ResourceId, content_intent: PendingIntent) -> Self {
        Self {
            title: title.into(),
            body: None,
            small_icon,
            color: None,
            sound: None,
            auto_cancel: false,
            content_intent,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn small_icon(mut self, icon: ResourceId) -> Self {
        self.small_icon = icon;
        self
    }

    pub fn color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    pub fn sound(mut self, sound: Option<NotificationSound>) -> Self {
        self.sound = sound;
        self
    }

    /// Dismiss the notification when the user taps it
    pub fn auto_cancel(mut self, auto_cancel: bool) -> Self {
        self.auto_cancel = auto_cancel;
        self
    }

    pub fn content_intent(mut self, intent: PendingIntent) -> Self {
        self.content_intent = intent;
        self
    }

    pub fn build(self) -> NotificationDescriptor {
        NotificationDescriptor {
            title: self.title,
            body: self.body,
            small_icon: self.small_icon,
            color: self.color,
            sound: self.sound,
            auto_cancel: self.auto_cancel,
            content_intent: self.content_intent,
        }
    }
}
