//! Remote message to notification mapping
//!
//! Resolves every notification field the way the push platform does when it
//! renders a message itself while the app is in the background. Each field
//! is an ordered fallback chain; the first source that yields a non-empty
//! value wins.

use crate::domain::localization::format_template;
use crate::domain::notification::{
    EXTRA_COLLAPSE_KEY, EXTRA_FROM, EXTRA_MESSAGE_ID, EXTRA_SENT_TIME,
};
use crate::domain::{
    Color, InboundMessage, Intent, InvalidArgumentError, MessageNotification,
    NotificationBuilder, NotificationDescriptor, NotificationSound, PendingIntent, ResourceId,
    ResourceKind,
};

use super::ports::{ApplicationLabel, ResourceResolver};

/// Metadata entry naming the app's default notification icon
pub const DEFAULT_ICON_METADATA: &str = "com.google.firebase.messaging.default_notification_icon";

/// Metadata entry naming the app's default notification color
pub const DEFAULT_COLOR_METADATA: &str = "com.google.firebase.messaging.default_notification_color";

/// Sound name that requests the platform's default sound
pub const DEFAULT_SOUND: &str = "default";

/// Maps remote messages onto notification descriptors
pub struct RemoteMessageMapper<R: ResourceResolver> {
    resources: R,
}

impl<R: ResourceResolver> RemoteMessageMapper<R> {
    /// Create a mapper reading from the given application resources
    pub fn new(resources: R) -> Self {
        Self { resources }
    }

    /// The resources this mapper resolves against
    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Map a remote message into a notification, mimicking the default
    /// format and behavior applied when the app is in background.
    ///
    /// # Errors
    /// `InvalidArgumentError` if the message carries no notification
    pub fn map(&self, message: &InboundMessage) -> Result<NotificationDescriptor, InvalidArgumentError> {
        Ok(self.map_to_builder(message)?.build())
    }

    /// Same as [`map`](Self::map), but returns the configured builder so the
    /// caller can adjust the notification before building it.
    pub fn map_to_builder(
        &self,
        message: &InboundMessage,
    ) -> Result<NotificationBuilder, InvalidArgumentError> {
        let notification = message.require_notification()?;

        let builder = NotificationBuilder::new(
            self.resolve_title(notification),
            self.resolve_icon(notification),
            self.content_intent(message, notification),
        )
        .body(self.resolve_body(notification))
        .color(self.resolve_color(notification))
        .sound(self.resolve_sound(notification))
        .auto_cancel(true);

        Ok(builder)
    }

    fn resolve_title(&self, notification: &MessageNotification) -> String {
        non_empty(notification.title.as_deref())
            .or_else(|| {
                self.localized(
                    notification.title_loc_key.as_deref(),
                    notification.title_loc_args.as_deref(),
                )
            })
            .unwrap_or_else(|| self.application_name())
    }

    fn resolve_body(&self, notification: &MessageNotification) -> Option<String> {
        non_empty(notification.body.as_deref()).or_else(|| {
            self.localized(
                notification.body_loc_key.as_deref(),
                notification.body_loc_args.as_deref(),
            )
        })
    }

    fn resolve_icon(&self, notification: &MessageNotification) -> ResourceId {
        notification
            .icon
            .as_deref()
            .and_then(|name| self.resources.identifier(name, ResourceKind::Drawable))
            .or_else(|| self.metadata_resource(DEFAULT_ICON_METADATA))
            .unwrap_or_else(|| self.resources.application_icon())
    }

    fn resolve_color(&self, notification: &MessageNotification) -> Option<Color> {
        // No tint unless the message asks for one
        let literal = notification.color.as_deref()?;

        literal
            .parse::<Color>()
            .map_err(|e| log::debug!("Falling back to default color: {}", e))
            .ok()
            .or_else(|| {
                self.metadata_resource(DEFAULT_COLOR_METADATA)
                    .and_then(|id| self.resources.color(id))
            })
    }

    fn resolve_sound(&self, notification: &MessageNotification) -> Option<NotificationSound> {
        let requested = notification.sound.as_deref()?;

        let sound = Some(requested)
            .filter(|name| *name != DEFAULT_SOUND)
            .and_then(|name| self.resources.identifier(name, ResourceKind::Raw))
            .map(|id| NotificationSound::Uri(self.resources.resource_uri(id)))
            .unwrap_or(NotificationSound::Default);

        Some(sound)
    }

    fn content_intent(
        &self,
        message: &InboundMessage,
        notification: &MessageNotification,
    ) -> PendingIntent {
        let mut intent = non_empty(notification.click_action.as_deref())
            .map(Intent::with_action)
            .or_else(|| self.resources.launch_intent())
            .unwrap_or_else(|| Intent::for_package(self.resources.package_name()));

        for (key, value) in &message.data {
            intent.put_extra(key.as_str(), value.as_str());
        }
        intent
            .put_extra(EXTRA_SENT_TIME, message.sent_time.to_string())
            .put_optional_extra(EXTRA_FROM, message.from.as_deref())
            .put_optional_extra(EXTRA_MESSAGE_ID, message.message_id.as_deref())
            .put_optional_extra(EXTRA_COLLAPSE_KEY, message.collapse_key.as_deref());

        PendingIntent::one_shot(message.id_hash(), intent)
    }

    /// String resource named by a localization key, formatted with its args
    fn localized(&self, key: Option<&str>, args: Option<&[String]>) -> Option<String> {
        let key = key?;
        let Some(id) = self.resources.identifier(key, ResourceKind::String) else {
            log::debug!("No string resource named '{}'", key);
            return None;
        };
        let template = self.resources.string(id)?;

        let text = match args {
            Some(args) => match format_template(&template, args) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Cannot format string resource '{}': {}", key, e);
                    return None;
                }
            },
            None => template,
        };

        Some(text).filter(|text| !text.is_empty())
    }

    fn application_name(&self) -> String {
        match self.resources.application_label() {
            ApplicationLabel::Resource(id) => self.resources.string(id).unwrap_or_default(),
            ApplicationLabel::Literal(label) => label,
        }
    }

    /// Metadata lookup where a failed lookup counts as "not configured"
    fn metadata_resource(&self, key: &str) -> Option<ResourceId> {
        match self.resources.metadata_resource(key) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Ignoring metadata '{}': {}", key, e);
                None
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
