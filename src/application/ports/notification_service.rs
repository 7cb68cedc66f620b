//! Notification service port interface

use thiserror::Error;

use crate::domain::NotificationDescriptor;

/// Notification posting errors
#[derive(Debug, Clone, Error)]
pub enum NotificationServiceError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to post notification: {0}")]
    PostFailed(String),
}

/// Port for the OS notification surface
pub trait NotificationService: Send + Sync {
    /// Post a notification to the system tray.
    ///
    /// # Arguments
    /// * `tag` - Optional grouping key; a post with the same tag and id replaces the previous one
    /// * `id` - Numeric notification id
    /// * `notification` - The notification to show
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError>;
}

/// Blanket implementation for boxed service types
impl NotificationService for Box<dyn NotificationService> {
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError> {
        self.as_ref().post(tag, id, notification)
    }
}
