//! Post remote messages to the system tray

use thiserror::Error;

use crate::domain::{InboundMessage, InvalidArgumentError};

use super::mapper::RemoteMessageMapper;
use super::ports::{NotificationService, NotificationServiceError, ResourceResolver};

/// Errors from notifying a remote message
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error(transparent)]
    Service(#[from] NotificationServiceError),
}

/// Tag and id a message's notification is posted under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTarget {
    pub tag: Option<String>,
    pub id: i32,
}

impl PostTarget {
    /// Untagged messages are keyed by their id hash so they never collide;
    /// tagged ones all use id 0 and are told apart by the tag alone.
    pub fn for_message(message: &InboundMessage) -> Result<Self, InvalidArgumentError> {
        let tag = message.require_notification()?.tag.clone();
        let id = match tag {
            None => message.id_hash(),
            Some(_) => 0,
        };
        Ok(Self { tag, id })
    }
}

/// Fires system tray notifications for remote messages
pub struct RemoteMessageNotifier<R, S>
where
    R: ResourceResolver,
    S: NotificationService,
{
    mapper: RemoteMessageMapper<R>,
    service: S,
}

impl<R, S> RemoteMessageNotifier<R, S>
where
    R: ResourceResolver,
    S: NotificationService,
{
    /// Create a notifier posting through the given service
    pub fn new(resources: R, service: S) -> Self {
        Self {
            mapper: RemoteMessageMapper::new(resources),
            service,
        }
    }

    /// The mapper used to build notifications
    pub fn mapper(&self) -> &RemoteMessageMapper<R> {
        &self.mapper
    }

    /// Fire a system tray notification for the message, mimicking the
    /// default format and behavior applied when the app is in background.
    ///
    /// # Returns
    /// Where the notification was posted
    pub fn notify(&self, message: &InboundMessage) -> Result<PostTarget, NotifyError> {
        let target = PostTarget::for_message(message)?;
        let notification = self.mapper.map(message)?;

        log::debug!(
            "Posting notification tag={:?} id={} title={:?}",
            target.tag,
            target.id,
            notification.title
        );
        self.service
            .post(target.tag.as_deref(), target.id, &notification)?;

        Ok(target)
    }
}
