//! Tap intents attached to a notification

use std::collections::BTreeMap;

use serde::Serialize;

/// Extra carrying the message send time, as a decimal string
pub const EXTRA_SENT_TIME: &str = "google.sent_time";
/// Extra carrying the sender
pub const EXTRA_FROM: &str = "from";
/// Extra carrying the message id
pub const EXTRA_MESSAGE_ID: &str = "google.message_id";
/// Extra carrying the collapse key
pub const EXTRA_COLLAPSE_KEY: &str = "collapse_key";

/// An intent fired when the user taps the notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub action: Option<String>,
    pub package: Option<String>,
    pub component: Option<String>,
    pub extras: BTreeMap<String, String>,
}

impl Intent {
    /// Intent with only an action set
    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    /// Intent targeting a package without naming an activity
    pub fn for_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..Default::default()
        }
    }

    /// Launcher intent for a package's main activity
    pub fn launcher(package: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            action: Some("android.intent.action.MAIN".to_string()),
            package: Some(package.into()),
            component: Some(component.into()),
            extras: BTreeMap::new(),
        }
    }

    /// Set a string extra, replacing any previous value
    pub fn put_extra(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Set a string extra, or clear the key when the value is absent
    pub fn put_optional_extra(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => {
                self.extras.insert(key.to_string(), value.to_string());
            }
            None => {
                self.extras.remove(key);
            }
        }
        self
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}

/// Intent wrapped for deferred, one-time delivery on tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingIntent {
    pub request_code: i32,
    pub one_shot: bool,
    pub intent: Intent,
}

impl PendingIntent {
    /// Wrap an intent that may be fired at most once
    pub fn one_shot(request_code: i32, intent: Intent) -> Self {
        Self {
            request_code,
            one_shot: true,
            intent,
        }
    }
}
