//! Inbound push message value objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{InvalidArgumentError, MessageParseError};

/// User-facing display fields of a push message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageNotification {
    pub title: Option<String>,
    pub body: Option<String>,
    pub title_loc_key: Option<String>,
    pub title_loc_args: Option<Vec<String>>,
    pub body_loc_key: Option<String>,
    pub body_loc_args: Option<Vec<String>>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sound: Option<String>,
    pub click_action: Option<String>,
    pub tag: Option<String>,
}

/// A push message as handed over by the messaging platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundMessage {
    #[serde(alias = "google.message_id")]
    pub message_id: Option<String>,
    /// Send time in milliseconds since the epoch
    #[serde(alias = "google.sent_time")]
    pub sent_time: i64,
    pub from: Option<String>,
    pub collapse_key: Option<String>,
    pub data: BTreeMap<String, String>,
    pub notification: Option<MessageNotification>,
}

impl InboundMessage {
    /// Parse a message from its JSON payload
    pub fn from_json(json: &str) -> Result<Self, MessageParseError> {
        serde_json::from_str(json).map_err(|e| MessageParseError(e.to_string()))
    }

    /// The notification sub-record, or the caller error for its absence
    pub fn require_notification(&self) -> Result<&MessageNotification, InvalidArgumentError> {
        self.notification
            .as_ref()
            .ok_or(InvalidArgumentError::missing_notification())
    }

    /// Hash of the message id. A missing id hashes like the empty string.
    pub fn id_hash(&self) -> i32 {
        string_hash(self.message_id.as_deref().unwrap_or_default())
    }
}

/// Platform string hash: `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code
/// units, in wrapping 32-bit arithmetic.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
