//! Notification service that prints posts as JSON lines

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use crate::application::ports::{NotificationService, NotificationServiceError};
use crate::domain::NotificationDescriptor;

#[derive(Serialize)]
struct PostRecord<'a> {
    tag: Option<&'a str>,
    id: i32,
    notification: &'a NotificationDescriptor,
}

/// Writes one JSON object per posted notification. Used for dry runs.
pub struct StdoutService<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl StdoutService {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutService {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StdoutService<W> {
    /// Write posts to an arbitrary sink
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> NotificationService for StdoutService<W> {
    fn post(
        &self,
        tag: Option<&str>,
        id: i32,
        notification: &NotificationDescriptor,
    ) -> Result<(), NotificationServiceError> {
        let record = PostRecord {
            tag,
            id,
            notification,
        };
        let line = serde_json::to_string(&record)
            .map_err(|e| NotificationServiceError::PostFailed(e.to_string()))?;

        let mut out = self
            .out
            .lock()
            .map_err(|_| NotificationServiceError::PostFailed("output lock poisoned".to_string()))?;
        writeln!(out, "{}", line).map_err(|e| NotificationServiceError::PostFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Intent, NotificationBuilder, PendingIntent, ResourceId};

    #[test]
    fn writes_one_json_line_per_post() {
        let service = StdoutService::with_writer(Vec::new());
        let notification = NotificationBuilder::new(
            "Hello",
            ResourceId::new(3).unwrap(),
            PendingIntent::one_shot(0, Intent::default()),
        )
        .build();

        service.post(Some("news"), 0, &notification).unwrap();
        service.post(None, 42, &notification).unwrap();

        let output = String::from_utf8(service.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["tag"], "news");
        assert_eq!(first["id"], 0);
        assert_eq!(first["notification"]["title"], "Hello");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["tag"].is_null());
        assert_eq!(second["id"], 42);
    }
}
