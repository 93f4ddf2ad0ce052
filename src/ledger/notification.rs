use std::time::Duration;

use chrono::NaiveDateTime;

/// Seconds a banner stays up unless configured otherwise.
pub const DEFAULT_DISMISS_SECONDS: u64 = 3;

pub const SAVED_MESSAGE: &str = "Data saved successfully!";
pub const DELETED_MESSAGE: &str = "Record deleted successfully!";
pub const EXPORTED_MESSAGE: &str = "Data exported successfully!";
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Failure)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            dismiss_after: Duration::from_secs(DEFAULT_DISMISS_SECONDS),
        }
    }

    pub fn dismissed_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Whether a banner shown at `shown_at` is still up at `now`.
    pub fn is_visible(&self, shown_at: NaiveDateTime, now: NaiveDateTime) -> bool {
        let elapsed = now.signed_duration_since(shown_at);
        match elapsed.to_std() {
            Ok(elapsed) => elapsed < self.dismiss_after,
            Err(_) => true,
        }
    }
}
