//! Outbound share links and the copy-link affordance.

pub mod clipboard;

use urlencoding::encode;

use crate::ledger::{notification::LINK_COPIED_MESSAGE, Notification};

pub use clipboard::{Clipboard, CommandClipboard, FileClipboard};

pub const SHARE_MESSAGE: &str = "Check out this Profit & Zakat Tracker app!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub telegram: String,
}

pub fn share_links(url: &str, message: &str) -> ShareLinks {
    ShareLinks {
        whatsapp: format!(
            "https://wa.me/?text={}",
            encode(&format!("{message} {url}"))
        ),
        telegram: format!(
            "https://t.me/share/url?url={}&text={}",
            encode(url),
            encode(message)
        ),
    }
}

/// Copies `url` with `primary`, falling back to `fallback`. Only when both
/// fail is a failure reported.
pub fn copy_link(url: &str, primary: &dyn Clipboard, fallback: &dyn Clipboard) -> Notification {
    match primary.copy(url) {
        Ok(()) => return Notification::success(LINK_COPIED_MESSAGE),
        Err(err) => {
            tracing::debug!(clipboard = primary.name(), error = %err, "primary clipboard failed");
        }
    }
    match fallback.copy(url) {
        Ok(()) => {
            tracing::info!(clipboard = fallback.name(), "copied link via fallback");
            Notification::success(format!(
                "{} (saved via {})",
                LINK_COPIED_MESSAGE,
                fallback.name()
            ))
        }
        Err(err) => {
            tracing::warn!(error = %err, "both clipboards failed");
            Notification::failure(format!("Could not copy link: {err}"))
        }
    }
}
