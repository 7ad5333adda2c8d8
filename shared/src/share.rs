//! Best-effort sharing of a content item.
//!
//! The host (a browser in practice) is abstracted behind [`ShareHost`] so
//! the fallback policy can be exercised without one. Failures never
//! propagate: [`share_item`] logs them and reports a [`ShareOutcome`].

use async_trait::async_trait;
use thiserror::Error;

use crate::content::ContentItem;

/// Data handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Share title.
    pub title: String,
    /// Share text.
    pub text: String,
    /// Link to the item on the current page.
    pub url: String,
}

impl SharePayload {
    /// Payload for `item`, linking to it from `location`.
    pub fn for_item(item: &ContentItem, location: &str) -> Self {
        Self {
            title: item.title.clone(),
            text: item.excerpt.clone(),
            url: share_url(location, &item.id),
        }
    }
}

/// `<location>#<id>`.
pub fn share_url(location: &str, id: &str) -> String {
    format!("{location}#{id}")
}

/// Failures of the host's share facilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The capability does not exist on this host.
    #[error("sharing is not available")]
    Unavailable,
    /// The native share was rejected or cancelled by the user.
    #[error("native share rejected: {0}")]
    Rejected(String),
    /// Writing to the clipboard failed.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

/// Platform share facilities.
#[async_trait(?Send)]
pub trait ShareHost {
    /// Whether a native share sheet exists.
    fn supports_native_share(&self) -> bool;

    /// Open the native share sheet.
    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    /// Put `text` on the system clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;
}

/// What a share attempt ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// The link was copied to the clipboard.
    Copied,
    /// The native share was rejected or cancelled; nothing else happened.
    Dismissed,
    /// The clipboard fallback failed.
    Failed,
}

/// Share via the native sheet when the host has one, otherwise copy the
/// link. A rejected native share does not fall back to the clipboard.
pub async fn share_item<H>(host: &H, payload: &SharePayload) -> ShareOutcome
where
    H: ShareHost + ?Sized,
{
    if host.supports_native_share() {
        return match host.native_share(payload).await {
            Ok(()) => {
                tracing::debug!(url = %payload.url, "shared via native sheet");
                ShareOutcome::Shared
            },
            Err(err) => {
                tracing::warn!(url = %payload.url, error = %err, "native share did not complete");
                ShareOutcome::Dismissed
            },
        };
    }

    match host.write_clipboard(&payload.url).await {
        Ok(()) => {
            tracing::debug!(url = %payload.url, "share link copied");
            ShareOutcome::Copied
        },
        Err(err) => {
            tracing::warn!(url = %payload.url, error = %err, "share link copy failed");
            ShareOutcome::Failed
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        native: Option<Result<(), ShareError>>,
        clipboard: Option<ShareError>,
        shared: RefCell<Vec<SharePayload>>,
        copied: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ShareHost for FakeHost {
        fn supports_native_share(&self) -> bool {
            self.native.is_some()
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            self.shared.borrow_mut().push(payload.clone());
            self.native.clone().unwrap_or(Err(ShareError::Unavailable))
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
            self.copied.borrow_mut().push(text.to_string());
            match &self.clipboard {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Title".to_string(),
            text: "Excerpt".to_string(),
            url: share_url("https://example.org/news", "pr-9"),
        }
    }

    #[test]
    fn url_appends_fragment() {
        assert_eq!(share_url("https://example.org/news", "pr-9"), "https://example.org/news#pr-9");
    }

    #[test]
    fn native_success_skips_clipboard() {
        let host = FakeHost {
            native: Some(Ok(())),
            ..FakeHost::default()
        };
        assert_eq!(block_on(share_item(&host, &payload())), ShareOutcome::Shared);
        assert_eq!(host.shared.borrow().as_slice(), &[payload()]);
        assert!(host.copied.borrow().is_empty());
    }

    #[test]
    fn native_rejection_is_swallowed_without_fallback() {
        let host = FakeHost {
            native: Some(Err(ShareError::Rejected("AbortError".to_string()))),
            ..FakeHost::default()
        };
        assert_eq!(block_on(share_item(&host, &payload())), ShareOutcome::Dismissed);
        assert!(host.copied.borrow().is_empty());
    }

    #[test]
    fn missing_native_share_copies_once() {
        let host = FakeHost::default();
        assert_eq!(block_on(share_item(&host, &payload())), ShareOutcome::Copied);
        assert!(host.shared.borrow().is_empty());
        assert_eq!(host.copied.borrow().as_slice(), &["https://example.org/news#pr-9".to_string()]);
    }

    #[test]
    fn clipboard_failure_is_reported_not_raised() {
        let host = FakeHost {
            clipboard: Some(ShareError::Clipboard("denied".to_string())),
            ..FakeHost::default()
        };
        assert_eq!(block_on(share_item(&host, &payload())), ShareOutcome::Failed);
        assert_eq!(host.copied.borrow().len(), 1);
    }
}
