//! End-to-end card scenarios over the shared view models.

use std::cell::Cell;

use async_trait::async_trait;
use futures::executor::block_on;
use newsroom_shared::{
    share::share_url, share_item, AttachmentsView, AvatarView, ContentCardView, ContentItem,
    Disclosure, RatingView, ShareError, ShareHost, ShareOutcome, SharePayload, Testimonial,
    TestimonialCardView,
};

const PRESS_RELEASE: &str = r#"{
    "id": "pr-2024-001",
    "title": "New community health centres",
    "excerpt": "Three centres open next month.",
    "content": "Three centres open next month. Each will offer walk-in care.",
    "category": "press-release",
    "createdAt": "2024-04-18T12:00:00Z",
    "attachments": [{ "name": "Doc.pdf", "url": "/x", "size": "1MB" }],
    "featured": true
}"#;

#[test]
fn press_release_card_scenario() {
    let item: ContentItem = serde_json::from_str(PRESS_RELEASE).expect("parse item");

    let collapsed = ContentCardView::new(&item, Disclosure::default());
    assert!(collapsed.badge_class.contains("green"));
    assert_eq!(collapsed.category_label, "Press Release");
    assert!(collapsed.featured);
    assert_eq!(collapsed.published.as_deref(), Some("April 18, 2024"));
    assert_eq!(collapsed.body, item.excerpt);
    assert_eq!(collapsed.attachments, AttachmentsView::Hidden);

    let expanded = ContentCardView::new(&item, collapsed.disclosure.toggled());
    assert_eq!(expanded.body, item.content);
    let rows = expanded.attachments.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Doc.pdf");
    assert_eq!(rows[0].size_label(), "(1MB)");
}

#[test]
fn double_toggle_restores_excerpt() {
    let item: ContentItem = serde_json::from_str(PRESS_RELEASE).expect("parse item");
    let start = Disclosure::default();
    let view = ContentCardView::new(&item, start.toggled().toggled());
    assert_eq!(view.body, item.excerpt);
    assert_eq!(view, ContentCardView::new(&item, start));
}

#[test]
fn testimonial_without_avatar_scenario() {
    let testimonial: Testimonial = serde_json::from_str(
        r#"{ "name": "Amina Yusuf", "content": "Great work", "rating": 4, "avatar": null }"#,
    )
    .expect("parse testimonial");

    let view = TestimonialCardView::new(&testimonial, false);
    assert_eq!(view.avatar, AvatarView::Initials("AY".to_string()));
    assert_eq!(view.rating, RatingView::Units([true, true, true, true, false]));
    assert!(!view.verified);
    assert!(!view.featured);
}

struct ClipboardOnly {
    writes: Cell<usize>,
    last: std::cell::RefCell<String>,
}

#[async_trait(?Send)]
impl ShareHost for ClipboardOnly {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        self.writes.set(self.writes.get() + 1);
        *self.last.borrow_mut() = text.to_string();
        Ok(())
    }
}

#[test]
fn share_without_native_sheet_copies_item_link() {
    let item: ContentItem = serde_json::from_str(PRESS_RELEASE).expect("parse item");
    let location = "https://gov.example/newsroom";
    let payload = SharePayload::for_item(&item, location);
    assert_eq!(payload.title, item.title);
    assert_eq!(payload.text, item.excerpt);

    let host = ClipboardOnly {
        writes: Cell::new(0),
        last: Default::default(),
    };
    assert_eq!(block_on(share_item(&host, &payload)), ShareOutcome::Copied);
    assert_eq!(host.writes.get(), 1);
    assert_eq!(*host.last.borrow(), share_url(location, "pr-2024-001"));
    assert_eq!(*host.last.borrow(), "https://gov.example/newsroom#pr-2024-001");
}
