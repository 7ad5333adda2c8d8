//! Content items, their categories and the content card view.

use serde::{Deserialize, Serialize};

use crate::{datetime, disclosure::Disclosure};

/// Press or announcement record supplied by the content provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Opaque identifier, also used as the share fragment.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Truncated preview shown while collapsed.
    pub excerpt: String,
    /// Full body shown while expanded.
    pub content: String,
    /// Category driving the badge style.
    pub category: ContentCategory,
    /// Creation timestamp as delivered by the provider.
    pub created_at: String,
    /// Downloadable files; `None` when the provider omitted the field.
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
    /// Adds the featured band above the card.
    #[serde(default)]
    pub featured: bool,
}

/// File attached to a [`ContentItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name.
    pub name: String,
    /// Download location, absolute or site-relative.
    pub url: String,
    /// Human-readable size such as `1MB`.
    pub size: String,
}

impl Attachment {
    /// Size wrapped in parentheses, as printed next to the name.
    pub fn size_label(&self) -> String {
        format!("({})", self.size)
    }
}

/// Fixed set of content categories. Unknown wire values are kept in
/// [`ContentCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentCategory {
    /// `official-statement`
    OfficialStatement,
    /// `press-release`
    PressRelease,
    /// `policy-announcement`
    PolicyAnnouncement,
    /// `event-update`
    EventUpdate,
    /// `media-response`
    MediaResponse,
    /// Anything else, verbatim.
    Other(String),
}

const DEFAULT_BADGE_CLASS: &str = "bg-gray-100 text-gray-800";

impl ContentCategory {
    /// Wire value.
    pub fn as_str(&self) -> &str {
        match self {
            ContentCategory::OfficialStatement => "official-statement",
            ContentCategory::PressRelease => "press-release",
            ContentCategory::PolicyAnnouncement => "policy-announcement",
            ContentCategory::EventUpdate => "event-update",
            ContentCategory::MediaResponse => "media-response",
            ContentCategory::Other(raw) => raw,
        }
    }

    /// Badge classes. Total: unknown categories get the neutral style.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ContentCategory::OfficialStatement => "bg-blue-100 text-blue-800",
            ContentCategory::PressRelease => "bg-green-100 text-green-800",
            ContentCategory::PolicyAnnouncement => "bg-purple-100 text-purple-800",
            ContentCategory::EventUpdate => "bg-orange-100 text-orange-800",
            ContentCategory::MediaResponse => "bg-red-100 text-red-800",
            ContentCategory::Other(_) => DEFAULT_BADGE_CLASS,
        }
    }

    /// Human-readable label, e.g. `Press Release`.
    pub fn label(&self) -> String {
        let words = self
            .as_str()
            .split(['-', '_', ' '])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>();
        if words.is_empty() {
            "Update".to_string()
        } else {
            words.join(" ")
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl From<String> for ContentCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "official-statement" => ContentCategory::OfficialStatement,
            "press-release" => ContentCategory::PressRelease,
            "policy-announcement" => ContentCategory::PolicyAnnouncement,
            "event-update" => ContentCategory::EventUpdate,
            "media-response" => ContentCategory::MediaResponse,
            _ => ContentCategory::Other(raw),
        }
    }
}

impl From<&str> for ContentCategory {
    fn from(raw: &str) -> Self {
        ContentCategory::from(raw.to_string())
    }
}

impl From<ContentCategory> for String {
    fn from(category: ContentCategory) -> Self {
        match category {
            ContentCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// What the attachment area of a card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentsView<'a> {
    /// Card is collapsed.
    Hidden,
    /// Provider sent no attachment field.
    Absent,
    /// Provider sent an empty list.
    Empty,
    /// Rows to render, never empty.
    Listed(&'a [Attachment]),
}

impl<'a> AttachmentsView<'a> {
    /// Rows to render; empty for every non-listed variant.
    pub fn rows(&self) -> &'a [Attachment] {
        match *self {
            AttachmentsView::Listed(rows) => rows,
            _ => &[],
        }
    }
}

/// Everything a content card renders for a given disclosure state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCardView<'a> {
    /// Source record.
    pub item: &'a ContentItem,
    /// Current disclosure state.
    pub disclosure: Disclosure,
    /// Badge classes for the category.
    pub badge_class: &'static str,
    /// Badge text.
    pub category_label: String,
    /// Show the featured band.
    pub featured: bool,
    /// Long-form creation date, `None` if unparseable.
    pub published: Option<String>,
    /// Excerpt or full content depending on `disclosure`.
    pub body: &'a str,
    /// Attachment area.
    pub attachments: AttachmentsView<'a>,
}

impl<'a> ContentCardView<'a> {
    /// Derive the card view for `item` in the given state.
    pub fn new(item: &'a ContentItem, disclosure: Disclosure) -> Self {
        let expanded = disclosure.is_expanded();
        let attachments = match (&item.attachments, expanded) {
            (_, false) => AttachmentsView::Hidden,
            (None, true) => AttachmentsView::Absent,
            (Some(list), true) if list.is_empty() => AttachmentsView::Empty,
            (Some(list), true) => AttachmentsView::Listed(list),
        };

        Self {
            item,
            disclosure,
            badge_class: item.category.badge_class(),
            category_label: item.category.label(),
            featured: item.featured,
            published: datetime::format_long_date(&item.created_at),
            body: if expanded { item.content.as_str() } else { item.excerpt.as_str() },
            attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, attachments: Option<Vec<Attachment>>) -> ContentItem {
        ContentItem {
            id: "stmt-7".to_string(),
            title: "Budget update".to_string(),
            excerpt: "Short".to_string(),
            content: "Short and then the rest".to_string(),
            category: ContentCategory::from(category),
            created_at: "2024-06-01T09:00:00Z".to_string(),
            attachments,
            featured: false,
        }
    }

    #[test]
    fn known_categories_round_trip_through_strings() {
        for raw in [
            "official-statement",
            "press-release",
            "policy-announcement",
            "event-update",
            "media-response",
        ] {
            let category = ContentCategory::from(raw);
            assert!(!matches!(category, ContentCategory::Other(_)), "{raw}");
            assert_eq!(String::from(category), raw);
        }
    }

    #[test]
    fn badge_lookup_is_total() {
        let known = [
            ContentCategory::OfficialStatement,
            ContentCategory::PressRelease,
            ContentCategory::PolicyAnnouncement,
            ContentCategory::EventUpdate,
            ContentCategory::MediaResponse,
        ];
        for category in &known {
            assert!(!category.badge_class().is_empty());
            assert_ne!(category.badge_class(), DEFAULT_BADGE_CLASS);
        }
        for raw in ["", "rumor", "PRESS-RELEASE", "press release"] {
            assert_eq!(ContentCategory::from(raw).badge_class(), DEFAULT_BADGE_CLASS);
        }
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(ContentCategory::PolicyAnnouncement.label(), "Policy Announcement");
        assert_eq!(ContentCategory::from("town_HALL").label(), "Town Hall");
        assert_eq!(ContentCategory::from("").label(), "Update");
    }

    #[test]
    fn unknown_category_keeps_raw_value_on_the_wire() {
        let json = r#""community-note""#;
        let category: ContentCategory = serde_json::from_str(json).expect("deserialize");
        assert_eq!(category, ContentCategory::Other("community-note".to_string()));
        assert_eq!(serde_json::to_string(&category).expect("serialize"), json);
    }

    #[test]
    fn collapsed_card_hides_attachments() {
        let item = item("press-release", Some(vec![]));
        let view = ContentCardView::new(&item, Disclosure::Collapsed);
        assert_eq!(view.body, "Short");
        assert_eq!(view.attachments, AttachmentsView::Hidden);
        assert!(view.attachments.rows().is_empty());
    }

    #[test]
    fn expanded_card_distinguishes_absent_and_empty() {
        let absent = item("press-release", None);
        let empty = item("press-release", Some(vec![]));
        assert_eq!(
            ContentCardView::new(&absent, Disclosure::Expanded).attachments,
            AttachmentsView::Absent
        );
        assert_eq!(
            ContentCardView::new(&empty, Disclosure::Expanded).attachments,
            AttachmentsView::Empty
        );
    }

    #[test]
    fn invalid_timestamp_yields_no_date() {
        let mut item = item("event-update", None);
        item.created_at = "not a date".to_string();
        assert_eq!(ContentCardView::new(&item, Disclosure::Collapsed).published, None);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "pr-1",
            "title": "Launch",
            "excerpt": "We launched",
            "content": "We launched today.",
            "category": "press-release",
            "createdAt": "2024-02-10"
        }"#;
        let item: ContentItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(item.category, ContentCategory::PressRelease);
        assert_eq!(item.attachments, None);
        assert!(!item.featured);
    }
}
