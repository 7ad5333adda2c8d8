// 重新导出shared crate的数据模型
use anyhow::{Context, Result};
pub use newsroom_shared::{ContentItem, Testimonial};
use serde::de::DeserializeOwned;

// =============== Sample 数据 ===============
// Stands in for the content and testimonial providers; the pages only see
// already-parsed records, as they would from a real provider.

const SAMPLE_CONTENT: &str = r#"[
  {
    "id": "pr-2024-031",
    "title": "Ministry opens three community health centres",
    "excerpt": "Three new centres will offer walk-in primary care from next month.",
    "content": "Three new community health centres will open their doors on 1 May, offering walk-in primary care, maternal health services and vaccinations.\n\nThe centres were built in partnership with local councils and will be staffed by 120 newly recruited nurses and clinical officers.\n\nOpening hours and addresses are listed in the attached schedule.",
    "category": "press-release",
    "createdAt": "2024-04-18T09:30:00Z",
    "attachments": [
      { "name": "Centre schedule.pdf", "url": "/files/centre-schedule.pdf", "size": "1MB" },
      { "name": "Fact sheet.pdf", "url": "https://cdn.example.org/health/fact-sheet.pdf", "size": "240KB" }
    ],
    "featured": true
  },
  {
    "id": "os-2024-007",
    "title": "Statement on the regional flooding",
    "excerpt": "Emergency teams have been deployed to the affected districts.",
    "content": "Emergency response teams have been deployed to the five districts affected by this week's flooding.\n\nTemporary shelters are open in all district headquarters. Residents are urged to follow guidance from local authorities.",
    "category": "official-statement",
    "createdAt": "2024-04-15T17:05:00+01:00",
    "attachments": []
  },
  {
    "id": "pa-2024-012",
    "title": "New small-business grant scheme",
    "excerpt": "Applications open for grants of up to 5,000 for registered small businesses.",
    "content": "A new grant scheme will support registered small businesses with grants of up to 5,000.\n\nApplications open on 2 May and close on 30 June. Eligibility criteria are set out in the policy brief.",
    "category": "policy-announcement",
    "createdAt": "2024-04-10",
    "attachments": [
      { "name": "Policy brief.pdf", "url": "files/grant-policy-brief.pdf", "size": "3.2MB" }
    ]
  },
  {
    "id": "eu-2024-004",
    "title": "Town hall moved to the civic centre",
    "excerpt": "Thursday's town hall meeting has a new venue.",
    "content": "Thursday's town hall meeting will take place at the civic centre instead of the city library. The start time is unchanged.",
    "category": "event-update",
    "createdAt": "2024-04-08T12:00:00Z"
  },
  {
    "id": "mr-2024-002",
    "title": "Response to reports on water pricing",
    "excerpt": "Tariffs for household water use are not changing this year.",
    "content": "Recent reports suggesting an increase in household water tariffs are inaccurate. Tariffs remain at current levels until the next scheduled review.",
    "category": "media-response",
    "createdAt": "2024-04-02T08:00:00Z"
  },
  {
    "id": "cn-2024-001",
    "title": "Office closure for the public holiday",
    "excerpt": "All offices will be closed on Monday.",
    "content": "All offices will be closed on Monday for the public holiday and reopen on Tuesday at 8am.",
    "category": "community-notice",
    "createdAt": "unknown"
  }
]"#;

const SAMPLE_TESTIMONIALS: &str = r#"[
  {
    "name": "Amina Yusuf",
    "content": "Great work. The new centre in our district has changed how quickly families get care.",
    "rating": 4,
    "avatar": null,
    "role": "Community health volunteer",
    "location": "Kano",
    "category": "Health"
  },
  {
    "name": "Jane Doe",
    "content": "The grant application was simple, and the team answered every question within a day.",
    "rating": 5,
    "avatar": "images/avatars/jane-doe.jpg",
    "role": "Bakery owner",
    "category": "Small business",
    "verified": true
  },
  {
    "name": "Cher",
    "content": "Clear updates during the floods. We always knew where the shelters were.",
    "rating": 0,
    "location": "Riverside",
    "verified": false
  },
  {
    "name": "Tomás de la Vega",
    "content": "The town hall finally felt like a conversation."
  }
]"#;

pub fn load_content_items() -> Result<Vec<ContentItem>> {
    parse_records(SAMPLE_CONTENT, "content items")
}

pub fn load_testimonials() -> Result<Vec<Testimonial>> {
    parse_records(SAMPLE_TESTIMONIALS, "testimonials")
}

/// Errors carry the record kind on top of the serde message; the pages show
/// the whole `{:#}` chain in the error banner.
fn parse_records<T: DeserializeOwned>(raw: &str, what: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).with_context(|| format!("failed to parse sample {what}"))
}

#[cfg(test)]
mod tests {
    use newsroom_shared::ContentCategory;

    use super::*;

    #[test]
    fn sample_content_parses() {
        let items = load_content_items().expect("sample content");
        assert_eq!(items.len(), 6);
        assert!(items.iter().filter(|item| item.featured).count() == 1);
        assert_eq!(
            items.last().map(|item| &item.category),
            Some(&ContentCategory::Other("community-notice".to_string()))
        );
    }

    #[test]
    fn sample_testimonials_parse() {
        let testimonials = load_testimonials().expect("sample testimonials");
        assert_eq!(testimonials.len(), 4);
        assert_eq!(testimonials[0].initials(), "AY");
        assert_eq!(testimonials[3].rating, None);
    }

    #[test]
    fn malformed_sample_reports_context_chain() {
        let err = parse_records::<ContentItem>(r#"[{"id": "pr-1", "title": 7}]"#, "content items")
            .expect_err("malformed content must fail");
        assert_eq!(err.to_string(), "failed to parse sample content items");
        let chain = format!("{:#}", err);
        assert!(chain.starts_with("failed to parse sample content items: "));
        assert!(chain.contains("invalid type"), "{chain}");
    }

    #[test]
    fn truncated_sample_is_an_error_not_a_panic() {
        let err = parse_records::<Testimonial>("[{\"name\": \"Amina\"", "testimonials")
            .expect_err("truncated testimonials must fail");
        assert!(format!("{:#}", err).starts_with("failed to parse sample testimonials: "));
    }
}
