//! Testimonials and the testimonial card view.

use serde::{Deserialize, Serialize};

/// Number of units in the rating strip.
pub const RATING_UNITS: usize = 5;

/// Endorsement supplied by the testimonial provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Author name.
    pub name: String,
    /// Quote text.
    pub content: String,
    /// Score out of five. Not clamped.
    #[serde(default)]
    pub rating: Option<i32>,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Author's role or title.
    #[serde(default)]
    pub role: Option<String>,
    /// Author's location.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form tag shown next to the author.
    #[serde(default)]
    pub category: Option<String>,
    /// Shows the verification badge when `Some(true)`.
    #[serde(default)]
    pub verified: Option<bool>,
}

impl Testimonial {
    /// Fallback initials: first character of each of the first two
    /// space-separated tokens, uppercased, at most two characters.
    /// An empty name yields an empty string.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|token| token.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Avatar image if present, initials otherwise.
    pub fn avatar_view(&self) -> AvatarView<'_> {
        match self.avatar.as_deref() {
            Some(src) if !src.trim().is_empty() => AvatarView::Image(src),
            _ => AvatarView::Initials(self.initials()),
        }
    }

    /// Rating strip, or [`RatingView::Absent`] when no rating was given.
    /// `Some(0)` is a present rating with nothing filled.
    pub fn rating_view(&self) -> RatingView {
        match self.rating {
            None => RatingView::Absent,
            Some(rating) => {
                if !(0..=RATING_UNITS as i32).contains(&rating) {
                    tracing::debug!(rating, name = %self.name, "rating outside 0..=5");
                }
                let mut units = [false; RATING_UNITS];
                for (i, unit) in units.iter_mut().enumerate() {
                    *unit = (i as i32) < rating;
                }
                RatingView::Units(units)
            },
        }
    }

    /// `true` only for an explicit `verified: true`.
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

/// Author picture or its textual stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView<'a> {
    /// Image reference to render.
    Image(&'a str),
    /// Initials badge text, possibly empty.
    Initials(String),
}

/// Rating strip state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingView {
    /// No rating supplied; the strip is not rendered.
    Absent,
    /// One flag per unit, `true` when filled.
    Units([bool; RATING_UNITS]),
}

impl RatingView {
    /// Number of filled units.
    pub fn filled(&self) -> usize {
        match self {
            RatingView::Absent => 0,
            RatingView::Units(units) => units.iter().filter(|filled| **filled).count(),
        }
    }
}

/// Everything a testimonial card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCardView<'a> {
    /// Source record.
    pub testimonial: &'a Testimonial,
    /// Emphasis treatment chosen by the parent.
    pub featured: bool,
    /// Picture or initials.
    pub avatar: AvatarView<'a>,
    /// Rating strip.
    pub rating: RatingView,
    /// Show the verification badge.
    pub verified: bool,
    /// Secondary line under the name: role and location joined by a bullet.
    pub byline: Option<String>,
}

impl<'a> TestimonialCardView<'a> {
    /// Derive the view. Pure: same input, same output.
    pub fn new(testimonial: &'a Testimonial, featured: bool) -> Self {
        let byline = [testimonial.role.as_deref(), testimonial.location.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>();

        Self {
            testimonial,
            featured,
            avatar: testimonial.avatar_view(),
            rating: testimonial.rating_view(),
            verified: testimonial.is_verified(),
            byline: (!byline.is_empty()).then(|| byline.join(" • ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            content: "Quote".to_string(),
            rating: None,
            avatar: None,
            role: None,
            location: None,
            category: None,
            verified: None,
        }
    }

    #[test]
    fn initials_follow_first_two_tokens() {
        assert_eq!(named("Jane Doe").initials(), "JD");
        assert_eq!(named("Cher").initials(), "C");
        assert_eq!(named("mary ann evans").initials(), "MA");
        assert_eq!(named("Jean  Luc").initials(), "JL");
        assert_eq!(named("").initials(), "");
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        let mut t = named("Ola Nordmann");
        assert_eq!(t.avatar_view(), AvatarView::Initials("ON".to_string()));
        t.avatar = Some("/img/ola.png".to_string());
        assert_eq!(t.avatar_view(), AvatarView::Image("/img/ola.png"));
        t.avatar = Some(" ".to_string());
        assert_eq!(t.avatar_view(), AvatarView::Initials("ON".to_string()));
    }

    #[test]
    fn rating_fills_exactly_rating_units() {
        let mut t = named("A B");
        for rating in 0..=5 {
            t.rating = Some(rating);
            let view = t.rating_view();
            assert_eq!(view.filled(), rating as usize);
            if let RatingView::Units(units) = view {
                assert!(units[..rating as usize].iter().all(|u| *u));
                assert!(units[rating as usize..].iter().all(|u| !*u));
            } else {
                panic!("rating {rating} should render units");
            }
        }
    }

    #[test]
    fn zero_rating_is_present() {
        let mut t = named("A");
        t.rating = Some(0);
        assert_eq!(t.rating_view(), RatingView::Units([false; RATING_UNITS]));
        t.rating = None;
        assert_eq!(t.rating_view(), RatingView::Absent);
    }

    #[test]
    fn out_of_range_ratings_are_not_clamped() {
        let mut t = named("A");
        t.rating = Some(9);
        assert_eq!(t.rating_view().filled(), 5);
        t.rating = Some(-2);
        assert_eq!(t.rating_view(), RatingView::Units([false; RATING_UNITS]));
    }

    #[test]
    fn byline_joins_present_parts() {
        let mut t = named("A");
        assert_eq!(TestimonialCardView::new(&t, false).byline, None);
        t.role = Some("Teacher".to_string());
        assert_eq!(TestimonialCardView::new(&t, false).byline.as_deref(), Some("Teacher"));
        t.location = Some("Lagos".to_string());
        assert_eq!(
            TestimonialCardView::new(&t, true).byline.as_deref(),
            Some("Teacher • Lagos")
        );
    }

    #[test]
    fn verified_requires_explicit_true() {
        let mut t = named("A");
        assert!(!t.is_verified());
        t.verified = Some(false);
        assert!(!t.is_verified());
        t.verified = Some(true);
        assert!(t.is_verified());
    }
}
