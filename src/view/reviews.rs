//! Reviews collaborator used by the product view.

use crate::catalog::Review;

/// Renders the reviews section of a product card.
///
/// The product view hands over the record's review list unchanged and places
/// the returned lines, in order, under the reviews heading.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewsRenderer {
    /// Returns one display line per review.
    fn render_reviews(&self, reviews: &[Review]) -> Vec<String>;
}

/// Built-in collaborator that lists each review on its own line.
///
/// A review renders as `"<stars>/5 <comment>"`, followed by
/// `" (by <user>)"` and `" on <timestamp>"` when those are known.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterateReviews;

/// Shown when a review has neither a rating nor a comment.
const EMPTY_REVIEW_PLACEHOLDER: &str = "(no comment)";

impl IterateReviews {
    fn format_review(review: &Review) -> String {
        let mut parts = Vec::with_capacity(2);
        if !review.stars.is_blank() {
            parts.push(format!("{}/5", review.stars));
        }
        if !review.comment.is_blank() {
            parts.push(review.comment.to_string());
        }

        let mut line = if parts.is_empty() {
            EMPTY_REVIEW_PLACEHOLDER.to_owned()
        } else {
            parts.join(" ")
        };

        if !review.user_id.is_blank() {
            line.push_str(&format!(" (by {})", review.user_id));
        }
        if !review.created_at.is_blank() {
            line.push_str(&format!(" on {}", review.created_at));
        }
        line
    }
}

impl ReviewsRenderer for IterateReviews {
    fn render_reviews(&self, reviews: &[Review]) -> Vec<String> {
        reviews.iter().map(Self::format_review).collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{IterateReviews, ReviewsRenderer};
    use crate::catalog::{DisplayValue, Review};

    #[fixture]
    fn full_review() -> Review {
        Review {
            id: DisplayValue::from("r1"),
            stars: DisplayValue::Integer(4),
            comment: DisplayValue::from("Sturdy handle"),
            user_id: DisplayValue::from("u-17"),
            created_at: DisplayValue::from("2024-03-01"),
            ..Review::default()
        }
    }

    #[rstest]
    fn formats_every_known_part(full_review: Review) {
        let lines = IterateReviews.render_reviews(&[full_review]);

        assert_eq!(lines, vec!["4/5 Sturdy handle (by u-17) on 2024-03-01"]);
    }

    #[rstest]
    #[case::comment_only(
        Review { comment: DisplayValue::from("Fine"), ..Review::default() },
        "Fine"
    )]
    #[case::stars_only(
        Review { stars: DisplayValue::Integer(2), ..Review::default() },
        "2/5"
    )]
    #[case::author_only(
        Review { user_id: DisplayValue::from("u-1"), ..Review::default() },
        "(no comment) (by u-1)"
    )]
    #[case::empty(Review::default(), "(no comment)")]
    fn omits_unknown_parts(#[case] review: Review, #[case] expected: &str) {
        let lines = IterateReviews.render_reviews(&[review]);

        assert_eq!(lines, vec![expected]);
    }

    #[rstest]
    fn preserves_review_order(full_review: Review) {
        let second = Review {
            comment: DisplayValue::from("Second"),
            ..Review::default()
        };

        let lines = IterateReviews.render_reviews(&[full_review, second]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.last().map(String::as_str), Some("Second"));
    }

    #[rstest]
    fn empty_list_renders_nothing() {
        assert!(IterateReviews.render_reviews(&[]).is_empty());
    }
}
