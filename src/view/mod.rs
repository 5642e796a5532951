//! Product card view.
//!
//! The [`ProductView`] component turns a product record into a format-neutral
//! [`Card`]. The reviews section is delegated to a [`ReviewsRenderer`]
//! collaborator; [`IterateReviews`] is the built-in one.

mod card;
mod product_view;
mod reviews;

pub use card::{Card, CardField, REVIEWS_HEADING};
pub use product_view::ProductView;
pub use reviews::{IterateReviews, ReviewsRenderer};
