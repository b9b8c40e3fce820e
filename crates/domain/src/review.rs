//! Review: a user's text about a place.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{PlaceId, ReviewId, UserId};
use crate::time::{Timestamp, now};

/// A review written by a [`User`](crate::user::User) about a [`Place`](crate::place::Place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
}

impl Review {
    /// Create a builder for constructing a [`Review`].
    #[must_use]
    pub fn builder() -> ReviewBuilder {
        ReviewBuilder::default()
    }
}

/// Step-by-step builder for [`Review`].
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    place_id: Option<PlaceId>,
    user_id: Option<UserId>,
    text: Option<String>,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn place_id(mut self, place_id: PlaceId) -> Self {
        self.place_id = Some(place_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Consume the builder and return a [`Review`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `place_id`, `user_id` or `text`
    /// is missing, checked in that order.
    pub fn build(self) -> Result<Review, HbnbError> {
        let place_id = self.place_id.ok_or(ValidationError::MissingField("place_id"))?;
        let user_id = self.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let text = self.text.ok_or(ValidationError::MissingField("text"))?;
        let ts = now();
        Ok(Review {
            id: self.id.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
            place_id,
            user_id,
            text,
        })
    }
}

/// Mutable fields of a [`Review`].
#[derive(Debug, Default, Deserialize)]
pub struct ReviewPatch {
    pub text: Option<String>,
}

impl ReviewPatch {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, review: &mut Review) {
        if let Some(text) = self.text {
            review.text = text;
        }
    }
}
