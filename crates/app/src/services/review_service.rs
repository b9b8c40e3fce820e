//! Review service: use-cases for reviews and the place → reviews view.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::review::{Review, ReviewPatch};
use hbnb_domain::time::now;

use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Application service for review CRUD operations.
pub struct ReviewService<RR, PR, UR> {
    reviews: RR,
    places: PR,
    users: UR,
}

impl<RR, PR, UR> ReviewService<RR, PR, UR>
where
    RR: ReviewRepository,
    PR: PlaceRepository,
    UR: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(reviews: RR, places: PR, users: UR) -> Self {
        Self {
            reviews,
            places,
            users,
        }
    }

    async fn require_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        match self.places.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::of(id).into()),
        }
    }

    async fn require_user(&self, id: UserId) -> Result<(), HbnbError> {
        match self.users.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::of(id).into()),
        }
    }

    /// Persist a new review. Its place and author must both exist.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the author does not
    /// exist (place checked first), or a storage error from the repository.
    #[tracing::instrument(skip(self, review), fields(place_id = %review.place_id))]
    pub async fn create_review(&self, review: Review) -> Result<Review, HbnbError> {
        self.require_place(review.place_id).await?;
        self.require_user(review.user_id).await?;
        self.reviews.create(review).await
    }

    /// Look up a review by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no review with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, HbnbError> {
        self.reviews
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// List all reviews.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, HbnbError> {
        self.reviews.get_all().await
    }

    /// List the reviews of a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// or a storage error from the repository.
    pub async fn list_reviews_of_place(
        &self,
        place_id: PlaceId,
    ) -> Result<Vec<Review>, HbnbError> {
        self.require_place(place_id).await?;
        self.reviews.find_by_place(place_id).await
    }

    /// Apply a patch to an existing review. Place and author never change.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the review does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_review(
        &self,
        id: ReviewId,
        patch: ReviewPatch,
    ) -> Result<Review, HbnbError> {
        let mut review = self.get_review(id).await?;
        patch.apply(&mut review);
        review.updated_at = now();
        self.reviews.update(review).await
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the review does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), HbnbError> {
        self.get_review(id).await?;
        self.reviews.delete(id).await
    }

    /// Count stored reviews.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_reviews(&self) -> Result<u64, HbnbError> {
        self.reviews.count().await
    }
}
