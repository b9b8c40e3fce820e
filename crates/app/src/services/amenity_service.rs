//! Amenity service: use-cases for managing amenities.

use hbnb_domain::amenity::{Amenity, AmenityPatch};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::AmenityId;
use hbnb_domain::time::now;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a freshly built amenity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, amenity), fields(amenity_name = %amenity.name))]
    pub async fn create_amenity(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        self.repo.create(amenity).await
    }

    /// Look up an amenity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// List all amenities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.repo.get_all().await
    }

    /// Apply a patch to an existing amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the amenity does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        patch: AmenityPatch,
    ) -> Result<Amenity, HbnbError> {
        let mut amenity = self.get_amenity(id).await?;
        patch.apply(&mut amenity);
        amenity.updated_at = now();
        self.repo.update(amenity).await
    }

    /// Delete an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the amenity does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        self.get_amenity(id).await?;
        self.repo.delete(id).await
    }

    /// Count stored amenities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_amenities(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }
}
