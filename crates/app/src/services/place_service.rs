//! Place service: use-cases for places, the city → places view and
//! place ↔ amenity links.

use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{AmenityId, CityId, PlaceId, UserId};
use hbnb_domain::place::{Place, PlacePatch};
use hbnb_domain::time::now;

use crate::ports::{AmenityRepository, CityRepository, PlaceRepository, UserRepository};

/// Result of attaching an amenity to a place.
#[derive(Debug)]
pub enum LinkOutcome {
    /// The link was created.
    Linked(Amenity),
    /// The amenity was already attached; nothing changed.
    AlreadyLinked(Amenity),
}

/// Application service for place CRUD and amenity links.
pub struct PlaceService<PR, CR, UR, AR> {
    places: PR,
    cities: CR,
    users: UR,
    amenities: AR,
}

impl<PR, CR, UR, AR> PlaceService<PR, CR, UR, AR>
where
    PR: PlaceRepository,
    CR: CityRepository,
    UR: UserRepository,
    AR: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: PR, cities: CR, users: UR, amenities: AR) -> Self {
        Self {
            places,
            cities,
            users,
            amenities,
        }
    }

    async fn require_city(&self, id: CityId) -> Result<(), HbnbError> {
        match self.cities.get_by_id(id).await? {
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

    async fn require_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.amenities
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// Persist a new place. Its city and owner must both exist.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city or the owner does not
    /// exist (city checked first), or a storage error from the repository.
    #[tracing::instrument(skip(self, place), fields(place_name = %place.name, city_id = %place.city_id))]
    pub async fn create_place(&self, place: Place) -> Result<Place, HbnbError> {
        self.require_city(place.city_id).await?;
        self.require_user(place.user_id).await?;
        self.places.create(place).await
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        self.places
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self) -> Result<Vec<Place>, HbnbError> {
        self.places.get_all().await
    }

    /// List the places of a city.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist,
    /// or a storage error from the repository.
    pub async fn list_places_of_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        self.require_city(city_id).await?;
        self.places.find_by_city(city_id).await
    }

    /// Apply a patch to an existing place. City, owner and amenity links
    /// never change through a patch.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_place(&self, id: PlaceId, patch: PlacePatch) -> Result<Place, HbnbError> {
        let mut place = self.get_place(id).await?;
        patch.apply(&mut place);
        place.updated_at = now();
        self.places.update(place).await
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.get_place(id).await?;
        self.places.delete(id).await
    }

    /// Count stored places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_places(&self) -> Result<u64, HbnbError> {
        self.places.count().await
    }

    /// List the amenities attached to a place. Links whose amenity no longer
    /// resolves are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// or a storage error from the repository.
    pub async fn list_amenities_of_place(
        &self,
        place_id: PlaceId,
    ) -> Result<Vec<Amenity>, HbnbError> {
        let place = self.get_place(place_id).await?;
        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in place.amenity_ids {
            if let Some(amenity) = self.amenities.get_by_id(amenity_id).await? {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }

    /// Attach an amenity to a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the amenity does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn link_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<LinkOutcome, HbnbError> {
        let mut place = self.get_place(place_id).await?;
        let amenity = self.require_amenity(amenity_id).await?;
        if !place.link_amenity(amenity_id) {
            return Ok(LinkOutcome::AlreadyLinked(amenity));
        }
        self.places.update(place).await?;
        Ok(LinkOutcome::Linked(amenity))
    }

    /// Detach an amenity from a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the amenity does not
    /// exist, or when the amenity is not attached to the place.
    #[tracing::instrument(skip(self))]
    pub async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        let mut place = self.get_place(place_id).await?;
        self.require_amenity(amenity_id).await?;
        if !place.unlink_amenity(amenity_id) {
            return Err(NotFoundError::of(amenity_id).into());
        }
        self.places.update(place).await?;
        Ok(())
    }
}
