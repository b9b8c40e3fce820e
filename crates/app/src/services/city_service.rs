//! City service: use-cases for managing cities and the state → cities view.

use hbnb_domain::city::{City, CityPatch};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::time::now;

use crate::ports::{CityRepository, StateRepository};

/// Application service for city CRUD operations.
///
/// Needs the state repository to check that a parent state exists.
pub struct CityService<CR, SR> {
    cities: CR,
    states: SR,
}

impl<CR, SR> CityService<CR, SR>
where
    CR: CityRepository,
    SR: StateRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(cities: CR, states: SR) -> Self {
        Self { cities, states }
    }

    async fn require_state(&self, id: StateId) -> Result<(), HbnbError> {
        match self.states.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::of(id).into()),
        }
    }

    /// Persist a new city under its state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city's state does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, city), fields(city_name = %city.name, state_id = %city.state_id))]
    pub async fn create_city(&self, city: City) -> Result<City, HbnbError> {
        self.require_state(city.state_id).await?;
        self.cities.create(city).await
    }

    /// Look up a city by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        self.cities
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// List all cities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cities(&self) -> Result<Vec<City>, HbnbError> {
        self.cities.get_all().await
    }

    /// List the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// or a storage error from the repository.
    pub async fn list_cities_of_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        self.require_state(state_id).await?;
        self.cities.find_by_state(state_id).await
    }

    /// Apply a patch to an existing city. The parent state never changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_city(&self, id: CityId, patch: CityPatch) -> Result<City, HbnbError> {
        let mut city = self.get_city(id).await?;
        patch.apply(&mut city);
        city.updated_at = now();
        self.cities.update(city).await
    }

    /// Delete a city by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), HbnbError> {
        self.get_city(id).await?;
        self.cities.delete(id).await
    }

    /// Count stored cities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_cities(&self) -> Result<u64, HbnbError> {
        self.cities.count().await
    }
}
