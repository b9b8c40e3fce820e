//! Search service: runs the staged place search pipeline against storage.

use hbnb_domain::error::HbnbError;
use hbnb_domain::place::Place;
use hbnb_domain::search::{
    CandidateCities, CandidatePlaces, PlaceSearch, RequiredAmenities, SearchPlan, SearchScope,
};

use crate::ports::{AmenityRepository, CityRepository, PlaceRepository};

/// Application service for `places_search`.
pub struct SearchService<CR, PR, AR> {
    cities: CR,
    places: PR,
    amenities: AR,
}

impl<CR, PR, AR> SearchService<CR, PR, AR>
where
    CR: CityRepository,
    PR: PlaceRepository,
    AR: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(cities: CR, places: PR, amenities: AR) -> Self {
        Self {
            cities,
            places,
            amenities,
        }
    }

    /// Return the places matching the request. Identifiers that do not
    /// resolve are skipped, never reported.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from a repository.
    #[tracing::instrument(skip_all, fields(
        states = request.states.len(),
        cities = request.cities.len(),
        amenities = request.amenities.len(),
    ))]
    pub async fn search(&self, request: PlaceSearch) -> Result<Vec<Place>, HbnbError> {
        match request.plan() {
            SearchPlan::AllPlaces => self.places.get_all().await,
            SearchPlan::Unscoped => {
                tracing::debug!("amenity filter without state or city scope matches nothing");
                Ok(Vec::new())
            }
            SearchPlan::Scoped(scope) => {
                let cities = self.candidate_cities(&scope).await?;
                let places = self.candidate_places(&cities).await?;
                let required = self.required_amenities(&scope).await?;
                tracing::debug!(candidates = places.len(), "filtering candidates by amenities");
                Ok(places.retain_admitted(&required))
            }
        }
    }

    async fn candidate_cities(&self, scope: &SearchScope) -> Result<CandidateCities, HbnbError> {
        let mut cities = CandidateCities::default();
        for state_id in &scope.states {
            let in_state = self.cities.find_by_state(*state_id).await?;
            cities.extend(in_state.into_iter().map(|city| city.id));
        }
        for city_id in &scope.cities {
            if self.cities.get_by_id(*city_id).await?.is_some() {
                cities.insert(*city_id);
            }
        }
        Ok(cities)
    }

    async fn candidate_places(
        &self,
        cities: &CandidateCities,
    ) -> Result<CandidatePlaces, HbnbError> {
        let mut places = CandidatePlaces::default();
        for city_id in cities.iter() {
            places.extend(self.places.find_by_city(city_id).await?);
        }
        Ok(places)
    }

    async fn required_amenities(
        &self,
        scope: &SearchScope,
    ) -> Result<RequiredAmenities, HbnbError> {
        let mut resolved = Vec::with_capacity(scope.amenities.len());
        for amenity_id in &scope.amenities {
            if self.amenities.get_by_id(*amenity_id).await?.is_some() {
                resolved.push(*amenity_id);
            }
        }
        Ok(RequiredAmenities::new(resolved))
    }
}
