//! Storage ports: one repository trait per kind.
//!
//! Every mutating call is durable once its future resolves; there is no
//! separate flush step.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    /// Create a new state in storage.
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Get a state by its unique identifier.
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    /// Get all states.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    /// Update an existing state.
    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state by its unique identifier.
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored states.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`City`]s.
pub trait CityRepository {
    /// Create a new city in storage.
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Get a city by its unique identifier.
    fn get_by_id(&self, id: CityId)
    -> impl Future<Output = Result<Option<City>, HbnbError>> + Send;

    /// Get all cities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Get the cities belonging to a state.
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Update an existing city.
    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Delete a city by its unique identifier.
    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored cities.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Amenity`]s.
pub trait AmenityRepository {
    /// Create a new amenity in storage.
    fn create(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Get an amenity by its unique identifier.
    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    /// Get all amenities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    /// Update an existing amenity.
    fn update(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Delete an amenity by its unique identifier.
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored amenities.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Create a new user in storage.
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    /// Update an existing user.
    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Delete a user by its unique identifier.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored users.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s, including their
/// amenity links.
pub trait PlaceRepository {
    /// Create a new place (and its amenity links) in storage.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Get a place by its unique identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Get all places.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Get the places located in a city.
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Update an existing place, replacing its amenity links.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Delete a place by its unique identifier.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored places.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Review`]s.
pub trait ReviewRepository {
    /// Create a new review in storage.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    /// Get a review by its unique identifier.
    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send;

    /// Get all reviews.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    /// Get the reviews written about a place.
    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    /// Update an existing review.
    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    /// Delete a review by its unique identifier.
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored reviews.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}
