//! In-memory port implementations shared by the service tests.

use std::collections::HashMap;
use std::future::{Future, ready};
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};

struct Table<K, V>(Arc<Mutex<HashMap<K, V>>>);

impl<K, V> Clone for Table<K, V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(HashMap::new())))
    }
}

impl<K: Eq + Hash, V: Clone> Table<K, V> {
    fn put(&self, key: K, value: V) {
        self.0.lock().unwrap().insert(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.0.lock().unwrap().get(key).cloned()
    }

    fn all(&self) -> Vec<V> {
        self.0.lock().unwrap().values().cloned().collect()
    }

    fn filter(&self, pred: impl Fn(&V) -> bool) -> Vec<V> {
        self.0
            .lock()
            .unwrap()
            .values()
            .filter(|v| pred(v))
            .cloned()
            .collect()
    }

    fn remove(&self, key: &K) {
        self.0.lock().unwrap().remove(key);
    }

    fn len(&self) -> u64 {
        self.0.lock().unwrap().len() as u64
    }
}

/// One shared store implementing every repository port. Clones share data,
/// so the same store can back several services in one test.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    states: Table<StateId, State>,
    cities: Table<CityId, City>,
    amenities: Table<AmenityId, Amenity>,
    users: Table<UserId, User>,
    places: Table<PlaceId, Place>,
    reviews: Table<ReviewId, Review>,
}

impl StateRepository for InMemoryStore {
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        self.states.put(state.id, state.clone());
        ready(Ok(state))
    }

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send {
        ready(Ok(self.states.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send {
        ready(Ok(self.states.all()))
    }

    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        self.states.put(state.id, state.clone());
        ready(Ok(state))
    }

    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.states.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.states.len()))
    }
}

impl CityRepository for InMemoryStore {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        self.cities.put(city.id, city.clone());
        ready(Ok(city))
    }

    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
        ready(Ok(self.cities.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        ready(Ok(self.cities.all()))
    }

    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        ready(Ok(self.cities.filter(|c| c.state_id == state_id)))
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        self.cities.put(city.id, city.clone());
        ready(Ok(city))
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.cities.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.cities.len()))
    }
}

impl AmenityRepository for InMemoryStore {
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        self.amenities.put(amenity.id, amenity.clone());
        ready(Ok(amenity))
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
        ready(Ok(self.amenities.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        ready(Ok(self.amenities.all()))
    }

    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        self.amenities.put(amenity.id, amenity.clone());
        ready(Ok(amenity))
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.amenities.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.amenities.len()))
    }
}

impl UserRepository for InMemoryStore {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        self.users.put(user.id, user.clone());
        ready(Ok(user))
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send {
        ready(Ok(self.users.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send {
        ready(Ok(self.users.all()))
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        self.users.put(user.id, user.clone());
        ready(Ok(user))
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.users.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.users.len()))
    }
}

impl PlaceRepository for InMemoryStore {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        self.places.put(place.id, place.clone());
        ready(Ok(place))
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        ready(Ok(self.places.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        ready(Ok(self.places.all()))
    }

    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        ready(Ok(self.places.filter(|p| p.city_id == city_id)))
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        self.places.put(place.id, place.clone());
        ready(Ok(place))
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.places.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.places.len()))
    }
}

impl ReviewRepository for InMemoryStore {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        self.reviews.put(review.id, review.clone());
        ready(Ok(review))
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send {
        ready(Ok(self.reviews.get(&id)))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        ready(Ok(self.reviews.all()))
    }

    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        ready(Ok(self.reviews.filter(|r| r.place_id == place_id)))
    }

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        self.reviews.put(review.id, review.clone());
        ready(Ok(review))
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.reviews.remove(&id);
        ready(Ok(()))
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        ready(Ok(self.reviews.len()))
    }
}
