//! Shared setup for repository tests.

use sqlx::SqlitePool;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::amenity_repo::SqliteAmenityRepository;
use crate::city_repo::SqliteCityRepository;
use crate::place_repo::SqlitePlaceRepository;
use crate::pool::Config;
use crate::state_repo::SqliteStateRepository;
use crate::user_repo::SqliteUserRepository;

pub(crate) async fn pool() -> SqlitePool {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap();
    db.pool().clone()
}

pub(crate) async fn state(pool: &SqlitePool) -> StateId {
    let state = State::builder().name("California").build().unwrap();
    SqliteStateRepository::new(pool.clone())
        .create(state)
        .await
        .unwrap()
        .id
}

pub(crate) async fn city(pool: &SqlitePool, state_id: StateId) -> CityId {
    let city = City::builder()
        .state_id(state_id)
        .name("Fresno")
        .build()
        .unwrap();
    SqliteCityRepository::new(pool.clone())
        .create(city)
        .await
        .unwrap()
        .id
}

pub(crate) async fn user(pool: &SqlitePool) -> UserId {
    let user = User::builder()
        .email("host@example.com")
        .password("secret")
        .build()
        .unwrap();
    SqliteUserRepository::new(pool.clone())
        .create(user)
        .await
        .unwrap()
        .id
}

pub(crate) async fn amenity(pool: &SqlitePool, name: &str) -> AmenityId {
    let amenity = Amenity::builder().name(name).build().unwrap();
    SqliteAmenityRepository::new(pool.clone())
        .create(amenity)
        .await
        .unwrap()
        .id
}

pub(crate) async fn place(pool: &SqlitePool, city_id: CityId, user_id: UserId) -> PlaceId {
    let place = Place::builder()
        .city_id(city_id)
        .user_id(user_id)
        .name("Loft")
        .build()
        .unwrap();
    SqlitePlaceRepository::new(pool.clone())
        .create(place)
        .await
        .unwrap()
        .id
}
