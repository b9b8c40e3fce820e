//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::review_service::ReviewService;
use hbnb_app::services::search_service::SearchService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the six repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`, only the `Arc` wrappers are cloned.
pub struct AppState<SR, CR, AR, UR, PR, RR> {
    /// State CRUD service.
    pub state_service: Arc<StateService<SR>>,
    /// City CRUD service, including the state → cities view.
    pub city_service: Arc<CityService<CR, SR>>,
    /// Amenity CRUD service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Place CRUD service, including amenity links.
    pub place_service: Arc<PlaceService<PR, CR, UR, AR>>,
    /// Review CRUD service.
    pub review_service: Arc<ReviewService<RR, PR, UR>>,
    /// Place search.
    pub search_service: Arc<SearchService<CR, PR, AR>>,
}

impl<SR, CR, AR, UR, PR, RR> Clone for AppState<SR, CR, AR, UR, PR, RR> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            city_service: Arc::clone(&self.city_service),
            amenity_service: Arc::clone(&self.amenity_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            review_service: Arc::clone(&self.review_service),
            search_service: Arc::clone(&self.search_service),
        }
    }
}

impl<SR, CR, AR, UR, PR, RR> AppState<SR, CR, AR, UR, PR, RR>
where
    SR: StateRepository + Clone + Send + Sync + 'static,
    CR: CityRepository + Clone + Send + Sync + 'static,
    AR: AmenityRepository + Clone + Send + Sync + 'static,
    UR: UserRepository + Clone + Send + Sync + 'static,
    PR: PlaceRepository + Clone + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    /// Wire every service from one instance of each repository.
    ///
    /// Repositories are cloned into the services that need them, so they
    /// should be cheap handles (a pool, an `Arc`).
    pub fn new(states: SR, cities: CR, amenities: AR, users: UR, places: PR, reviews: RR) -> Self {
        Self {
            state_service: Arc::new(StateService::new(states.clone())),
            city_service: Arc::new(CityService::new(cities.clone(), states)),
            amenity_service: Arc::new(AmenityService::new(amenities.clone())),
            user_service: Arc::new(UserService::new(users.clone())),
            place_service: Arc::new(PlaceService::new(
                places.clone(),
                cities.clone(),
                users.clone(),
                amenities.clone(),
            )),
            review_service: Arc::new(ReviewService::new(reviews, places.clone(), users)),
            search_service: Arc::new(SearchService::new(cities, places, amenities)),
        }
    }
}
