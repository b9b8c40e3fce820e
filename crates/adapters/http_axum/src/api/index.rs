//! Liveness marker and per-kind counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::stats::Stats;

use super::response::GetResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api/v1/status`.
#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
}

/// `GET /api/v1/status`
pub async fn status() -> GetResponse<Status> {
    GetResponse::Ok(Json(Status { status: "OK" }))
}

/// `GET /api/v1/stats`
pub async fn stats<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<GetResponse<Stats>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let stats = Stats {
        amenities: state.amenity_service.count_amenities().await?,
        cities: state.city_service.count_cities().await?,
        places: state.place_service.count_places().await?,
        reviews: state.review_service.count_reviews().await?,
        states: state.state_service.count_states().await?,
        users: state.user_service.count_users().await?,
    };
    Ok(GetResponse::Ok(Json(stats)))
}
