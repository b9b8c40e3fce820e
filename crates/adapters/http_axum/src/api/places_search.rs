//! `POST /api/v1/places_search`.
//!
//! An empty body is the same as `{}` and returns every place. Any other body
//! must be a JSON object.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::place::Place;
use hbnb_domain::search::PlaceSearch;

use super::response::ListResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

fn parse_request(body: &[u8]) -> Result<PlaceSearch, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(PlaceSearch::default());
    }
    JsonObject::parse(body)?.deserialize()
}

/// `POST /api/v1/places_search`
pub async fn search<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    body: Bytes,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let request = parse_request(&body)?;
    let places = state.search_service.search(request).await?;
    Ok(ListResponse::Ok(Json(places)))
}
