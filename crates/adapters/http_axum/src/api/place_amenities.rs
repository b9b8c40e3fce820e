//! JSON REST handlers for the place ↔ amenity links.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_app::services::place_service::LinkOutcome;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::{AmenityId, PlaceId};

use super::parse_id;
use super::response::{DeleteResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the link endpoint.
pub enum LinkResponse {
    Created(Json<Amenity>),
    AlreadyLinked(Json<Amenity>),
}

impl From<LinkOutcome> for LinkResponse {
    fn from(outcome: LinkOutcome) -> Self {
        match outcome {
            LinkOutcome::Linked(amenity) => Self::Created(Json(amenity)),
            LinkOutcome::AlreadyLinked(amenity) => Self::AlreadyLinked(Json(amenity)),
        }
    }
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::AlreadyLinked(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/places/{id}/amenities`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let amenities = state.place_service.list_amenities_of_place(place_id).await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /api/v1/places/{id}/amenities/{amenity_id}`
pub async fn link<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path((id, amenity_id)): Path<(String, String)>,
) -> Result<LinkResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let amenity_id: AmenityId = parse_id(&amenity_id)?;
    let outcome = state
        .place_service
        .link_amenity(place_id, amenity_id)
        .await?;
    Ok(outcome.into())
}

/// `DELETE /api/v1/places/{id}/amenities/{amenity_id}`
pub async fn unlink<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path((id, amenity_id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let amenity_id: AmenityId = parse_id(&amenity_id)?;
    state
        .place_service
        .unlink_amenity(place_id, amenity_id)
        .await?;
    Ok(DeleteResponse::Ok)
}
