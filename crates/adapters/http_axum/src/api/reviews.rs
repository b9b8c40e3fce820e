//! JSON REST handlers for reviews and the place → reviews view.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::error::ValidationError;
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::review::{Review, ReviewPatch};

use super::parse_id;
use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// Request body for creating a review.
///
/// `place_id` is only read by `POST /reviews`; under `/places/{id}/reviews`
/// the path names the place.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub place_id: Option<String>,
    pub user_id: Option<String>,
    pub text: Option<String>,
}

impl CreateReviewRequest {
    fn into_review(self, place_id: PlaceId) -> Result<Review, ApiError> {
        let mut builder = Review::builder().place_id(place_id);
        if let Some(user_id) = self.user_id {
            let user_id: UserId = parse_id(&user_id)?;
            builder = builder.user_id(user_id);
        }
        if let Some(text) = self.text {
            builder = builder.text(text);
        }
        Ok(builder.build()?)
    }
}

/// `GET /api/v1/reviews`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<ListResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /api/v1/places/{id}/reviews`
pub async fn list_of_place<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let reviews = state.review_service.list_reviews_of_place(place_id).await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /api/v1/reviews/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id: ReviewId = parse_id(&id)?;
    let review = state.review_service.get_review(review_id).await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /api/v1/places/{id}/reviews`
pub async fn create<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    body: Result<JsonObject, ApiError>,
) -> Result<CreateResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let req: CreateReviewRequest = body?.deserialize()?;
    let review = req.into_review(place_id)?;

    let created = state.review_service.create_review(review).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /api/v1/reviews`
pub async fn create_flat<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    body: Result<JsonObject, ApiError>,
) -> Result<CreateResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let mut req: CreateReviewRequest = body?.deserialize()?;
    let raw = req
        .place_id
        .take()
        .ok_or(ValidationError::MissingField("place_id"))?;
    let place_id: PlaceId = parse_id(&raw)?;
    let review = req.into_review(place_id)?;

    let created = state.review_service.create_review(review).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/reviews/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    body: Result<JsonObject, ApiError>,
) -> Result<GetResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id: ReviewId = parse_id(&id)?;

    // Verify it exists
    state.review_service.get_review(review_id).await?;

    let patch: ReviewPatch = body?.deserialize()?;
    let updated = state.review_service.update_review(review_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/reviews/{id}`
pub async fn delete<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id: ReviewId = parse_id(&id)?;
    state.review_service.delete_review(review_id).await?;
    Ok(DeleteResponse::Ok)
}
