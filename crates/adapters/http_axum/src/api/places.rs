//! JSON REST handlers for places and the city → places view.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::id::{CityId, PlaceId, UserId};
use hbnb_domain::place::{Place, PlacePatch};

use super::parse_id;
use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// Request body for creating a place. The city comes from the path.
#[derive(Deserialize)]
pub struct CreatePlaceRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreatePlaceRequest {
    fn into_place(self, city_id: CityId) -> Result<Place, ApiError> {
        let mut builder = Place::builder().city_id(city_id);
        if let Some(user_id) = self.user_id {
            let user_id: UserId = parse_id(&user_id)?;
            builder = builder.user_id(user_id);
        }
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(address) = self.address {
            builder = builder.address(address);
        }
        if let Some(number_rooms) = self.number_rooms {
            builder = builder.number_rooms(number_rooms);
        }
        if let Some(number_bathrooms) = self.number_bathrooms {
            builder = builder.number_bathrooms(number_bathrooms);
        }
        if let Some(max_guest) = self.max_guest {
            builder = builder.max_guest(max_guest);
        }
        if let Some(price_by_night) = self.price_by_night {
            builder = builder.price_by_night(price_by_night);
        }
        if let Some(latitude) = self.latitude {
            builder = builder.latitude(latitude);
        }
        if let Some(longitude) = self.longitude {
            builder = builder.longitude(longitude);
        }
        Ok(builder.build()?)
    }
}

/// `GET /api/v1/places`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/cities/{id}/places`
pub async fn list_of_city<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let city_id: CityId = parse_id(&id)?;
    let places = state.place_service.list_places_of_city(city_id).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/places/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `POST /api/v1/cities/{id}/places`
pub async fn create<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    body: Result<JsonObject, ApiError>,
) -> Result<CreateResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let city_id: CityId = parse_id(&id)?;
    let req: CreatePlaceRequest = body?.deserialize()?;
    let place = req.into_place(city_id)?;

    let created = state.place_service.create_place(place).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/places/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    body: Result<JsonObject, ApiError>,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id(&id)?;

    // Verify it exists
    state.place_service.get_place(place_id).await?;

    let patch: PlacePatch = body?.deserialize()?;
    let updated = state.place_service.update_place(place_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/places/{id}`
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
    let place_id: PlaceId = parse_id(&id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(DeleteResponse::Ok)
}
