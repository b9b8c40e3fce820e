//! Axum router assembly.

use axum::Router;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level service.
///
/// Nests the API routes under `/api/v1`, answers unmatched paths with a JSON
/// 404, and includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level. The router is wrapped in [`NormalizePath`] so a trailing
/// slash is trimmed before routing.
pub fn build<SR, CR, AR, UR, PR, RR>(
    state: AppState<SR, CR, AR, UR, PR, RR>,
) -> NormalizePath<Router>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .nest("/api/v1", crate::api::routes())
        .fallback(no_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn no_route() -> ApiError {
    ApiError::NoRoute
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
