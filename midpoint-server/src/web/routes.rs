//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::midpoint::{FailureKind, MidpointError};
use crate::places::{Category, PlaceError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations/midpoint", post(find_midpoint))
        .route("/api/locations/address", get(find_address))
        .route("/api/locations/coordinate", get(find_coordinate))
        .route("/api/locations/utility", get(find_utility))
        .route("/api/locations/search", get(search_keyword))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve the meeting point for a group of locations.
async fn find_midpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MidpointResponse>, AppError> {
    // Parse JSON manually so malformed bodies are a 400 with a message
    let req: MidpointRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "bad midpoint request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;
    let points = req.to_points()?;

    let point = state.finder.resolve_meeting_point(&points).await?;
    Ok(Json(point.into()))
}

/// Reverse geocode a coordinate.
async fn find_address(
    State(state): State<AppState>,
    Query(query): Query<CoordinateParams>,
) -> Result<Json<Vec<AddressResult>>, AppError> {
    let point = query.to_point()?;
    let addresses = state.places.address_of(point).await?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

/// Geocode free text, combining exact addresses with keyword hits.
async fn find_coordinate(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<LocationResult>>, AppError> {
    let locations = state.places.locate(&query.address).await?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

/// Places of a category around a point.
async fn find_utility(
    State(state): State<AppState>,
    Query(query): Query<UtilityQuery>,
) -> Result<Json<Vec<PlaceResult>>, AppError> {
    let category = Category::from_label(&query.category)?;
    let point = CoordinateParams {
        x: query.x,
        y: query.y,
    }
    .to_point()?;

    let places = state.places.category_search(category, point).await?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

/// Places matching a keyword.
async fn search_keyword(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<PlaceResult>>, AppError> {
    let places = state.places.keyword_search(&query.keyword).await?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// An upstream provider failed
    BadGateway { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlaceError> for AppError {
    fn from(e: PlaceError) -> Self {
        match e {
            PlaceError::UnknownCategory(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl From<MidpointError> for AppError {
    fn from(e: MidpointError) -> Self {
        let message = e.to_string();
        match e.kind() {
            FailureKind::NoCandidateFound => AppError::NotFound { message },
            FailureKind::RequesterFailure => AppError::BadGateway { message },
            FailureKind::Internal => AppError::Internal { message },
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::BadGateway { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
