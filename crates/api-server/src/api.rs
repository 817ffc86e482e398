use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, put},
};
use domain::{DomainError, Farmer, FarmerProfile};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::state::AppState;

/// Farmer as the web frontend sees it
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FarmerDto {
    #[serde(rename = "farmerID")]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub crops: String,
    pub phone: String,
    pub email: String,
}

impl From<Farmer> for FarmerDto {
    fn from(farmer: Farmer) -> Self {
        Self {
            id: farmer.id,
            name: farmer.name,
            location: farmer.location,
            crops: farmer.crops,
            phone: farmer.phone,
            email: farmer.email,
        }
    }
}

/// Request body for create and update. A `farmerID` in the body is ignored;
/// the path decides which row is updated.
#[derive(Debug, Deserialize)]
pub struct FarmerPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub crops: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl From<FarmerPayload> for FarmerProfile {
    fn from(payload: FarmerPayload) -> Self {
        Self {
            name: payload.name,
            location: payload.location,
            crops: payload.crops,
            phone: payload.phone,
            email: payload.email,
        }
    }
}

pub enum ApiError {
    Duplicate,
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Duplicate => (
                StatusCode::CONFLICT,
                "A farmer with this email already exists".to_string(),
            ),
            Self::Domain(err @ DomainError::FarmerNotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(err @ DomainError::InvalidValue(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(err) => {
                warn!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// CORS policy admitting exactly one browser origin
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/farmers", get(list_farmers).post(create_farmer))
        .route("/api/farmers/{id}", put(update_farmer).delete(delete_farmer))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_farmers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<FarmerDto>>, ApiError> {
    let farmers = state.farmers.all().await?;
    Ok(Json(farmers.into_iter().map(FarmerDto::from).collect()))
}

async fn create_farmer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FarmerPayload>,
) -> Result<Json<FarmerDto>, ApiError> {
    match state.farmers.add(payload.into()).await? {
        Some(farmer) => Ok(Json(farmer.into())),
        None => Err(ApiError::Duplicate),
    }
}

async fn update_farmer(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FarmerPayload>,
) -> Result<Json<FarmerDto>, ApiError> {
    let farmer = state.farmers.update(id, payload.into()).await?;
    Ok(Json(farmer.into()))
}

async fn delete_farmer(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.farmers.delete(id).await?;
    Ok(StatusCode::OK)
}
