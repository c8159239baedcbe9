//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use devices_app::ports::DeviceRepository;
use devices_domain::device::{Device, DevicePatch, NewDevice};
use devices_domain::error::ValidationError;
use devices_domain::id::DeviceId;
use devices_domain::time::{self, Timestamp};

use crate::error::{ApiError, message_response};
use crate::state::AppState;

/// Request body for replacing a device.
///
/// Any `id` in the body is ignored; the path decides which device is targeted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceDeviceRequest {
    pub name: String,
    pub device_brand: String,
    pub created_at: Option<Timestamp>,
}

/// Request body for patching a device.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchDeviceRequest {
    pub name: Option<String>,
    pub device_brand: Option<String>,
}

/// Query string of the search endpoint.
#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Response body of the create endpoint.
#[derive(Serialize)]
pub struct CreatedDevice {
    pub uuid: String,
}

/// Response body of the patch endpoint.
#[derive(Serialize)]
pub struct PatchedDevice {
    pub id: String,
}

/// Possible responses from the list and search endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
    NotFound,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound => message_response(StatusCode::NOT_FOUND, "Device not found"),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedDevice>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the replace endpoint.
pub enum ReplaceResponse {
    Ok(Json<Device>),
}

impl IntoResponse for ReplaceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the patch endpoint.
pub enum PatchResponse {
    Ok(Json<PatchedDevice>),
    NotFound,
}

impl IntoResponse for PatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound => message_response(StatusCode::NOT_FOUND, "Device not found"),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /v1/devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.get_all_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /v1/devices/:id`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let id = DeviceId::from(id);
    match state.device_service.get_device(&id).await? {
        Some(device) => Ok(GetResponse::Ok(Json(device))),
        None => {
            tracing::debug!(%id, "device not found");
            Ok(GetResponse::NotFound)
        }
    }
}

/// `POST /v1/devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    payload: Result<Json<NewDevice>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let id = state.device_service.add_device(req).await?;
    Ok(CreateResponse::Created(Json(CreatedDevice {
        uuid: id.into_inner(),
    })))
}

/// `PUT /v1/devices/:id`
pub async fn replace<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    payload: Result<Json<ReplaceDeviceRequest>, JsonRejection>,
) -> Result<ReplaceResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let device = Device {
        id: DeviceId::from(id),
        name: req.name,
        device_brand: req.device_brand,
        created_at: req.created_at.unwrap_or_else(time::now),
    };
    let stored = state.device_service.replace_device(device).await?;
    Ok(ReplaceResponse::Ok(Json(stored)))
}

/// `PATCH /v1/devices/:id`
pub async fn patch<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    payload: Result<Json<PatchDeviceRequest>, JsonRejection>,
) -> Result<PatchResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let patch = DevicePatch {
        id: DeviceId::from(id),
        name: req.name,
        device_brand: req.device_brand,
    };
    match state.device_service.patch_device(patch).await? {
        Some(id) => Ok(PatchResponse::Ok(Json(PatchedDevice {
            id: id.into_inner(),
        }))),
        None => Ok(PatchResponse::NotFound),
    }
}

/// `DELETE /v1/devices/:id`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    state
        .device_service
        .delete_device(&DeviceId::from(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /v1/devices/search?q=`
pub async fn search<DR>(
    State(state): State<AppState<DR>>,
    Query(params): Query<SearchParams>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ValidationError::MissingQuery)?;
    let devices = state.device_service.search_devices(&query).await?;
    Ok(ListResponse::Ok(Json(devices)))
}
