use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use route_atc::RouteAtcError;
use serde::{Serialize, Serializer};
use shared::error::InitializationError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Init(#[from] InitializationError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Classification(#[from] RouteAtcError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Classification(e) => match e {
                RouteAtcError::IdentityUnresolved => StatusCode::BAD_REQUEST,
                RouteAtcError::FlightPlanUnavailable(_) | RouteAtcError::FlightPlanMalformed(_) => {
                    StatusCode::BAD_GATEWAY
                }
                RouteAtcError::RouteIncomplete => StatusCode::UNPROCESSABLE_ENTITY,
                RouteAtcError::RosterUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(name: "api.error", error = ?self, status = %status, "request ended with advisory");
        ErrorMessage::from((status, self.to_string())).into_response()
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
