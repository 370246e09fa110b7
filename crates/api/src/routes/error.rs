use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde::Serialize;
use utoipa::ToSchema;

use crate::date_range;

/// Body returned for rejected requests
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    /// `InvalidDateFormat` or `InvalidRange`
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError(date_range::Error);

impl From<date_range::Error> for ApiError {
    fn from(e: date_range::Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("rejecting request: {}", self.0);
        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
