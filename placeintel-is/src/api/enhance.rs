//! Place enrichment endpoint

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use placeintel_common::Error;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::models::PlaceInput;
use crate::AppState;

/// Request envelope for the enhancement endpoint
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub place: Option<Value>,
}

/// POST /api/v1/intelligence/enhance
///
/// Runs the full analysis pipeline for one place record and returns the
/// composite intelligence response. No partial composites: any failure past
/// input validation fails the whole request with a 500.
pub async fn enhance_place(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(request)) = payload else {
        return Err(Error::InvalidInput("No data provided".to_string()).into());
    };

    let place_value = match request.place {
        Some(value) if !is_empty_place(&value) => value,
        _ => return Err(Error::InvalidInput("No place data provided".to_string()).into()),
    };

    let place = PlaceInput::from_value(place_value)?;

    info!("Processing intelligence for place: {}", display_name(&place));

    let response = state.pipeline.enhance(&place);

    info!(
        "Intelligence processing completed in {:.2}ms",
        response.processing_time_ms
    );

    Ok(Json(response).into_response())
}

fn display_name(place: &PlaceInput) -> &str {
    if place.name.is_empty() {
        "Unknown"
    } else {
        &place.name
    }
}

/// A `place` value counts as empty when it carries no data: null, an empty
/// object/array/string, zero or false are all rejected before processing.
fn is_empty_place(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Maps pipeline errors onto the service's JSON error contract
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Error::Internal(message) => {
                error!("Error processing intelligence: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                        "message": message,
                    })),
                )
                    .into_response()
            }
        }
    }
}
