use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::AppState;

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(forward))
}

/// Pass-through to the upstream GraphQL endpoint. Forwards the JSON body and
/// the request's `Authorization` header untouched and returns the upstream
/// status and body as-is; carries no business logic.
#[instrument(name = "POST /api/linear", skip(app_state, headers, body))]
async fn forward(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut request = app_state
        .http_client
        .post(&app_state.linear_api_url)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&body);

    if let Some(authorization) = headers.get(header::AUTHORIZATION) {
        request = request.header(header::AUTHORIZATION, authorization.clone());
    }

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::bad_gateway(format!("Upstream request failed: {}", err)))?;

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = response
        .json::<Value>()
        .await
        .map_err(|err| ApiError::bad_gateway(format!("Upstream response was not JSON: {}", err)))?;

    Ok((status, Json(body)))
}
