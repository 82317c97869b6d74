pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod projects;
pub(crate) mod relay;
pub(crate) mod teams;

pub(crate) use error::ApiError;
pub(crate) use health::health;

use axum::http::{header, HeaderMap};
use linear::LinearClient;

use crate::AppState;

/// Build a Linear client from the opaque API key in the `Authorization`
/// header. The key is forwarded as-is and never stored server-side.
pub(crate) fn linear_client(
    app_state: &AppState,
    headers: &HeaderMap,
) -> Result<LinearClient, ApiError> {
    let api_key = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing Linear API key"))?;

    Ok(LinearClient::new(api_key).with_api_url(app_state.linear_api_url.clone()))
}
