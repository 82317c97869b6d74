use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};
use linear::Team;
use tracing::instrument;

use crate::AppState;

use super::{linear_client, ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_teams))
}

#[instrument(name = "GET /teams", skip(app_state, headers))]
async fn list_teams(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Team>>, ApiError> {
    let client = linear_client(&app_state, &headers)?;

    let teams = client.fetch_teams().await?;
    tracing::debug!(
        "Found {} teams: [{}]",
        teams.len(),
        teams
            .iter()
            .map(|team| team.name.clone())
            .collect::<Vec<String>>()
            .join(", ")
    );

    Ok(Json(teams))
}
