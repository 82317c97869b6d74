use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    domain::{aggregate, demo_project, normalize, DashboardData, FilterOptions, Project},
    AppState,
};

use super::{linear_client, ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/demo", get(demo))
        .route("/import", post(import_project))
        .route("/aggregate", post(aggregate_project))
}

#[instrument(name = "GET /projects/demo")]
async fn demo() -> Json<Project> {
    Json(demo_project())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportProjectBody {
    team_id: String,
}

#[instrument(name = "POST /projects/import", skip(app_state, headers))]
async fn import_project(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ImportProjectBody>,
) -> Result<Json<Project>, ApiError> {
    let client = linear_client(&app_state, &headers)?;

    let teams = client.fetch_teams().await?;
    let team = teams.into_iter().find(|team| team.id == body.team_id);

    let issues = client.fetch_issues(Some(&body.team_id)).await?;

    // A failed milestone fetch degrades to an empty set instead of failing
    // the whole import.
    let milestones = match client.fetch_milestones(&body.team_id).await {
        Ok(milestones) => milestones,
        Err(err) => {
            tracing::warn!("Failed to fetch milestones, importing without: {}", err);
            Vec::new()
        }
    };

    let project = normalize(&issues, team.as_ref(), &milestones, OffsetDateTime::now_utc());
    tracing::debug!(
        "Imported project '{}': {} tasks, {} members, {} milestones",
        project.name,
        project.tasks.len(),
        project.team_members.len(),
        project.milestones.len()
    );

    Ok(Json(project))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregateBody {
    project: Project,
    #[serde(default)]
    filters: FilterOptions,
}

#[instrument(name = "POST /projects/aggregate", skip(body))]
async fn aggregate_project(Json(body): Json<AggregateBody>) -> Json<DashboardData> {
    Json(aggregate(
        &body.project,
        &body.filters,
        OffsetDateTime::now_utc(),
    ))
}
