use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{Connection, Issue, ProjectMilestone, Team};

const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

const ISSUE_FIELDS: &str = "
    id
    title
    description
    state {
        id
        name
        type
    }
    priority
    assignee {
        id
        name
        email
    }
    createdAt
    updatedAt
    dueDate
    labels {
        nodes {
            id
            name
            color
        }
    }
    team {
        id
        name
    }
";

pub struct LinearClient {
    api_key: String,
    api_url: String,
}

impl LinearClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: LINEAR_API_URL.to_string(),
        }
    }

    /// Point the client at a different GraphQL endpoint, e.g. a local CORS
    /// relay in front of the real API.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, LinearFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|e| LinearFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(LinearFetchError::Unauthorized);
        }
        tracing::debug!("Linear responded with status {}", resp.status());

        let envelope = resp.json::<GraphQlResponse<T>>().await.map_err(|e| {
            LinearFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        envelope.into_data()
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>, LinearFetchError> {
        #[derive(Deserialize)]
        struct Data {
            teams: Connection<Team>,
        }

        let query = "
            query GetTeams {
                teams {
                    nodes {
                        id
                        name
                        key
                        description
                        icon
                    }
                }
            }
        ";

        let data: Data = self.query(query, serde_json::json!({})).await?;
        Ok(data.teams.nodes)
    }

    /// Fetch issues, optionally restricted to a single team.
    pub async fn fetch_issues(&self, team_id: Option<&str>) -> Result<Vec<Issue>, LinearFetchError> {
        #[derive(Deserialize)]
        struct Data {
            issues: Connection<Issue>,
        }

        let query = format!(
            "
            query GetIssues($teamId: ID) {{
                issues(filter: {{ team: {{ id: {{ eq: $teamId }} }} }}, first: 100) {{
                    nodes {{ {ISSUE_FIELDS} }}
                }}
            }}
            "
        );

        let data: Data = self
            .query(&query, serde_json::json!({ "teamId": team_id }))
            .await?;
        Ok(data.issues.nodes)
    }

    pub async fn fetch_issues_by_assignee(
        &self,
        assignee_id: &str,
    ) -> Result<Vec<Issue>, LinearFetchError> {
        #[derive(Deserialize)]
        struct Data {
            issues: Connection<Issue>,
        }

        let query = format!(
            "
            query GetIssuesByAssignee($assigneeId: ID) {{
                issues(filter: {{ assignee: {{ id: {{ eq: $assigneeId }} }} }}, first: 100) {{
                    nodes {{ {ISSUE_FIELDS} }}
                }}
            }}
            "
        );

        let data: Data = self
            .query(&query, serde_json::json!({ "assigneeId": assignee_id }))
            .await?;
        Ok(data.issues.nodes)
    }

    pub async fn fetch_issue(&self, id: &str) -> Result<Issue, LinearFetchError> {
        #[derive(Deserialize)]
        struct Data {
            issue: Issue,
        }

        let query = format!(
            "
            query GetIssue($id: String!) {{
                issue(id: $id) {{ {ISSUE_FIELDS} }}
            }}
            "
        );

        let data: Data = self.query(&query, serde_json::json!({ "id": id })).await?;
        Ok(data.issue)
    }

    /// Fetch all milestones of the projects owned by a team, flattened into a
    /// single list. Each milestone carries the id of its owning project.
    pub async fn fetch_milestones(
        &self,
        team_id: &str,
    ) -> Result<Vec<ProjectMilestone>, LinearFetchError> {
        #[derive(Deserialize)]
        struct Data {
            team: TeamData,
        }

        #[derive(Deserialize)]
        struct TeamData {
            projects: Connection<ProjectData>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ProjectData {
            id: String,
            project_milestones: Connection<ProjectMilestone>,
        }

        let query = "
            query GetMilestones($teamId: String!) {
                team(id: $teamId) {
                    projects {
                        nodes {
                            id
                            projectMilestones {
                                nodes {
                                    id
                                    name
                                    targetDate
                                    description
                                }
                            }
                        }
                    }
                }
            }
        ";

        let data: Data = self
            .query(query, serde_json::json!({ "teamId": team_id }))
            .await?;

        let milestones = data
            .team
            .projects
            .nodes
            .into_iter()
            .flat_map(|project| {
                let project_id = project.id;
                project
                    .project_milestones
                    .nodes
                    .into_iter()
                    .map(move |mut milestone| {
                        milestone.project_id.get_or_insert_with(|| project_id.clone());
                        milestone
                    })
            })
            .collect();

        Ok(milestones)
    }
}

#[derive(Error, Debug)]
pub enum LinearFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// Generic GraphQL response envelope. A response may carry partial data next
/// to errors; the first error message wins and the data is discarded.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    pub fn into_data(self) -> Result<T, LinearFetchError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(LinearFetchError::GraphQl(error.message));
        }

        self.data.ok_or_else(|| {
            LinearFetchError::ParsingError("Response contained no data".to_string())
        })
    }
}
