use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Milestone, Task, TeamMember};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

/// The root aggregate held by the dashboard. Built once per import or demo
/// load and replaced wholesale, never mutated in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub status: ProjectStatus,
    pub team_members: Vec<TeamMember>,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
}

impl Project {
    /// Resolve a task's assignee reference. `None` means the task renders as
    /// "Unassigned"; a dangling id is legitimate, not an error.
    pub fn member(&self, id: &str) -> Option<&TeamMember> {
        self.team_members.iter().find(|member| member.id == id)
    }
}
