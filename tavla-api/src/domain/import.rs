//! Normalization of raw Linear records into the dashboard's project model.
//!
//! External trackers use free-text workflow names and integer priority codes,
//! so the mappings here are deliberately standalone functions: they can be
//! swapped without touching the route layer.

use std::collections::HashSet;

use linear::{Issue, ProjectMilestone, Team};
use time::{Date, Duration, OffsetDateTime};

use super::models::{
    Milestone, MilestoneStatus, Priority, Project, ProjectStatus, Task, TaskStatus, TeamMember,
};

/// Linear has no effort field, so imported tasks get a fixed estimate.
const DEFAULT_ESTIMATED_HOURS: f32 = 8.0;
/// Due date fallback when the source issue has none.
const DEFAULT_DUE_OFFSET: Duration = Duration::days(7);
const PROJECT_WINDOW: Duration = Duration::days(30);
/// The source has no role field either.
const DEFAULT_ROLE: &str = "Developer";

/// Map a Linear priority code to a task priority. Unknown codes fall back to
/// medium rather than failing the import.
pub fn map_priority(priority: i64) -> Priority {
    match priority {
        0 => Priority::Low,
        1 => Priority::Medium,
        2 => Priority::High,
        3 => Priority::Urgent,
        _ => Priority::Medium,
    }
}

/// Map a free-text workflow state name to a task status. Substring matching
/// because state names are configured per team ("Done", "Completed ✅", ...).
pub fn map_status(state_name: &str) -> TaskStatus {
    let state = state_name.to_lowercase();
    if state.contains("done") || state.contains("completed") {
        TaskStatus::Done
    } else if state.contains("progress") {
        TaskStatus::InProgress
    } else if state.contains("cancel") {
        // covers both "cancelled" and "canceled"
        TaskStatus::Cancelled
    } else {
        TaskStatus::Todo
    }
}

/// Derive a milestone status from its target date alone: due today means in
/// progress, past means completed, anything else is upcoming. Any status the
/// source itself reports is ignored.
pub fn milestone_status(target_date: Date, now: OffsetDateTime) -> MilestoneStatus {
    let today = now.date();
    if target_date == today {
        MilestoneStatus::InProgress
    } else if target_date < today {
        MilestoneStatus::Completed
    } else {
        MilestoneStatus::Upcoming
    }
}

/// Build the member set from issue assignees in one pass. First occurrence of
/// an assignee id wins; insertion order is preserved.
pub fn collect_members(issues: &[Issue]) -> Vec<TeamMember> {
    let mut seen = HashSet::new();
    let mut members = Vec::new();

    for assignee in issues.iter().filter_map(|issue| issue.assignee.as_ref()) {
        if seen.insert(assignee.id.clone()) {
            members.push(TeamMember {
                id: assignee.id.clone(),
                name: assignee.name.clone(),
                email: assignee.email.clone(),
                avatar: None,
                role: DEFAULT_ROLE.to_string(),
            });
        }
    }

    members
}

/// Turn a set of raw Linear records into a fully populated project aggregate.
///
/// Missing fields are filled with policy defaults instead of erroring: a task
/// without a due date is due `now + 7 days`, estimates default to 8 hours and
/// an unknown team yields a generically named project.
pub fn normalize(
    issues: &[Issue],
    team: Option<&Team>,
    milestones: &[ProjectMilestone],
    now: OffsetDateTime,
) -> Project {
    let team_members = collect_members(issues);

    let tasks = issues
        .iter()
        .map(|issue| Task {
            id: issue.id.clone(),
            title: issue.title.clone(),
            description: issue.description.clone(),
            status: map_status(&issue.state.name),
            priority: map_priority(issue.priority),
            assignee_id: issue.assignee.as_ref().map(|assignee| assignee.id.clone()),
            start_date: issue.created_at,
            due_date: issue
                .due_date
                .map(|date| date.midnight().assume_utc())
                .unwrap_or_else(|| now + DEFAULT_DUE_OFFSET),
            estimated_hours: DEFAULT_ESTIMATED_HOURS,
            actual_hours: None,
            tags: issue
                .labels
                .nodes
                .iter()
                .map(|label| label.name.clone())
                .collect(),
            linear_issue_id: Some(issue.id.clone()),
        })
        .collect();

    let milestones = milestones
        .iter()
        .map(|milestone| Milestone {
            id: milestone.id.clone(),
            title: milestone.name.clone(),
            description: milestone.description.clone(),
            due_date: milestone.target_date.midnight().assume_utc(),
            status: milestone_status(milestone.target_date, now),
            // The source does not expose issue links on milestones.
            tasks: Vec::new(),
        })
        .collect();

    let (team_id, team_name) = team
        .map(|team| (team.id.as_str(), team.name.as_str()))
        .unwrap_or(("unknown", "Linear Project"));

    Project {
        id: format!("linear-{}", team_id),
        name: team_name.to_string(),
        description: Some(format!("Imported from Linear team: {}", team_name)),
        start_date: now,
        end_date: now + PROJECT_WINDOW,
        status: ProjectStatus::Active,
        team_members,
        tasks,
        milestones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linear::{Assignee, Connection, WorkflowState};
    use time::macros::{date, datetime};

    fn raw_issue(id: &str, state: &str, assignee: Option<(&str, &str)>) -> Issue {
        Issue {
            id: id.to_string(),
            title: format!("Issue {}", id),
            description: None,
            state: WorkflowState {
                id: format!("state-{}", id),
                name: state.to_string(),
                state_type: "unstarted".to_string(),
            },
            priority: 1,
            assignee: assignee.map(|(id, name)| Assignee {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
            }),
            created_at: datetime!(2024-01-10 08:00 UTC),
            updated_at: datetime!(2024-01-10 08:00 UTC),
            due_date: None,
            labels: Connection::default(),
            team: None,
        }
    }

    #[test]
    fn priority_codes_map_to_enum() {
        assert_eq!(map_priority(0), Priority::Low);
        assert_eq!(map_priority(1), Priority::Medium);
        assert_eq!(map_priority(2), Priority::High);
        assert_eq!(map_priority(3), Priority::Urgent);
    }

    #[test]
    fn unknown_priority_codes_fall_back_to_medium() {
        assert_eq!(map_priority(-1), Priority::Medium);
        assert_eq!(map_priority(4), Priority::Medium);
        assert_eq!(map_priority(42), Priority::Medium);
    }

    #[test]
    fn state_names_map_by_substring() {
        assert_eq!(map_status("Done"), TaskStatus::Done);
        assert_eq!(map_status("Completed"), TaskStatus::Done);
        assert_eq!(map_status("In Progress"), TaskStatus::InProgress);
        assert_eq!(map_status("Cancelled"), TaskStatus::Cancelled);
        assert_eq!(map_status("Canceled"), TaskStatus::Cancelled);
        assert_eq!(map_status("Backlog"), TaskStatus::Todo);
        assert_eq!(map_status("Todo"), TaskStatus::Todo);
    }

    #[test]
    fn duplicate_assignees_are_deduplicated() {
        let issues = vec![
            raw_issue("1", "Todo", Some(("u1", "Alice"))),
            raw_issue("2", "Todo", Some(("u2", "Bob"))),
            raw_issue("3", "Todo", Some(("u1", "Alice"))),
            raw_issue("4", "Todo", Some(("u2", "Bob"))),
            raw_issue("5", "Todo", Some(("u1", "Alice"))),
        ];

        let members = collect_members(&issues);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "u1");
        assert_eq!(members[1].id, "u2");
        assert_eq!(members[0].role, "Developer");
    }

    #[test]
    fn milestone_status_is_date_driven() {
        let now = datetime!(2024-06-15 12:00 UTC);

        assert_eq!(
            milestone_status(date!(2024 - 06 - 15), now),
            MilestoneStatus::InProgress
        );
        assert_eq!(
            milestone_status(date!(2023 - 06 - 15), now),
            MilestoneStatus::Completed
        );
        assert_eq!(
            milestone_status(date!(2025 - 06 - 15), now),
            MilestoneStatus::Upcoming
        );
    }

    #[test]
    fn missing_fields_get_defaults() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let issues = vec![raw_issue("1", "Backlog", None)];

        let project = normalize(&issues, None, &[], now);
        let task = &project.tasks[0];

        assert_eq!(task.due_date, now + Duration::days(7));
        assert_eq!(task.estimated_hours, 8.0);
        assert!(task.assignee_id.is_none());
        assert_eq!(project.name, "Linear Project");
        assert_eq!(project.end_date, now + Duration::days(30));
    }

    #[test]
    fn explicit_due_date_is_kept() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let mut issue = raw_issue("1", "Todo", None);
        issue.due_date = Some(date!(2024 - 07 - 04));

        let project = normalize(&[issue], None, &[], now);
        assert_eq!(project.tasks[0].due_date, datetime!(2024-07-04 00:00 UTC));
    }

    #[test]
    fn milestones_are_normalized() {
        let now = datetime!(2024-06-15 12:00 UTC);
        let milestones = vec![ProjectMilestone {
            id: "m1".to_string(),
            name: "Beta".to_string(),
            target_date: date!(2024 - 08 - 01),
            project_id: Some("p1".to_string()),
            description: Some("Feature complete".to_string()),
        }];

        let project = normalize(&[], None, &milestones, now);
        let milestone = &project.milestones[0];

        assert_eq!(milestone.title, "Beta");
        assert_eq!(milestone.status, MilestoneStatus::Upcoming);
        assert_eq!(milestone.due_date, datetime!(2024-08-01 00:00 UTC));
        assert!(milestone.tasks.is_empty());
    }

    #[test]
    fn normalized_project_keeps_task_count() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let issues: Vec<Issue> = (0..7)
            .map(|i| raw_issue(&i.to_string(), "In Progress", Some(("u1", "Alice"))))
            .collect();

        let project = normalize(&issues, None, &[], now);
        assert_eq!(project.tasks.len(), issues.len());
    }
}
