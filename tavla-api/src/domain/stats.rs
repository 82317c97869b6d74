//! Derived view-state for the dashboard: filtered task subsets, summary
//! statistics, per-member workload and chronological views.
//!
//! Everything here is pure over its inputs; identical inputs always produce
//! identical outputs and no state is carried between calls.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::models::{Milestone, Priority, Project, Task, TaskStatus, TeamMember};

/// Deadline views never show more than this many tasks.
const MAX_UPCOMING_DEADLINES: usize = 10;

/// Filter specification for the task list. Absent fields impose no
/// constraint; present ones are ANDed together.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub assignee: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub tags: Option<Vec<String>>,
}

impl FilterOptions {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(assignee) = &self.assignee {
            if task.assignee_id.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(tags) = &self.tags {
            // Tag filter matches on non-empty intersection.
            if !tags.is_empty() && !tags.iter().any(|tag| task.tags.contains(tag)) {
                return false;
            }
        }
        true
    }
}

pub fn filter_tasks(tasks: &[Task], filters: &FilterOptions) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filters.matches(task))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub overdue_tasks: usize,
    /// Completed over total, as a percentage; 0 for an empty task set.
    pub completion_rate: f32,
    pub total_hours: f32,
    pub completed_hours: f32,
    pub hours_completion_rate: f32,
}

/// Summary statistics over a task set. Overdue means a non-terminal status
/// with a due date strictly in the past.
pub fn project_stats(tasks: &[Task], now: OffsetDateTime) -> ProjectStats {
    let total_tasks = tasks.len();
    let completed_tasks = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count();
    let in_progress_tasks = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::InProgress)
        .count();
    let overdue_tasks = tasks
        .iter()
        .filter(|task| !task.status.is_terminal() && task.due_date < now)
        .count();

    let total_hours: f32 = tasks.iter().map(|task| task.estimated_hours).sum();
    let completed_hours: f32 = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .map(Task::completed_hours)
        .sum();

    ProjectStats {
        total_tasks,
        completed_tasks,
        in_progress_tasks,
        overdue_tasks,
        completion_rate: percentage(completed_tasks as f32, total_tasks as f32),
        total_hours,
        completed_hours,
        hours_completion_rate: percentage(completed_hours, total_hours),
    }
}

fn percentage(part: f32, whole: f32) -> f32 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberWorkload {
    pub member_id: String,
    pub name: String,
    pub total_hours: f32,
    pub completed_hours: f32,
    pub remaining_hours: f32,
}

/// Hour totals per team member over their assigned tasks.
pub fn member_workload(members: &[TeamMember], tasks: &[Task]) -> Vec<MemberWorkload> {
    members
        .iter()
        .map(|member| {
            let assigned: Vec<&Task> = tasks
                .iter()
                .filter(|task| task.assignee_id.as_deref() == Some(member.id.as_str()))
                .collect();

            let total_hours: f32 = assigned.iter().map(|task| task.estimated_hours).sum();
            let completed_hours: f32 = assigned
                .iter()
                .filter(|task| task.status == TaskStatus::Done)
                .map(|task| task.completed_hours())
                .sum();

            MemberWorkload {
                member_id: member.id.clone(),
                name: member.name.clone(),
                total_hours,
                completed_hours,
                remaining_hours: total_hours - completed_hours,
            }
        })
        .collect()
}

/// Non-terminal tasks with the closest deadlines first, capped at ten.
pub fn upcoming_deadlines(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !task.status.is_terminal())
        .sorted_by_key(|task| task.due_date)
        .take(MAX_UPCOMING_DEADLINES)
        .cloned()
        .collect()
}

/// All milestones in chronological order, no cap.
pub fn milestone_timeline(milestones: &[Milestone]) -> Vec<Milestone> {
    milestones
        .iter()
        .sorted_by_key(|milestone| milestone.due_date)
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub filtered_tasks: Vec<Task>,
    pub stats: ProjectStats,
    pub workload: Vec<MemberWorkload>,
    pub upcoming_deadlines: Vec<Task>,
    pub milestone_timeline: Vec<Milestone>,
}

/// Everything the dashboard needs in one call. Summary statistics always
/// cover the full task set; workload and deadline views follow the filtered
/// subset, matching what the charts display.
pub fn aggregate(project: &Project, filters: &FilterOptions, now: OffsetDateTime) -> DashboardData {
    let filtered_tasks = filter_tasks(&project.tasks, filters);

    DashboardData {
        stats: project_stats(&project.tasks, now),
        workload: member_workload(&project.team_members, &filtered_tasks),
        upcoming_deadlines: upcoming_deadlines(&filtered_tasks),
        milestone_timeline: milestone_timeline(&project.milestones),
        filtered_tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo_project;
    use time::macros::datetime;
    use time::Duration;

    fn task(id: &str, status: TaskStatus, due_date: OffsetDateTime) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            priority: Priority::Medium,
            assignee_id: None,
            start_date: due_date - Duration::days(7),
            due_date,
            estimated_hours: 8.0,
            actual_hours: None,
            tags: Vec::new(),
            linear_issue_id: None,
        }
    }

    #[test]
    fn empty_task_list_has_zero_rates() {
        let stats = project_stats(&[], datetime!(2024-06-01 00:00 UTC));

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.hours_completion_rate, 0.0);
    }

    #[test]
    fn completion_rate_over_eight_tasks() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let due = now + Duration::days(1);

        let mut tasks: Vec<Task> = (0..6)
            .map(|i| task(&i.to_string(), TaskStatus::Todo, due))
            .collect();
        tasks.push(task("6", TaskStatus::Done, due));
        tasks.push(task("7", TaskStatus::Done, due));

        let stats = project_stats(&tasks, now);
        assert_eq!(stats.total_tasks, 8);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(stats.completion_rate, 25.0);
    }

    #[test]
    fn overdue_excludes_terminal_tasks() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let past = now - Duration::days(1);

        let tasks = vec![
            task("1", TaskStatus::Todo, past),
            task("2", TaskStatus::InProgress, past),
            task("3", TaskStatus::Done, past),
            task("4", TaskStatus::Cancelled, past),
            task("5", TaskStatus::Todo, now + Duration::days(1)),
        ];

        let stats = project_stats(&tasks, now);
        assert_eq!(stats.overdue_tasks, 2);
    }

    #[test]
    fn completed_hours_prefer_actual_over_estimate() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let mut done_with_actual = task("1", TaskStatus::Done, now);
        done_with_actual.actual_hours = Some(3.0);
        let done_without_actual = task("2", TaskStatus::Done, now);

        let stats = project_stats(&[done_with_actual, done_without_actual], now);
        assert_eq!(stats.completed_hours, 11.0);
        assert_eq!(stats.total_hours, 16.0);
    }

    #[test]
    fn demo_project_filtered_by_done_yields_two_tasks() {
        let project = demo_project();
        let filters = FilterOptions {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };

        let filtered = filter_tasks(&project.tasks, &filters);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn filters_are_anded() {
        let project = demo_project();
        let filters = FilterOptions {
            assignee: Some("2".to_string()),
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };

        let filtered = filter_tasks(&project.tasks, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "API Authentication Setup");
    }

    #[test]
    fn tag_filter_matches_on_intersection() {
        let project = demo_project();
        let filters = FilterOptions {
            tags: Some(vec!["frontend".to_string(), "database".to_string()]),
            ..Default::default()
        };

        let filtered = filter_tasks(&project.tasks, &filters);
        // Tasks tagged frontend (3) plus the database one.
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn empty_filters_keep_everything() {
        let project = demo_project();
        let filtered = filter_tasks(&project.tasks, &FilterOptions::default());
        assert_eq!(filtered.len(), project.tasks.len());
    }

    #[test]
    fn upcoming_deadlines_capped_at_ten_sorted_ascending() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let tasks: Vec<Task> = (0i64..15)
            .map(|i| {
                task(
                    &i.to_string(),
                    TaskStatus::Todo,
                    // Reverse order on purpose so the sort has work to do.
                    now + Duration::days(15 - i),
                )
            })
            .collect();

        let upcoming = upcoming_deadlines(&tasks);
        assert_eq!(upcoming.len(), 10);
        for pair in upcoming.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
    }

    #[test]
    fn milestone_timeline_is_sorted_without_cap() {
        let project = demo_project();
        let timeline = milestone_timeline(&project.milestones);

        assert_eq!(timeline.len(), project.milestones.len());
        for pair in timeline.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
    }

    #[test]
    fn member_workload_sums_assigned_hours() {
        let project = demo_project();
        let workload = member_workload(&project.team_members, &project.tasks);

        assert_eq!(workload.len(), 4);

        // Carol: task 1 (DONE, 40 est / 38 actual) + task 5 (TODO, 20 est).
        let carol = workload.iter().find(|w| w.name == "Carol Davis").unwrap();
        assert_eq!(carol.total_hours, 60.0);
        assert_eq!(carol.completed_hours, 38.0);
        assert_eq!(carol.remaining_hours, 22.0);
    }

    #[test]
    fn aggregate_without_filters_keeps_task_count() {
        let project = demo_project();
        let data = aggregate(
            &project,
            &FilterOptions::default(),
            datetime!(2024-02-01 00:00 UTC),
        );

        assert_eq!(data.filtered_tasks.len(), project.tasks.len());
        assert_eq!(data.stats.total_tasks, project.tasks.len());
    }

    #[test]
    fn aggregate_stats_ignore_filters() {
        let project = demo_project();
        let filters = FilterOptions {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };

        let data = aggregate(&project, &filters, datetime!(2024-02-01 00:00 UTC));
        assert_eq!(data.filtered_tasks.len(), 2);
        // Statistics always cover the unfiltered set.
        assert_eq!(data.stats.total_tasks, 8);
    }
}
