//! Built-in demo project shown before any Linear data is imported. Also
//! doubles as a fixture for the aggregation tests.

use time::{macros::datetime, OffsetDateTime};

use super::models::{
    Milestone, MilestoneStatus, Priority, Project, ProjectStatus, Task, TaskStatus, TeamMember,
};

fn member(id: &str, name: &str, email: &str, role: &str, avatar: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(avatar.to_string()),
        role: role.to_string(),
    }
}

fn task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: Priority,
    assignee_id: &str,
    start_date: OffsetDateTime,
    due_date: OffsetDateTime,
    estimated_hours: f32,
    actual_hours: Option<f32>,
    tags: &[&str],
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
        priority,
        assignee_id: Some(assignee_id.to_string()),
        start_date,
        due_date,
        estimated_hours,
        actual_hours,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        linear_issue_id: None,
    }
}

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    due_date: OffsetDateTime,
    status: MilestoneStatus,
    tasks: &[&str],
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        due_date,
        status,
        tasks: tasks.iter().map(|id| id.to_string()).collect(),
    }
}

pub fn demo_project() -> Project {
    let team_members = vec![
        member(
            "1",
            "Alice Johnson",
            "alice@company.com",
            "Frontend Developer",
            "https://i.pravatar.cc/150?img=1",
        ),
        member(
            "2",
            "Bob Smith",
            "bob@company.com",
            "Backend Developer",
            "https://i.pravatar.cc/150?img=2",
        ),
        member(
            "3",
            "Carol Davis",
            "carol@company.com",
            "UI/UX Designer",
            "https://i.pravatar.cc/150?img=3",
        ),
        member(
            "4",
            "David Wilson",
            "david@company.com",
            "Product Manager",
            "https://i.pravatar.cc/150?img=4",
        ),
    ];

    let tasks = vec![
        task(
            "1",
            "Design System Implementation",
            "Create and implement a comprehensive design system",
            TaskStatus::Done,
            Priority::High,
            "3",
            datetime!(2024-01-01 00:00 UTC),
            datetime!(2024-01-15 00:00 UTC),
            40.0,
            Some(38.0),
            &["design", "frontend"],
        ),
        task(
            "2",
            "API Authentication Setup",
            "Implement JWT authentication for the API",
            TaskStatus::InProgress,
            Priority::High,
            "2",
            datetime!(2024-01-10 00:00 UTC),
            datetime!(2024-01-25 00:00 UTC),
            32.0,
            Some(20.0),
            &["backend", "security"],
        ),
        task(
            "3",
            "Dashboard Components",
            "Build reusable dashboard components",
            TaskStatus::InProgress,
            Priority::Medium,
            "1",
            datetime!(2024-01-05 00:00 UTC),
            datetime!(2024-01-20 00:00 UTC),
            24.0,
            Some(16.0),
            &["frontend", "components"],
        ),
        task(
            "4",
            "Database Schema Design",
            "Design and implement database schema",
            TaskStatus::Todo,
            Priority::High,
            "2",
            datetime!(2024-01-15 00:00 UTC),
            datetime!(2024-01-30 00:00 UTC),
            48.0,
            None,
            &["backend", "database"],
        ),
        task(
            "5",
            "User Research & Testing",
            "Conduct user research and usability testing",
            TaskStatus::Todo,
            Priority::Medium,
            "3",
            datetime!(2024-01-20 00:00 UTC),
            datetime!(2024-02-05 00:00 UTC),
            20.0,
            None,
            &["research", "ux"],
        ),
        task(
            "6",
            "Project Planning & Roadmap",
            "Create detailed project plan and roadmap",
            TaskStatus::Done,
            Priority::Urgent,
            "4",
            datetime!(2023-12-20 00:00 UTC),
            datetime!(2024-01-05 00:00 UTC),
            16.0,
            Some(14.0),
            &["planning", "management"],
        ),
        task(
            "7",
            "Performance Optimization",
            "Optimize application performance",
            TaskStatus::Todo,
            Priority::Low,
            "1",
            datetime!(2024-02-01 00:00 UTC),
            datetime!(2024-02-15 00:00 UTC),
            28.0,
            None,
            &["performance", "frontend"],
        ),
        task(
            "8",
            "Documentation Update",
            "Update project documentation",
            TaskStatus::Cancelled,
            Priority::Low,
            "4",
            datetime!(2024-01-25 00:00 UTC),
            datetime!(2024-02-10 00:00 UTC),
            12.0,
            None,
            &["documentation"],
        ),
    ];

    let milestones = vec![
        milestone(
            "1",
            "Design Phase Complete",
            "All design work completed and approved",
            datetime!(2024-01-15 00:00 UTC),
            MilestoneStatus::Completed,
            &["1"],
        ),
        milestone(
            "2",
            "Core Development",
            "Core application features implemented",
            datetime!(2024-01-30 00:00 UTC),
            MilestoneStatus::InProgress,
            &["2", "3", "4"],
        ),
        milestone(
            "3",
            "Testing & QA",
            "Comprehensive testing and quality assurance",
            datetime!(2024-02-15 00:00 UTC),
            MilestoneStatus::Upcoming,
            &["5", "7"],
        ),
        milestone(
            "4",
            "Production Launch",
            "Application ready for production deployment",
            datetime!(2024-03-01 00:00 UTC),
            MilestoneStatus::Upcoming,
            &[],
        ),
    ];

    Project {
        id: "demo-project".to_string(),
        name: "E-Commerce Platform Redesign".to_string(),
        description: Some(
            "Complete redesign and modernization of the company e-commerce platform".to_string(),
        ),
        start_date: datetime!(2024-01-01 00:00 UTC),
        end_date: datetime!(2024-03-01 00:00 UTC),
        status: ProjectStatus::Active,
        team_members,
        tasks,
        milestones,
    }
}
