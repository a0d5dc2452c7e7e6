//! List Filtering & Summaries
//!
//! Same-page filtering over lists already fetched from the server. Nothing
//! here recomputes server-side statistics.

use crate::models::{
    MemberRole, Project, ProjectMember, Task, TaskPriority, TaskStatus, UserProfile,
};

/// One select in the My Tasks filter bar: `ALL` or a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Filter<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => *expected == value,
        }
    }
}

impl Filter<TaskStatus> {
    pub fn from_select(value: &str) -> Self {
        TaskStatus::parse(value).map(Filter::Only).unwrap_or(Filter::All)
    }
}

impl Filter<TaskPriority> {
    pub fn from_select(value: &str) -> Self {
        TaskPriority::parse(value).map(Filter::Only).unwrap_or(Filter::All)
    }
}

/// Tasks matching both filters (logical AND)
pub fn filter_tasks(
    tasks: &[Task],
    status: Filter<TaskStatus>,
    priority: Filter<TaskPriority>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| status.matches(t.status) && priority.matches(t.priority))
        .cloned()
        .collect()
}

pub fn count_by_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

/// Case-insensitive match on name or description; blank term keeps everything
pub fn search_projects(projects: &[Project], term: &str) -> Vec<Project> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectSummary {
    pub total: usize,
    pub owned: usize,
    pub members: u32,
}

pub fn summarize_projects(projects: &[Project], user: Option<&UserProfile>) -> ProjectSummary {
    ProjectSummary {
        total: projects.len(),
        owned: projects.iter().filter(|p| p.is_owned_by(user)).count(),
        members: projects.iter().map(|p| p.member_count).sum(),
    }
}

/// Remove control is offered only to the project owner, never for the OWNER
/// member and never for the caller themself
pub fn can_remove_member(
    caller_owns_project: bool,
    member: &ProjectMember,
    caller_id: Option<u64>,
) -> bool {
    caller_owns_project && member.role != MemberRole::Owner && Some(member.user_id) != caller_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;

    fn task(id: u64, status: TaskStatus, priority: TaskPriority) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            status,
            priority,
            assignee: None,
            assignee_name: None,
            deadline: None,
            is_overdue: false,
            project_id: None,
            project_name: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn project(
        id: u64,
        name: &str,
        description: Option<&str>,
        owner_id: u64,
        members: u32,
    ) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            owner: UserRef { id: owner_id, full_name: "Owner".into(), email: String::new() },
            owner_name: None,
            member_count: members,
            created_at: None,
        }
    }

    fn member(user_id: u64, role: MemberRole) -> ProjectMember {
        ProjectMember {
            user_id,
            full_name: format!("User {}", user_id),
            email: String::new(),
            role,
        }
    }

    #[test]
    fn test_status_and_priority_combine_with_and() {
        let tasks = vec![
            task(1, TaskStatus::Done, TaskPriority::High),
            task(2, TaskStatus::Done, TaskPriority::Low),
            task(3, TaskStatus::Todo, TaskPriority::High),
            task(4, TaskStatus::Done, TaskPriority::High),
        ];
        let filtered = filter_tasks(
            &tasks,
            Filter::<TaskStatus>::from_select("DONE"),
            Filter::<TaskPriority>::from_select("HIGH"),
        );
        let ids: Vec<u64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_all_filters_keep_everything() {
        let tasks = vec![
            task(1, TaskStatus::Todo, TaskPriority::Low),
            task(2, TaskStatus::Review, TaskPriority::Critical),
        ];
        let all = filter_tasks(&tasks, Filter::<TaskStatus>::from_select("ALL"), Filter::All);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_count_by_status() {
        let tasks = vec![
            task(1, TaskStatus::Todo, TaskPriority::Low),
            task(2, TaskStatus::Todo, TaskPriority::Low),
            task(3, TaskStatus::Done, TaskPriority::Low),
        ];
        assert_eq!(count_by_status(&tasks, TaskStatus::Todo), 2);
        assert_eq!(count_by_status(&tasks, TaskStatus::InProgress), 0);
    }

    #[test]
    fn test_project_search_name_or_description() {
        let projects = vec![
            project(1, "Apollo", Some("Moon landing"), 1, 2),
            project(2, "Gemini", None, 2, 3),
            project(3, "Mercury", Some("first MOON probe"), 1, 1),
        ];
        let ids: Vec<u64> = search_projects(&projects, "moon").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(search_projects(&projects, "  ").len(), 3);
        assert!(search_projects(&projects, "saturn").is_empty());
    }

    #[test]
    fn test_project_summary_counts_owned_by_caller() {
        let projects = vec![project(1, "A", None, 7, 2), project(2, "B", None, 8, 5)];
        let user = UserProfile {
            id: Some(7),
            email: String::new(),
            full_name: "Sam".into(),
            role: String::new(),
        };
        let summary = summarize_projects(&projects, Some(&user));
        assert_eq!(summary, ProjectSummary { total: 2, owned: 1, members: 7 });
    }

    #[test]
    fn test_owner_member_never_removable() {
        let owner = member(1, MemberRole::Owner);
        assert!(!can_remove_member(true, &owner, Some(99)));
        assert!(!can_remove_member(false, &owner, Some(99)));
        assert!(!can_remove_member(true, &owner, None));
    }

    #[test]
    fn test_member_removal_rules() {
        let regular = member(5, MemberRole::Member);
        assert!(can_remove_member(true, &regular, Some(1)));
        assert!(!can_remove_member(false, &regular, Some(1)));
        assert!(!can_remove_member(true, &regular, Some(5)));
    }
}
