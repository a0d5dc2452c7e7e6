//! Frontend Models
//!
//! Data structures matching the REST API's JSON bodies (camelCase on the wire).

use serde::{Deserialize, Serialize};

// ========================
// Users & Session
// ========================

/// Minimal user profile kept alongside the bearer token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    /// First letter of the full name, upper-cased, for the avatar bubble
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Authenticated identity plus bearer token
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Reference to a user embedded in other entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

// ========================
// Projects
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: UserRef,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn owner_display_name(&self) -> &str {
        match &self.owner_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.owner.full_name,
        }
    }

    /// Whether `user` is this project's owner (needs the server to have sent a user id)
    pub fn is_owned_by(&self, user: Option<&UserProfile>) -> bool {
        matches!(user.and_then(|u| u.id), Some(id) if id == self.owner.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    #[serde(other)]
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Member => "MEMBER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub user_id: u64,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: MemberRole,
}

/// Create/update body for a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: Option<String>,
}

// ========================
// Tasks
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Review => "REVIEW",
            TaskStatus::Done => "DONE",
            TaskStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Human label used in selects and summaries
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "In Review",
            TaskStatus::Done => "Done",
            TaskStatus::Unknown => "Unknown",
        }
    }

    /// Badge text: wire value with the underscore turned into a space
    pub fn badge(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "badge status-todo",
            TaskStatus::InProgress => "badge status-in-progress",
            TaskStatus::Review => "badge status-review",
            TaskStatus::Done => "badge status-done",
            TaskStatus::Unknown => "badge",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Critical => "CRITICAL",
            TaskPriority::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
            TaskPriority::Unknown => "Unknown",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskPriority::Low => "badge priority-low",
            TaskPriority::Medium => "badge priority-medium",
            TaskPriority::High => "badge priority-high",
            TaskPriority::Critical => "badge priority-critical",
            TaskPriority::Unknown => "badge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn assignee_label(&self) -> String {
        self.assignee_name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.assignee.as_ref().map(|a| a.full_name.clone()))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unassigned".to_string())
    }
}

/// Create/update body for a task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<u64>,
    pub deadline: Option<String>,
}

/// One page of `/api/tasks/search` results
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    #[serde(default)]
    pub content: Vec<Task>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

// ========================
// Stats
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_projects: u32,
    #[serde(rename = "projectsIOwn")]
    pub projects_i_own: u32,
    pub projects_as_member: u32,
    pub total_tasks: u32,
    pub tasks_assigned_to_me: u32,
    pub todo_tasks: u32,
    pub in_progress_tasks: u32,
    pub review_tasks: u32,
    pub done_tasks: u32,
    pub overdue_tasks: u32,
    pub due_today_tasks: u32,
    pub due_this_week_tasks: u32,
    pub critical_tasks: u32,
    pub high_priority_tasks: u32,
    pub medium_priority_tasks: u32,
    pub low_priority_tasks: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectHealth {
    OnTrack,
    AtRisk,
    Delayed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProjectHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectHealth::OnTrack => "ON TRACK",
            ProjectHealth::AtRisk => "AT RISK",
            ProjectHealth::Delayed => "DELAYED",
            ProjectHealth::Unknown => "UNKNOWN",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectHealth::OnTrack => "health on-track",
            ProjectHealth::AtRisk => "health at-risk",
            _ => "health off-track",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStats {
    pub project_id: u64,
    pub project_name: String,
    pub total_tasks: u32,
    pub todo_tasks: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub review_tasks: u32,
    pub overdue_tasks: u32,
    pub member_count: u32,
    pub completion_rate: f64,
    pub status: ProjectHealth,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub user_id: u64,
    pub full_name: String,
    pub email: String,
    pub total_assigned_tasks: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub overdue_tasks: u32,
    pub completion_rate: f64,
}
