//! Form State & Validation
//!
//! Plain data held in a component signal. Validation runs synchronously on
//! submit and blocks the request; the `submitting` flag blocks a second
//! submit until the first one settles. Inputs are never cleared on failure.

use crate::error::ClientError;
use crate::format::datetime_local_value;
use crate::models::{ProjectMember, ProjectPayload, Task, TaskPayload, TaskPriority, TaskStatus};

pub const MIN_TITLE_LEN: usize = 3;

/// Why `begin_submit` refused to start a request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid,
}

/// Task title rule shared by the create and edit forms
pub fn validate_task_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        Err("Task title is required".to_string())
    } else if title.chars().count() < MIN_TITLE_LEN {
        Err(format!("Title must be at least {} characters", MIN_TITLE_LEN))
    } else {
        Ok(())
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ========================
// Task Form
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Status,
    Priority,
    Assignee,
    Deadline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Selected assignee id as entered in the select ("" = unassigned)
    pub assignee_id: String,
    /// `datetime-local` input value ("" = no deadline)
    pub deadline: String,
    pub title_error: Option<String>,
    pub submit_error: Option<String>,
    pub submitting: bool,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee_id: String::new(),
            deadline: String::new(),
            title_error: None,
            submit_error: None,
            submitting: false,
        }
    }
}

impl TaskForm {
    /// Pre-filled from an existing task for editing
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: if task.status == TaskStatus::Unknown { TaskStatus::Todo } else { task.status },
            priority: if task.priority == TaskPriority::Unknown { TaskPriority::Medium } else { task.priority },
            assignee_id: task.assignee.as_ref().map(|a| a.id.to_string()).unwrap_or_default(),
            deadline: task.deadline.as_deref().map(datetime_local_value).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Store an edited field, clearing that field's error
    pub fn set_field(&mut self, field: TaskField, value: String) {
        match field {
            TaskField::Title => {
                self.title = value;
                self.title_error = None;
            }
            TaskField::Description => self.description = value,
            TaskField::Status => {
                if let Some(status) = TaskStatus::parse(&value) {
                    self.status = status;
                }
            }
            TaskField::Priority => {
                if let Some(priority) = TaskPriority::parse(&value) {
                    self.priority = priority;
                }
            }
            TaskField::Assignee => self.assignee_id = value,
            TaskField::Deadline => self.deadline = value,
        }
    }

    pub fn payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            description: optional(&self.description),
            status: self.status,
            priority: self.priority,
            assignee_id: self.assignee_id.trim().parse().ok(),
            deadline: optional(&self.deadline),
        }
    }

    /// Validate and mark the form in flight. Returns the body to send.
    pub fn begin_submit(&mut self) -> Result<TaskPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if let Err(msg) = validate_task_title(&self.title) {
            self.title_error = Some(msg);
            return Err(SubmitBlocked::Invalid);
        }
        self.title_error = None;
        self.submit_error = None;
        self.submitting = true;
        Ok(self.payload())
    }

    pub fn submit_failed(&mut self, error: &ClientError, fallback: &str) {
        self.submitting = false;
        self.submit_error = Some(error.user_message(fallback));
    }

    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }
}

// ========================
// Project Form
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub name_error: Option<String>,
    pub submit_error: Option<String>,
    pub submitting: bool,
}

impl ProjectForm {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.name_error = None;
    }

    pub fn begin_submit(&mut self) -> Result<ProjectPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.name.trim().is_empty() {
            self.name_error = Some("Project name is required".to_string());
            return Err(SubmitBlocked::Invalid);
        }
        self.submit_error = None;
        self.submitting = true;
        Ok(ProjectPayload {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
        })
    }

    pub fn submit_failed(&mut self, error: &ClientError, fallback: &str) {
        self.submitting = false;
        self.submit_error = Some(error.user_message(fallback));
    }
}

// ========================
// Add Member Form
// ========================

/// Parse and check a user id typed into the add-member form
pub fn validate_member_id(input: &str, members: &[ProjectMember]) -> Result<u64, ClientError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ClientError::Validation("Please enter a user ID".to_string()));
    }
    let user_id = match input.parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => return Err(ClientError::Validation("Please enter a valid user ID".to_string())),
    };
    if members.iter().any(|m| m.user_id == user_id) {
        return Err(ClientError::Validation(
            "This user is already a member of the project".to_string(),
        ));
    }
    Ok(user_id)
}

// ========================
// Auth Forms
// ========================

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ClientError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ClientError::Validation("Email and password are required".to_string()));
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, full_name: &str) -> Result<(), ClientError> {
    if full_name.trim().is_empty() {
        return Err(ClientError::Validation("Full name is required".to_string()));
    }
    validate_credentials(email, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemberRole, UserRef};

    #[test]
    fn test_title_length_rule() {
        assert_eq!(validate_task_title(""), Err("Task title is required".to_string()));
        assert_eq!(validate_task_title("   "), Err("Task title is required".to_string()));
        assert_eq!(validate_task_title("a"), Err("Title must be at least 3 characters".to_string()));
        assert_eq!(validate_task_title("ab"), Err("Title must be at least 3 characters".to_string()));
        assert_eq!(validate_task_title("abc"), Ok(()));
        assert_eq!(validate_task_title("Fix the login page"), Ok(()));
    }

    #[test]
    fn test_title_rule_ignores_other_fields() {
        let mut form = TaskForm {
            title: "ab".to_string(),
            description: "a long and valid description".to_string(),
            assignee_id: "3".to_string(),
            deadline: "2025-04-01T09:00".to_string(),
            ..TaskForm::default()
        };
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));

        let mut form = TaskForm { title: "abc".to_string(), ..TaskForm::default() };
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_empty_title_blocks_submit() {
        let mut form = TaskForm::default();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.title_error.as_deref(), Some("Task title is required"));
        assert!(!form.submitting);
    }

    #[test]
    fn test_second_submit_blocked_while_in_flight() {
        let mut form = TaskForm { title: "Write docs".to_string(), ..TaskForm::default() };
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.submit_failed(&ClientError::Network("offline".into()), "Failed to create task");
        assert_eq!(form.submit_error.as_deref(), Some("Failed to create task"));
        assert_eq!(form.title, "Write docs");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_payload_nulls_and_assignee() {
        let form = TaskForm {
            title: "Write docs".to_string(),
            assignee_id: "7".to_string(),
            ..TaskForm::default()
        };
        let payload = form.payload();
        assert_eq!(payload.assignee_id, Some(7));
        assert_eq!(payload.description, None);
        assert_eq!(payload.deadline, None);
        assert_eq!(payload.status, TaskStatus::Todo);
        assert_eq!(payload.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_editing_title_clears_its_error() {
        let mut form = TaskForm::default();
        let _ = form.begin_submit();
        assert!(form.title_error.is_some());
        form.set_field(TaskField::Title, "N".to_string());
        assert_eq!(form.title_error, None);
    }

    #[test]
    fn test_from_task_prefills_deadline_minutes() {
        let task = Task {
            id: 1,
            title: "Review PR".to_string(),
            description: None,
            status: TaskStatus::Review,
            priority: TaskPriority::High,
            assignee: Some(UserRef { id: 4, full_name: "Dee".into(), email: String::new() }),
            assignee_name: None,
            deadline: Some("2025-03-05T10:30:00".to_string()),
            is_overdue: false,
            project_id: Some(2),
            project_name: None,
            created_at: None,
            updated_at: None,
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.deadline, "2025-03-05T10:30");
        assert_eq!(form.assignee_id, "4");
        assert_eq!(form.status, TaskStatus::Review);
    }

    #[test]
    fn test_project_name_required() {
        let mut form = ProjectForm::new("  ", None);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.name_error.as_deref(), Some("Project name is required"));

        form.set_name("Apollo".to_string());
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Apollo");
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_member_id_rules() {
        let members = vec![ProjectMember {
            user_id: 2,
            full_name: "Ann".into(),
            email: "a@x".into(),
            role: MemberRole::Owner,
        }];
        assert_eq!(
            validate_member_id("", &members).unwrap_err().to_string(),
            "Please enter a user ID"
        );
        assert_eq!(
            validate_member_id("abc", &members).unwrap_err().to_string(),
            "Please enter a valid user ID"
        );
        assert_eq!(
            validate_member_id("0", &members).unwrap_err().to_string(),
            "Please enter a valid user ID"
        );
        assert_eq!(
            validate_member_id("2", &members).unwrap_err().to_string(),
            "This user is already a member of the project"
        );
        assert_eq!(validate_member_id(" 5 ", &members), Ok(5));
    }

    #[test]
    fn test_auth_form_rules() {
        assert!(validate_credentials("", "pw").is_err());
        assert!(validate_credentials("a@b.com", "").is_err());
        assert!(validate_credentials("a@b.com", "pw").is_ok());
        assert_eq!(
            validate_registration("a@b.com", "pw", " ").unwrap_err().to_string(),
            "Full name is required"
        );
    }
}
