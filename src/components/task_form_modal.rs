//! Task Form Modal
//!
//! Shared create/edit form. Title rule lives in [`crate::forms`]; the status,
//! priority, assignee and deadline fields are optional.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::error::ClientResult;
use crate::forms::{TaskField, TaskForm};
use crate::models::{ProjectMember, Task, TaskPriority, TaskStatus};
use crate::services;

#[derive(Debug, Clone)]
pub enum TaskFormMode {
    Create { project_id: u64 },
    Edit(Task),
}

/// Where a submitted form is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskTarget {
    Create { project_id: u64 },
    Update { task_id: u64 },
}

impl TaskTarget {
    fn of(mode: &TaskFormMode) -> Self {
        match mode {
            TaskFormMode::Create { project_id } => TaskTarget::Create { project_id: *project_id },
            TaskFormMode::Edit(task) => TaskTarget::Update { task_id: task.id },
        }
    }
}

/// Validate the form and, only if it passes, send it.
///
/// `None` means the submit was blocked (invalid or already in flight) and no
/// request was made; the form then carries the field error.
async fn submit_task_form(
    api: &ApiClient,
    target: TaskTarget,
    form: RwSignal<TaskForm>,
) -> Option<ClientResult<Task>> {
    let payload = form.try_update(|f| f.begin_submit())?.ok()?;
    let result = match target {
        TaskTarget::Create { project_id } => services::create_task(api, project_id, &payload).await,
        TaskTarget::Update { task_id } => services::update_task(api, task_id, &payload).await,
    };
    Some(result)
}

/// `(id, name)` pairs for the assignee select. An existing assignee who is
/// not in `members` is kept so editing never silently drops them.
fn assignee_options(members: &[ProjectMember], mode: &TaskFormMode) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = members
        .iter()
        .map(|m| (m.user_id.to_string(), m.full_name.clone()))
        .collect();
    if let TaskFormMode::Edit(task) = mode {
        if let Some(current) = &task.assignee {
            if !members.iter().any(|m| m.user_id == current.id) {
                options.push((current.id.to_string(), task.assignee_label()));
            }
        }
    }
    options
}

#[component]
pub fn TaskFormModal(
    mode: TaskFormMode,
    /// Candidate assignees (project members)
    #[prop(optional)] members: Vec<ProjectMember>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let options = assignee_options(&members, &mode);

    let target = TaskTarget::of(&mode);
    let (form, task_id) = match &mode {
        TaskFormMode::Create { .. } => (TaskForm::default(), None),
        TaskFormMode::Edit(task) => (TaskForm::from_task(task), Some(task.id)),
    };
    let form = RwSignal::new(form);
    let (deleting, set_deleting) = signal(false);

    let (title, action, fallback) = match task_id {
        Some(_) => ("Edit Task", "Save Changes", "Failed to update task"),
        None => ("Create New Task", "Create Task", "Failed to create task"),
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            match submit_task_form(&api, target, form).await {
                None => {}
                Some(Ok(saved)) => {
                    log::info!("saved task {}", saved.id);
                    on_saved.run(());
                    on_close.run(());
                }
                Some(Err(e)) => form.update(|f| f.submit_failed(&e, fallback)),
            }
        });
    };

    let delete = move |_| {
        let Some(id) = task_id else { return };
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match services::delete_task(&api, id).await {
                Ok(()) => {
                    log::info!("deleted task {}", id);
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    form.update(|f| f.submit_error = Some(e.user_message("Failed to delete task")));
                    set_deleting.set(false);
                }
            }
        });
    };

    let field = move |which: TaskField| move |ev: leptos::ev::Event| form.update(|f| f.set_field(which, event_target_value(&ev)));

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label for="task-title">"Title *"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="Enter task title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=field(TaskField::Title)
                />
                {move || form.with(|f| f.title_error.clone()).map(|e| view! { <p class="field-error">{e}</p> })}

                <label for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    rows="3"
                    placeholder="Describe the task"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=field(TaskField::Description)
                ></textarea>

                <div class="form-row">
                    <div class="form-col">
                        <label for="task-status">"Status"</label>
                        <select id="task-status" on:change=field(TaskField::Status)>
                            {TaskStatus::ALL
                                .iter()
                                .map(|s| {
                                    let s = *s;
                                    view! {
                                        <option value=s.as_str() selected=move || form.with(|f| f.status == s)>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-col">
                        <label for="task-priority">"Priority"</label>
                        <select id="task-priority" on:change=field(TaskField::Priority)>
                            {TaskPriority::ALL
                                .iter()
                                .map(|p| {
                                    let p = *p;
                                    view! {
                                        <option value=p.as_str() selected=move || form.with(|f| f.priority == p)>
                                            {p.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-col">
                        <label for="task-assignee">"Assignee"</label>
                        <select id="task-assignee" on:change=field(TaskField::Assignee)>
                            <option value="" selected=move || form.with(|f| f.assignee_id.is_empty())>
                                "Unassigned"
                            </option>
                            {options
                                .into_iter()
                                .map(|(id, name)| {
                                    let selected_id = id.clone();
                                    view! {
                                        <option
                                            value=id
                                            selected=move || form.with(|f| f.assignee_id == selected_id)
                                        >
                                            {name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-col">
                        <label for="task-deadline">"Deadline"</label>
                        <input
                            id="task-deadline"
                            type="datetime-local"
                            prop:value=move || form.with(|f| f.deadline.clone())
                            on:input=field(TaskField::Deadline)
                        />
                    </div>
                </div>

                {move || form.with(|f| f.submit_error.clone()).map(|e| view! { <div class="form-error">{e}</div> })}
                <div class="modal-actions">
                    {task_id.map(|_| view! {
                        <DeleteConfirmButton
                            label="Delete"
                            prompt="Delete this task?"
                            button_class="danger-btn"
                            disabled=deleting
                            on_confirm=delete
                        />
                    })}
                    <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || form.with(|f| f.submitting) || deleting.get()
                    >
                        {move || if form.with(|f| f.submitting) { "Saving..." } else { action }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::models::{MemberRole, UserRef};
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn api() -> (Rc<MockTransport>, ApiClient) {
        let transport = Rc::new(MockTransport::new());
        let storage = Rc::new(MemoryStorage::new());
        let api = ApiClient::new("http://api.test", transport.clone(), storage);
        (transport, api)
    }

    fn member(user_id: u64, name: &str) -> ProjectMember {
        ProjectMember { user_id, full_name: name.to_string(), email: String::new(), role: MemberRole::Member }
    }

    fn task_assigned_to(assignee: Option<UserRef>) -> Task {
        Task {
            id: 3,
            title: "Fix login".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            assignee,
            assignee_name: None,
            deadline: None,
            is_overdue: false,
            project_id: Some(1),
            project_name: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_create_lists_members_only() {
        let members = vec![member(1, "Ann"), member(2, "Bo")];
        let options = assignee_options(&members, &TaskFormMode::Create { project_id: 1 });
        assert_eq!(options, vec![("1".into(), "Ann".into()), ("2".into(), "Bo".into())]);
    }

    #[test]
    fn test_edit_keeps_assignee_outside_member_list() {
        let task = task_assigned_to(Some(UserRef { id: 9, full_name: "Cy".into(), email: String::new() }));
        let options = assignee_options(&[], &TaskFormMode::Edit(task));
        assert_eq!(options, vec![("9".into(), "Cy".into())]);
    }

    #[test]
    fn test_edit_does_not_duplicate_member_assignee() {
        let task = task_assigned_to(Some(UserRef { id: 1, full_name: "Ann".into(), email: String::new() }));
        let options = assignee_options(&[member(1, "Ann")], &TaskFormMode::Edit(task));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_empty_title_sends_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let (transport, api) = api();
            let form = RwSignal::new(TaskForm::default());

            let target = TaskTarget::Create { project_id: 2 };
            let result = block_on(submit_task_form(&api, target, form));

            assert!(result.is_none());
            assert_eq!(transport.request_count(), 0);
            let error = form.with_untracked(|f| f.title_error.clone());
            assert_eq!(error.as_deref(), Some("Task title is required"));
            assert!(!form.with_untracked(|f| f.submitting));
        });
    }

    #[test]
    fn test_valid_create_posts_once() {
        let owner = Owner::new();
        owner.with(|| {
            let (transport, api) = api();
            transport.respond(
                Method::Post,
                "/api/projects/2/tasks",
                201,
                r#"{"id":30,"title":"Write docs","status":"TODO","priority":"MEDIUM"}"#,
            );
            let form = RwSignal::new(TaskForm {
                title: "Write docs".to_string(),
                ..TaskForm::default()
            });

            let target = TaskTarget::Create { project_id: 2 };
            let saved = block_on(submit_task_form(&api, target, form));

            assert_eq!(saved.unwrap().unwrap().id, 30);
            assert_eq!(transport.request_count(), 1);
        });
    }

    #[test]
    fn test_edit_targets_the_task() {
        let task = task_assigned_to(None);
        assert_eq!(TaskTarget::of(&TaskFormMode::Edit(task)), TaskTarget::Update { task_id: 3 });
        assert_eq!(
            TaskTarget::of(&TaskFormMode::Create { project_id: 1 }),
            TaskTarget::Create { project_id: 1 }
        );
    }
}
