//! Project Detail Page
//!
//! Project, tasks, members and stats are fetched in parallel and rendered
//! together; if any of the four fails the page shows one error panel instead
//! of partial data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::ApiClient;
use crate::components::{
    AddMemberModal, DeleteConfirmButton, ErrorPanel, InlineError, LoadingSpinner, MemberList, ProjectFormModal,
    StatsCard, TaskCard, TaskFormMode, TaskFormModal,
};
use crate::context::use_app_context;
use crate::error::ClientResult;
use crate::format::percent;
use crate::models::{Project, ProjectMember, ProjectStats, Task};
use crate::pages::{LoadState, PageLayout};
use crate::services;

/// Tasks shown before "View all"
const TASK_PREVIEW: usize = 5;
const LOAD_FAILED: &str = "Failed to load project details";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub members: Vec<ProjectMember>,
    pub stats: ProjectStats,
}

/// All four fetches run concurrently; the first error wins.
pub async fn load_project_detail(api: &ApiClient, project_id: u64) -> ClientResult<ProjectDetail> {
    let (project, tasks, members, stats) = futures::try_join!(
        services::get_project(api, project_id),
        services::list_project_tasks(api, project_id),
        services::list_members(api, project_id),
        services::project_stats(api, project_id),
    )?;
    Ok(ProjectDetail { project, tasks, members, stats })
}

fn visible_tasks(tasks: &[Task], show_all: bool) -> &[Task] {
    if show_all {
        tasks
    } else {
        &tasks[..tasks.len().min(TASK_PREVIEW)]
    }
}

/// Whether `state` holds something other than project `id`, so it must not
/// stay on screen while `id` loads. A reload of the same project keeps it.
fn shows_other_project(state: &LoadState<ProjectDetail>, id: u64) -> bool {
    match state {
        LoadState::Loading => false,
        LoadState::Ready(detail) => detail.project.id != id,
        LoadState::Failed(_) => true,
    }
}

#[component]
fn ProjectDetailView(detail: ProjectDetail, #[prop(into)] reload: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new_local(use_navigate());

    let user = untrack(|| ctx.current_user());
    let caller_id = user.as_ref().and_then(|u| u.id);
    let is_owner = detail.project.is_owned_by(user.as_ref());
    let ProjectDetail { project, tasks, members, stats } = detail;
    let project_id = project.id;
    let task_count = tasks.len();
    let member_count = members.len();

    let (show_all, set_show_all) = signal(false);
    let (show_edit, set_show_edit) = signal(false);
    let (show_new_task, set_show_new_task) = signal(false);
    let (show_add_member, set_show_add_member) = signal(false);
    let editing_task = RwSignal::new(None::<Task>);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let name = project.name.clone();
    let description = project
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description".to_string());
    let owner = project.owner_display_name().to_string();
    let project = StoredValue::new(project);
    let tasks = StoredValue::new(tasks);
    let members = StoredValue::new(members);

    let delete_project = move |_| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match services::delete_project(&api, project_id).await {
                Ok(()) => {
                    log::info!("deleted project {}", project_id);
                    navigate.with_value(|nav| nav("/projects", Default::default()));
                }
                Err(e) => {
                    set_action_error.set(Some(e.user_message("Failed to delete project")));
                    set_deleting.set(false);
                }
            }
        });
    };

    let remove_member = move |user_id: u64| {
        set_action_error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            match services::remove_member(&api, project_id, user_id).await {
                Ok(()) => reload.run(()),
                Err(e) => set_action_error.set(Some(e.user_message("Failed to remove member"))),
            }
        });
    };

    view! {
        <div class="project-detail">
            <a href="/projects" class="back-link">"← Back to Projects"</a>
            <header class="page-header">
                <div>
                    <h1>{name}</h1>
                    <p class="page-subtitle">{description}</p>
                    <p class="project-owner">"Owner: " {owner}</p>
                </div>
                {is_owner.then(|| view! {
                    <div class="header-actions">
                        <button class="secondary-btn" on:click=move |_| set_show_edit.set(true)>"Edit"</button>
                        <DeleteConfirmButton
                            label="Delete"
                            prompt="Delete this project and all its tasks?"
                            button_class="danger-btn"
                            disabled=deleting
                            on_confirm=delete_project
                        />
                    </div>
                })}
            </header>
            <InlineError message=action_error />

            <div class="stats-grid">
                <StatsCard title="Total Tasks" value=stats.total_tasks.to_string() color="blue" />
                <StatsCard title="Completed" value=stats.completed_tasks.to_string() color="green" />
                <StatsCard title="In Progress" value=stats.in_progress_tasks.to_string() color="yellow" />
                <StatsCard title="Overdue" value=stats.overdue_tasks.to_string() color="red" />
            </div>

            <div class="detail-grid">
                <section class="panel tasks-panel">
                    <div class="panel-header">
                        <h2>"Tasks"</h2>
                        <button class="primary-btn small" on:click=move |_| set_show_new_task.set(true)>
                            "+ New Task"
                        </button>
                    </div>
                    {move || {
                        tasks.with_value(|all| {
                            if all.is_empty() {
                                return view! { <p class="empty-state">"No tasks yet"</p> }.into_any();
                            }
                            visible_tasks(all, show_all.get())
                                .iter()
                                .cloned()
                                .map(|task| view! {
                                    <TaskCard task=task on_select=move |t: Task| editing_task.set(Some(t)) />
                                })
                                .collect_view()
                                .into_any()
                        })
                    }}
                    {(task_count > TASK_PREVIEW).then(|| view! {
                        <button class="link-btn" on:click=move |_| set_show_all.update(|v| *v = !*v)>
                            {move || if show_all.get() {
                                "Show less".to_string()
                            } else {
                                format!("View all {} tasks", task_count)
                            }}
                        </button>
                    })}
                </section>

                <aside class="detail-side">
                    <section class="panel members-panel">
                        <div class="panel-header">
                            <h2>"Members (" {member_count} ")"</h2>
                            {is_owner.then(|| view! {
                                <button class="secondary-btn small" on:click=move |_| set_show_add_member.set(true)>
                                    "+ Add"
                                </button>
                            })}
                        </div>
                        <MemberList
                            members=members.get_value()
                            caller_owns_project=is_owner
                            caller_id=caller_id
                            on_remove=remove_member
                        />
                    </section>
                    <section class="panel status-panel">
                        <h2>"Project Status"</h2>
                        <div class="progress-bar">
                            <div class="progress-fill" style=format!("width: {:.1}%", stats.completion_rate.clamp(0.0, 100.0))></div>
                        </div>
                        <p class="progress-label">{percent(stats.completion_rate)} " complete"</p>
                        <span class=stats.status.css_class()>{stats.status.label()}</span>
                    </section>
                </aside>
            </div>

            <Show when=move || show_edit.get()>
                <ProjectFormModal
                    project=project.get_value()
                    on_close=move |_| set_show_edit.set(false)
                    on_saved=reload
                />
            </Show>
            <Show when=move || show_new_task.get()>
                <TaskFormModal
                    mode=TaskFormMode::Create { project_id }
                    members=members.get_value()
                    on_close=move |_| set_show_new_task.set(false)
                    on_saved=reload
                />
            </Show>
            <Show when=move || show_add_member.get()>
                <AddMemberModal
                    project_id=project_id
                    members=members.get_value()
                    on_close=move |_| set_show_add_member.set(false)
                    on_added=reload
                />
            </Show>
            {move || editing_task.get().map(|task| view! {
                <TaskFormModal
                    mode=TaskFormMode::Edit(task)
                    members=members.get_value()
                    on_close=move |_| editing_task.set(None)
                    on_saved=reload
                />
            })}
        </div>
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let project_id = Memo::new(move |_| {
        params
            .read()
            .get("project_id")
            .and_then(|id| id.parse::<u64>().ok())
    });
    let (state, set_state) = signal(LoadState::<ProjectDetail>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = Callback::new(move |_: ()| set_reload_trigger.update(|n| *n += 1));

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(id) = project_id.get() else {
            set_state.set(LoadState::Failed(LOAD_FAILED.to_string()));
            return;
        };
        if state.with_untracked(|s| shows_other_project(s, id)) {
            set_state.set(LoadState::Loading);
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = load_project_detail(&api, id).await;
            // the route may have moved on to another project meanwhile
            if project_id.get_untracked() == Some(id) {
                set_state.set(LoadState::from_result(result, LOAD_FAILED));
            }
        });
    });

    view! {
        <PageLayout>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed(msg) => view! {
                    <ErrorPanel message=msg>
                        <a href="/projects" class="back-link">"Back to Projects"</a>
                    </ErrorPanel>
                }
                .into_any(),
                LoadState::Ready(detail) => {
                    view! { <ProjectDetailView detail=detail reload=reload /> }.into_any()
                }
            }}
        </PageLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::models::{ProjectHealth, TaskPriority, TaskStatus};
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn setup() -> (Rc<MockTransport>, ApiClient) {
        let transport = Rc::new(MockTransport::new());
        let api = ApiClient::new("http://api.test", transport.clone(), Rc::new(MemoryStorage::new()));
        transport.respond(
            Method::Get,
            "/api/projects/4",
            200,
            r#"{"id":4,"name":"Apollo","owner":{"id":1,"fullName":"Ann"},"memberCount":2}"#,
        );
        transport.respond(
            Method::Get,
            "/api/projects/4/tasks",
            200,
            r#"[{"id":10,"title":"Design","status":"DONE","priority":"HIGH"}]"#,
        );
        transport.respond(
            Method::Get,
            "/api/projects/4/members",
            200,
            r#"[{"userId":1,"fullName":"Ann","email":"ann@x.com","role":"OWNER"}]"#,
        );
        transport.respond(
            Method::Get,
            "/api/stats/projects/4",
            200,
            r#"{"projectId":4,"totalTasks":1,"completedTasks":1,"completionRate":100.0,"status":"ON_TRACK"}"#,
        );
        (transport, api)
    }

    fn task(id: u64) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee: None,
            assignee_name: None,
            deadline: None,
            is_overdue: false,
            project_id: Some(4),
            project_name: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_loads_all_four_resources() {
        let (transport, api) = setup();
        let detail = block_on(load_project_detail(&api, 4)).unwrap();

        assert_eq!(detail.project.name, "Apollo");
        assert_eq!(detail.tasks.len(), 1);
        assert_eq!(detail.members[0].full_name, "Ann");
        assert_eq!(detail.stats.status, ProjectHealth::OnTrack);
        assert_eq!(transport.request_count(), 4);
    }

    #[test]
    fn test_one_failed_fetch_fails_the_whole_view() {
        let (transport, api) = setup();
        transport.respond(Method::Get, "/api/projects/4/members", 500, r#"{"error":"boom"}"#);

        assert!(block_on(load_project_detail(&api, 4)).is_err());
    }

    #[test]
    fn test_task_preview_limit() {
        let tasks: Vec<Task> = (1..=8).map(task).collect();
        assert_eq!(visible_tasks(&tasks, false).len(), 5);
        assert_eq!(visible_tasks(&tasks, true).len(), 8);
        assert_eq!(visible_tasks(&tasks[..3], false).len(), 3);
    }

    #[test]
    fn test_switching_project_drops_previous_page() {
        let (_transport, api) = setup();
        let shown = LoadState::Ready(block_on(load_project_detail(&api, 4)).unwrap());

        assert!(shows_other_project(&shown, 5));
        assert!(!shows_other_project(&shown, 4));
        assert!(!shows_other_project(&LoadState::Loading, 5));
        assert!(shows_other_project(&LoadState::Failed(LOAD_FAILED.to_string()), 5));
    }
}
