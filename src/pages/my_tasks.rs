//! My Tasks Page
//!
//! Tasks assigned to the caller, filtered client-side by status and priority.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorPanel, LoadingSpinner, StatsCard, TaskCard, TaskFormMode, TaskFormModal};
use crate::context::use_app_context;
use crate::filters::{count_by_status, filter_tasks, Filter};
use crate::models::{Task, TaskPriority, TaskStatus};
use crate::pages::{LoadState, PageLayout};
use crate::services;

const ALL: &str = "ALL";

#[component]
pub fn MyTasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<Task>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status_filter, set_status_filter) = signal(ALL.to_string());
    let (priority_filter, set_priority_filter) = signal(ALL.to_string());
    let editing_task = RwSignal::new(None::<Task>);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            let result = services::my_tasks(&api).await;
            set_state.set(LoadState::from_result(result, "Failed to load tasks"));
        });
    });

    let task_list = move |tasks: Vec<Task>| {
        let total = tasks.len();
        let summary = view! {
            <div class="stats-grid">
                <StatsCard title="Total" value=total.to_string() color="blue" />
                <StatsCard title="To Do" value=count_by_status(&tasks, TaskStatus::Todo).to_string() color="gray" />
                <StatsCard
                    title="In Progress"
                    value=count_by_status(&tasks, TaskStatus::InProgress).to_string()
                    color="yellow"
                />
                <StatsCard title="Done" value=count_by_status(&tasks, TaskStatus::Done).to_string() color="green" />
            </div>
        };
        let visible = move || {
            filter_tasks(
                &tasks,
                Filter::<TaskStatus>::from_select(&status_filter.get()),
                Filter::<TaskPriority>::from_select(&priority_filter.get()),
            )
        };

        view! {
            {summary}
            {move || {
                let shown = visible();
                let count = view! { <p class="result-count">"Showing " {shown.len()} " of " {total} " tasks"</p> };
                if shown.is_empty() {
                    let message = if total == 0 { "No tasks assigned to you" } else { "No tasks match these filters" };
                    view! { {count} <p class="empty-state">{message}</p> }.into_any()
                } else {
                    view! {
                        {count}
                        <div class="task-grid">
                            {shown
                                .into_iter()
                                .map(|task| view! {
                                    <TaskCard task=task on_select=move |t: Task| editing_task.set(Some(t)) />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        }
        .into_any()
    };

    view! {
        <PageLayout>
            <header class="page-header">
                <div>
                    <h1>"My Tasks"</h1>
                    <p class="page-subtitle">"Tasks assigned to you across all projects"</p>
                </div>
            </header>
            <div class="filter-bar">
                <label>
                    "Status"
                    <select on:change=move |ev| set_status_filter.set(event_target_value(&ev))>
                        <option value=ALL>"All Statuses"</option>
                        {TaskStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Priority"
                    <select on:change=move |ev| set_priority_filter.set(event_target_value(&ev))>
                        <option value=ALL>"All Priorities"</option>
                        {TaskPriority::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorPanel message=msg /> }.into_any(),
                LoadState::Ready(tasks) => task_list(tasks),
            }}
            {move || editing_task.get().map(|task| view! {
                <TaskFormModal
                    mode=TaskFormMode::Edit(task)
                    on_close=move |_| editing_task.set(None)
                    on_saved=move |_| set_reload_trigger.update(|n| *n += 1)
                />
            })}
        </PageLayout>
    }
}
