//! Dashboard Page
//!
//! Renders the server-computed statistics as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorPanel, LoadingSpinner, StatsCard};
use crate::context::use_app_context;
use crate::format::percent;
use crate::models::DashboardStats;
use crate::pages::{LoadState, PageLayout};
use crate::services;

/// `(label, count, css class)` rows of a breakdown panel
fn breakdown(rows: &[(&'static str, u32, &'static str)], total: u32) -> impl IntoView {
    rows.iter()
        .map(|(label, count, class)| {
            let width = if total == 0 { 0.0 } else { *count as f64 * 100.0 / total as f64 };
            view! {
                <div class="breakdown-row">
                    <span class="breakdown-label">{*label}</span>
                    <div class="breakdown-bar">
                        <div class=format!("breakdown-fill {}", class) style=format!("width: {:.1}%", width)></div>
                    </div>
                    <span class="breakdown-count">{*count}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn DashboardView(stats: DashboardStats) -> impl IntoView {
    let status_rows = [
        ("To Do", stats.todo_tasks, "status-todo"),
        ("In Progress", stats.in_progress_tasks, "status-in-progress"),
        ("Review", stats.review_tasks, "status-review"),
        ("Done", stats.done_tasks, "status-done"),
    ];
    let priority_rows = [
        ("Critical", stats.critical_tasks, "priority-critical"),
        ("High", stats.high_priority_tasks, "priority-high"),
        ("Medium", stats.medium_priority_tasks, "priority-medium"),
        ("Low", stats.low_priority_tasks, "priority-low"),
    ];

    view! {
        <div class="stats-grid">
            <StatsCard
                title="Total Projects"
                value=stats.total_projects.to_string()
                color="blue"
                subtitle=format!("{} owned, {} as member", stats.projects_i_own, stats.projects_as_member)
            />
            <StatsCard
                title="Total Tasks"
                value=stats.total_tasks.to_string()
                color="purple"
                subtitle=format!("{} assigned to me", stats.tasks_assigned_to_me)
            />
            <StatsCard title="Overdue" value=stats.overdue_tasks.to_string() color="red" />
            <StatsCard title="Completion Rate" value=percent(stats.completion_rate) color="green" />
        </div>

        <div class="panel-grid">
            <section class="panel">
                <h2>"Tasks by Status"</h2>
                {breakdown(&status_rows, stats.total_tasks)}
            </section>
            <section class="panel">
                <h2>"Deadlines"</h2>
                <div class="deadline-row overdue">
                    <span>"Overdue"</span>
                    <span>{stats.overdue_tasks}</span>
                </div>
                <div class="deadline-row today">
                    <span>"Due Today"</span>
                    <span>{stats.due_today_tasks}</span>
                </div>
                <div class="deadline-row week">
                    <span>"Due This Week"</span>
                    <span>{stats.due_this_week_tasks}</span>
                </div>
            </section>
            <section class="panel">
                <h2>"Tasks by Priority"</h2>
                {breakdown(&priority_rows, stats.total_tasks)}
            </section>
        </div>

        <section class="quick-links">
            <a href="/projects" class="quick-link">"View Projects"</a>
            <a href="/tasks" class="quick-link">"My Tasks"</a>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<DashboardStats>::Loading);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let result = services::dashboard_stats(&api).await;
            set_state.set(LoadState::from_result(result, "Failed to load statistics"));
        });
    });

    let first_name = move || {
        ctx.current_user()
            .and_then(|u| u.full_name.split_whitespace().next().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <PageLayout>
            <header class="page-header">
                <h1>"Welcome back, " {first_name} "!"</h1>
                <p class="page-subtitle">"Here's an overview of your work"</p>
            </header>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorPanel message=msg /> }.into_any(),
                LoadState::Ready(stats) => view! { <DashboardView stats=stats /> }.into_any(),
            }}
        </PageLayout>
    }
}
