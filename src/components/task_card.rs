//! Task Card Component

use leptos::prelude::*;

use crate::format::short_date;
use crate::models::Task;

/// Task summary; clickable when `on_select` is given
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(optional, into)] on_select: Option<Callback<Task>>,
) -> impl IntoView {
    let status = task.status;
    let priority = task.priority;
    let assignee = task.assignee_label();
    let deadline = task.deadline.as_deref().map(short_date);
    let title = task.title.clone();
    let overdue = task.is_overdue;
    let card_class = if on_select.is_some() { "task-card clickable" } else { "task-card" };

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(task.clone());
                }
            }
        >
            <div class="task-card-header">
                <h3 class="task-title">{title}</h3>
                {overdue.then(|| view! { <span class="overdue-badge">"Overdue"</span> })}
            </div>
            <div class="task-badges">
                <span class=status.css_class()>{status.badge()}</span>
                <span class=priority.css_class()>{priority.as_str()}</span>
            </div>
            <div class="task-card-footer">
                <span class="task-assignee">{assignee}</span>
                {deadline.map(|d| view! { <span class="task-deadline">{d}</span> })}
            </div>
        </div>
    }
}
