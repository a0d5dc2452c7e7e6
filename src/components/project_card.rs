//! Project Card Component

use leptos::prelude::*;

use crate::format::long_date;
use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let description = project
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description".to_string());
    let owner = project.owner_display_name().to_string();
    let created = project.created_at.as_deref().map(long_date);

    view! {
        <a href=href class="project-card">
            <h3 class="project-name">{project.name}</h3>
            <p class="project-description">{description}</p>
            <div class="project-meta">
                <span class="project-owner">{owner}</span>
                <span class="project-members">{project.member_count} " members"</span>
                {created.map(|c| view! { <span class="project-created">{c}</span> })}
            </div>
        </a>
    }
}
