//! Projects Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorPanel, LoadingSpinner, ProjectCard, ProjectFormModal};
use crate::context::use_app_context;
use crate::filters::{search_projects, summarize_projects};
use crate::models::Project;
use crate::pages::{LoadState, PageLayout};
use crate::services;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<Project>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (search, set_search) = signal(String::new());
    let (show_create, set_show_create) = signal(false);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            let result = services::list_projects(&api).await;
            set_state.set(LoadState::from_result(result, "Failed to load projects"));
        });
    });

    let project_list = move |projects: Vec<Project>| {
        if projects.is_empty() {
            return view! {
                <div class="empty-state">
                    <p>"No projects yet"</p>
                    <p class="empty-hint">"Create your first project to get started."</p>
                </div>
            }
            .into_any();
        }
        let user = ctx.current_user();
        let summary = summarize_projects(&projects, user.as_ref());
        let matches = move || search_projects(&projects, &search.get());

        view! {
            <div class="project-summary">
                <span>{summary.total} " projects"</span>
                <span>{summary.owned} " owned by you"</span>
                <span>{summary.members} " total members"</span>
            </div>
            {move || {
                let found = matches();
                if found.is_empty() {
                    view! { <p class="empty-state">"No projects match your search"</p> }.into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            {found
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
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
                    <h1>"Projects"</h1>
                    <p class="page-subtitle">"Manage and collaborate on your projects"</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_show_create.set(true)>
                    "+ New Project"
                </button>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search projects..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorPanel message=msg /> }.into_any(),
                LoadState::Ready(projects) => project_list(projects),
            }}
            <Show when=move || show_create.get()>
                <ProjectFormModal
                    on_close=move |_| set_show_create.set(false)
                    on_saved=move |_| set_reload_trigger.update(|n| *n += 1)
                />
            </Show>
        </PageLayout>
    }
}
