//! Project Form Modal
//!
//! Create a project, or edit one when `project` is given.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::forms::ProjectForm;
use crate::models::Project;
use crate::services;

#[component]
pub fn ProjectFormModal(
    #[prop(optional)] project: Option<Project>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let project_id = project.as_ref().map(|p| p.id);
    let form = RwSignal::new(match &project {
        Some(p) => ProjectForm::new(&p.name, p.description.as_deref()),
        None => ProjectForm::default(),
    });
    let (title, action, fallback) = match project_id {
        Some(_) => ("Edit Project", "Save Changes", "Failed to update project"),
        None => ("Create New Project", "Create Project", "Failed to create project"),
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => payload,
            _ => return,
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = match project_id {
                Some(id) => services::update_project(&api, id, &payload).await,
                None => services::create_project(&api, &payload).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("saved project {}", saved.id);
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => form.update(|f| f.submit_failed(&e, fallback)),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label for="project-name">"Project Name *"</label>
                <input
                    id="project-name"
                    type="text"
                    placeholder="Enter project name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                />
                {move || form.with(|f| f.name_error.clone()).map(|e| view! { <p class="field-error">{e}</p> })}

                <label for="project-description">"Description"</label>
                <textarea
                    id="project-description"
                    rows="4"
                    placeholder="Describe the project"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>

                {move || form.with(|f| f.submit_error.clone()).map(|e| view! { <div class="form-error">{e}</div> })}
                <div class="modal-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || form.with(|f| f.submitting)
                    >
                        {move || if form.with(|f| f.submitting) { "Saving..." } else { action }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
