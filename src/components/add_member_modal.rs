//! Add Member Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{InlineError, Modal};
use crate::context::use_app_context;
use crate::forms::validate_member_id;
use crate::models::ProjectMember;
use crate::services;

/// Adds a user to the project by numeric id.
///
/// `on_added` fires after the server accepted the member; the caller reloads.
#[component]
pub fn AddMemberModal(
    project_id: u64,
    members: Vec<ProjectMember>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_added: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let members = StoredValue::new(members);

    let (user_id, set_user_id) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let new_member = match members.with_value(|m| validate_member_id(&user_id.get_untracked(), m)) {
            Ok(id) => id,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match services::add_member(&api, project_id, new_member).await {
                Ok(()) => {
                    log::info!("added user {} to project {}", new_member, project_id);
                    set_submitting.set(false);
                    on_added.run(());
                    on_close.run(());
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("Failed to add member")));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Add Member" on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label for="member-user-id">"User ID"</label>
                <input
                    id="member-user-id"
                    type="text"
                    placeholder="Enter user ID"
                    prop:value=move || user_id.get()
                    on:input=move |ev| {
                        set_user_id.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                <p class="form-hint">"Ask the user for their ID from their profile."</p>
                <InlineError message=error />
                <div class="modal-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Adding..." } else { "Add Member" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
