//! Member List Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::filters::can_remove_member;
use crate::models::{MemberRole, ProjectMember};

/// Project members with role badges.
///
/// The remove control appears only where [`can_remove_member`] allows it.
#[component]
pub fn MemberList(
    members: Vec<ProjectMember>,
    caller_owns_project: bool,
    caller_id: Option<u64>,
    #[prop(into)] on_remove: Callback<u64>,
) -> impl IntoView {
    if members.is_empty() {
        return view! { <p class="empty-state">"No members yet"</p> }.into_any();
    }

    view! {
        <ul class="member-list">
            {members
                .into_iter()
                .map(|member| {
                    let removable = can_remove_member(caller_owns_project, &member, caller_id);
                    let is_me = Some(member.user_id) == caller_id;
                    let is_owner = member.role == MemberRole::Owner;
                    let user_id = member.user_id;
                    let initial = member
                        .full_name
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_default();
                    view! {
                        <li class="member-row">
                            <div class="avatar small">{initial}</div>
                            <div class="member-info">
                                <p class="member-name">
                                    {member.full_name.clone()}
                                    {is_me.then(|| view! { <span class="member-you">" (You)"</span> })}
                                    {is_owner.then(|| view! { <span class="member-crown" title="Owner">"👑"</span> })}
                                </p>
                                <p class="member-email">{member.email.clone()}</p>
                            </div>
                            <span class=format!("role-badge {}", member.role.as_str().to_lowercase())>
                                {member.role.as_str()}
                            </span>
                            {removable.then(|| view! {
                                <DeleteConfirmButton
                                    label="Remove"
                                    prompt=format!("Remove {}?", member.full_name)
                                    button_class="icon-btn remove"
                                    on_confirm=move |_| on_remove.run(user_id)
                                />
                            })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
