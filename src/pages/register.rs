//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::forms::validate_registration;
use crate::guard::HOME_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let full_name = full_name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(e) = validate_registration(&email, &password, &full_name) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.register(email.trim(), &password, full_name.trim()).await {
                Ok(_) => navigate(HOME_PATH, Default::default()),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-subtitle">"Start organizing your projects"</p>
                <form class="auth-form" on:submit=submit>
                    {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                    <label for="register-name">"Full Name"</label>
                    <input
                        id="register-name"
                        type="text"
                        placeholder="Jane Doe"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    />
                    <label for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
