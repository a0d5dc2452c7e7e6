//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::guard::LOGIN_PATH;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let logout = move |_| {
        ctx.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="navbar">
            <a href="/dashboard" class="navbar-brand">"TaskManager"</a>
            <div class="navbar-links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/projects">"Projects"</a>
                <a href="/tasks">"My Tasks"</a>
            </div>
            <div class="navbar-user">
                <div class="avatar">
                    {move || ctx.current_user().map(|u| u.initial()).unwrap_or_default()}
                </div>
                <div class="navbar-user-info">
                    <p class="navbar-user-name">
                        {move || ctx.current_user().map(|u| u.full_name).unwrap_or_default()}
                    </p>
                    <p class="navbar-user-email">
                        {move || ctx.current_user().map(|u| u.email).unwrap_or_default()}
                    </p>
                </div>
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </div>
        </nav>
    }
}
