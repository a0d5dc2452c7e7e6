//! Task Board Frontend App
//!
//! Root component: provides the app context, restores the stored session
//! once, and maps routes to gated pages.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::{AppContext, Services};
use crate::guard::{ProtectedRoute, PublicOnlyRoute, HOME_PATH};
use crate::pages::{DashboardPage, LoginPage, MyTasksPage, ProjectDetailPage, ProjectsPage, RegisterPage};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("api base url: {}", config.api_base_url);

    let ctx = AppContext::new(Services::new(&config));
    provide_context(ctx);

    // Guard stays Loading until this has run
    Effect::new(move |_| ctx.restore_session());

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH /> }>
                    <Route
                        path=path!("/login")
                        view=|| view! { <PublicOnlyRoute><LoginPage /></PublicOnlyRoute> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <PublicOnlyRoute><RegisterPage /></PublicOnlyRoute> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/projects")
                        view=|| view! { <ProtectedRoute><ProjectsPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/projects/:project_id")
                        view=|| view! { <ProtectedRoute><ProjectDetailPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/tasks")
                        view=|| view! { <ProtectedRoute><MyTasksPage /></ProtectedRoute> }
                    />
                    <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                </Routes>
            </main>
        </Router>
    }
}
