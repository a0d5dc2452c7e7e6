//! Pages
//!
//! One component per route. Every page fetches on mount and after each of
//! its own mutations; nothing is updated optimistically.

mod dashboard;
mod login;
mod my_tasks;
mod project_detail;
mod projects;
mod register;

use leptos::prelude::*;

use crate::components::Navbar;
use crate::error::ClientResult;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use my_tasks::MyTasksPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;

/// Fetch state of a page's data. A reload keeps the previous `Ready` value on
/// screen until the new result arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: ClientResult<T>, failure: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                log::warn!("{}: {}", failure, e);
                LoadState::Failed(failure.to_string())
            }
        }
    }
}

/// Navbar plus page body
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <Navbar />
        <div class="page">{children()}</div>
    }
}
