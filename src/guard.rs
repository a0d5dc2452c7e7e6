//! Access Guard
//!
//! Gates protected views on the session. `Loading` lasts until the stored
//! session has been read at startup; after that the state only changes when
//! login/register/logout replaces the session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::LoadingSpinner;
use crate::context::use_app_context;
use crate::models::Session;
use crate::store::AuthStateStoreFields;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    pub fn from_session(session: Option<&Session>) -> Self {
        if session.is_some() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

/// What a gated view should render for a given guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Placeholder,
    Render,
    Redirect(&'static str),
}

/// Decision for a view that requires a session
pub fn protected_decision(state: GuardState) -> GuardDecision {
    match state {
        GuardState::Loading => GuardDecision::Placeholder,
        GuardState::Authenticated => GuardDecision::Render,
        GuardState::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Decision for login/register, which make no sense once signed in
pub fn public_only_decision(state: GuardState) -> GuardDecision {
    match state {
        GuardState::Loading => GuardDecision::Placeholder,
        GuardState::Authenticated => GuardDecision::Redirect(HOME_PATH),
        GuardState::Unauthenticated => GuardDecision::Render,
    }
}

fn render_decision(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Placeholder => view! { <LoadingSpinner /> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Renders children only for an authenticated session, otherwise redirects to login
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    move || render_decision(protected_decision(ctx.auth.guard().get()), &children)
}

/// Renders children only while signed out, otherwise redirects to the dashboard
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    move || render_decision(public_only_decision(ctx.auth.guard().get()), &children)
}
