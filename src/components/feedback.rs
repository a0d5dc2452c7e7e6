//! Loading & Error Feedback

use leptos::prelude::*;

/// Neutral placeholder while something is in flight
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Page-level error shown instead of partial content
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p class="error-text">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

/// Inline message next to the control that triggered it
#[component]
pub fn InlineError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|m| view! { <div class="inline-error">{m}</div> })
    }
}
