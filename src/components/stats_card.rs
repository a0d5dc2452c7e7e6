//! Stats Card Component

use leptos::prelude::*;

/// Headline counter with optional subtitle
#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    /// Accent colour name, mapped to a CSS modifier class
    #[prop(into)] color: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card accent-{}", color)>
            <p class="stats-title">{title}</p>
            <p class="stats-value">{value}</p>
            {subtitle.map(|s| view! { <p class="stats-subtitle">{s}</p> })}
        </div>
    }
}
