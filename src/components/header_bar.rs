//! Dashboard header with brand, identity, and logout.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::{SessionState, forget_session};

/// Shared top bar for the three dashboards.
///
/// Logout clears the in-memory and persisted session and nothing else; the
/// route guard observes the transition and handles the redirect.
#[component]
pub fn HeaderBar(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let full_name = move || session.get().user().map(|u| u.full_name.clone()).unwrap_or_default();
    let role_label = move || session.get().role().map(Role::label).unwrap_or_default();

    let on_logout = move |_| {
        session.update(|s| s.clear());
        forget_session();
    };

    view! {
        <header class="header-bar">
            <span class="header-bar__brand">"CV360"</span>
            <span class="header-bar__divider" aria-hidden="true"></span>
            <span class="header-bar__title">{title}</span>
            <span class="header-bar__spacer"></span>
            <span class="header-bar__identity">
                <span class="header-bar__name">{full_name}</span>
                <span class="header-bar__role">{role_label}</span>
            </span>
            <button class="btn header-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
