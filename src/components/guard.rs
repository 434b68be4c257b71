//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each dashboard route in `app.rs`. The guard decision comes from
//! [`crate::state::guard::can_enter`] and is re-evaluated on every session
//! change, so a logout anywhere in the tree redirects immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::guard::{GuardDecision, can_enter};
use crate::state::session::SessionState;

/// Render `children` only when the current session's role is in `allowed`;
/// otherwise navigate to the login screen (anonymous) or the visitor's own
/// landing route (wrong role).
#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::RedirectTo(target) = can_enter(&session.get(), allowed) {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || matches!(can_enter(&session.get(), allowed), GuardDecision::Admit)
            fallback=|| view! { <p class="route-guard__redirect">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}
