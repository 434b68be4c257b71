//! Login page: credential form plus the post-auth role routing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::landing::landing_route_for;
use crate::state::session::SessionState;

/// Sign-in form.
///
/// On success the session is persisted and established, and navigation to
/// the role's landing route happens synchronously in the submit handler.
/// The effect below only covers visits that start out already
/// authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_authed = navigate.clone();
    Effect::new(move || {
        if let Some(role) = session.get().role() {
            navigate_authed(landing_route_for(role), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            error.set(Some("Enter your username and password".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiClient::new().login(&username_value, &password_value).await {
                    Ok(new_session) => {
                        crate::state::session::persist_session(&new_session);
                        let role = new_session.user.role;
                        // The page may have unmounted while the request was in
                        // flight; a disposed signal drops the result.
                        if session.try_update(|s| s.establish(new_session)).is_some() {
                            navigate(landing_route_for(role), NavigateOptions::default());
                        }
                    }
                    Err(e) => {
                        error.try_set(Some(e.to_string()));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href="/" attr:class="auth-card__back">
                    "Back to Home"
                </A>
                <h1 class="auth-card__brand">"CV360"</h1>
                <h2>"Welcome back"</h2>
                <p class="auth-card__subtitle">"Sign in to your account to continue"</p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="auth-form__label">
                        "Username or Email"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Enter your username or email"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Sign up here"</A>
                </p>
            </div>
        </div>
    }
}
