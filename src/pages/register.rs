//! Registration page with role selection.
//!
//! Password confirmation and minimum length are checked locally before any
//! request is issued; the confirmation field never leaves the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::landing::landing_route_for;
use crate::state::session::{RegistrationForm, SessionState};

const ROLE_OPTIONS: [(Role, &str); 3] = [
    (Role::Worker, "Looking for job opportunities"),
    (Role::Employer, "Hiring workers for jobs"),
    (Role::Admin, "Managing platform operations"),
];

/// Account creation form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Worker);
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
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
        error.set(None);

        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get(),
            full_name: full_name.get(),
            phone: phone.get(),
            location: location.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiClient::new().register(&request).await {
                    Ok(new_session) => {
                        crate::state::session::persist_session(&new_session);
                        let role = new_session.user.role;
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
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <A href="/" attr:class="auth-card__back">
                    "Back to Home"
                </A>
                <h1 class="auth-card__brand">"CV360"</h1>
                <h2>"Create your account"</h2>
                <p class="auth-card__subtitle">"Join thousands of professionals on CV360"</p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <fieldset class="role-picker">
                        <legend>"I am a..."</legend>
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|(option, description)| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if role.get() == option {
                                                "role-picker__option role-picker__option--selected"
                                            } else {
                                                "role-picker__option"
                                            }
                                        }
                                        on:click=move |_| role.set(option)
                                    >
                                        <span class="role-picker__label">{option.label()}</span>
                                        <span class="role-picker__description">{description}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>

                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Full Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Your full name"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Username"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Choose a username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Phone Number"
                            <input
                                class="auth-form__input"
                                type="tel"
                                placeholder="+254 xxx xxx xxx"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Location"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="City, Country"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in here"</A>
                </p>
            </div>
        </div>
    }
}
