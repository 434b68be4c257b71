//! Worker dashboard: overview, job search, profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared session for identity and the bearer token, fetches the
//! approved-job listing, and submits applications. A rejected fetch leaves
//! the listing empty and defers the session question to [`SessionPolicy`].

use leptos::prelude::*;

use crate::components::header_bar::HeaderBar;
use crate::components::job_card::JobCard;
use crate::components::stat_tile::StatTile;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::jobs::{JobScope, filter_jobs};
use crate::state::session::{SessionPolicy, SessionState};
use crate::util::auth::handle_unauthorized;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum WorkerTab {
    #[default]
    Overview,
    Jobs,
    Profile,
}

/// Worker landing screen.
#[component]
pub fn WorkerDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let policy = expect_context::<SessionPolicy>();

    let tab = RwSignal::new(WorkerTab::Overview);
    let term = RwSignal::new(String::new());
    let scope = RwSignal::new(JobScope::All);
    let notice = RwSignal::new(None::<String>);

    let jobs = LocalResource::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        async move { client.jobs().await }
    });

    let profile = LocalResource::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        async move { client.profile().await }
    });

    Effect::new(move || {
        if matches!(jobs.get(), Some(Err(ApiError::Rejected))) {
            handle_unauthorized(session, policy);
        }
    });
    Effect::new(move || {
        if matches!(profile.get(), Some(Err(ApiError::Rejected))) {
            handle_unauthorized(session, policy);
        }
    });

    let on_apply = Callback::new(move |job_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let client = ApiClient::for_session(&session.get_untracked());
                match client.apply_to_job(job_id).await {
                    Ok(ack) => {
                        let message =
                            ack.message.unwrap_or_else(|| "Application submitted successfully".to_owned());
                        notice.try_set(Some(message));
                    }
                    Err(e) => {
                        if e == ApiError::Rejected {
                            handle_unauthorized(session, policy);
                        }
                        notice.try_set(Some(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
        }
    });

    let full_name = move || session.get().user().map(|u| u.full_name.clone()).unwrap_or_default();
    let fetched_jobs = move || jobs.get().and_then(Result::ok).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <HeaderBar title="Worker Dashboard"/>

            <nav class="tab-strip">
                <button
                    class=move || tab_class(tab.get() == WorkerTab::Overview)
                    on:click=move |_| tab.set(WorkerTab::Overview)
                >
                    "Overview"
                </button>
                <button
                    class=move || tab_class(tab.get() == WorkerTab::Jobs)
                    on:click=move |_| tab.set(WorkerTab::Jobs)
                >
                    "Find Jobs"
                </button>
                <button
                    class=move || tab_class(tab.get() == WorkerTab::Profile)
                    on:click=move |_| tab.set(WorkerTab::Profile)
                >
                    "My Profile"
                </button>
            </nav>

            <Show when=move || tab.get() == WorkerTab::Overview>
                <section class="dashboard-page__section">
                    <div class="welcome-banner">
                        <h2>{move || format!("Welcome back, {}!", full_name())}</h2>
                        <p>"Ready to find your next opportunity?"</p>
                    </div>
                    {move || {
                        let listing = fetched_jobs();
                        let international = listing.iter().filter(|j| j.is_international).count();
                        let local = listing.len() - international;
                        view! {
                            <div class="stat-grid">
                                <StatTile label="Open positions" value=listing.len().to_string()/>
                                <StatTile label="International" value=international.to_string()/>
                                <StatTile label="Local" value=local.to_string()/>
                            </div>
                        }
                    }}
                </section>
            </Show>

            <Show when=move || tab.get() == WorkerTab::Jobs>
                <section class="dashboard-page__section">
                    <div class="job-filters">
                        <input
                            class="input job-filters__search"
                            type="text"
                            placeholder="Search jobs..."
                            prop:value=move || term.get()
                            on:input=move |ev| term.set(event_target_value(&ev))
                        />
                        <select
                            class="input"
                            on:change=move |ev| scope.set(JobScope::from_key(&event_target_value(&ev)))
                        >
                            {JobScope::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.key() selected=move || scope.get() == s>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <Show when=move || notice.get().is_some()>
                        <p class="dashboard-page__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>

                    <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                        {move || {
                            jobs.get()
                                .map(|result| match result {
                                    Ok(listing) => {
                                        let visible = filter_jobs(&listing, &term.get(), scope.get());
                                        if visible.is_empty() {
                                            view! { <p class="dashboard-page__empty">"No jobs match your search."</p> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="job-grid">
                                                    {visible
                                                        .into_iter()
                                                        .map(|job| view! { <JobCard job=job on_apply=on_apply/> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }
                                    Err(e) => {
                                        view! { <p class="dashboard-page__error">{e.to_string()}</p> }.into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </Show>

            <Show when=move || tab.get() == WorkerTab::Profile>
                <section class="dashboard-page__section">
                    <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                        {move || {
                            profile
                                .get()
                                .map(|result| match result {
                                    Ok(p) => {
                                        view! {
                                            <dl class="profile-sheet">
                                                <dt>"Full name"</dt>
                                                <dd>{p.full_name}</dd>
                                                <dt>"Username"</dt>
                                                <dd>{p.username}</dd>
                                                <dt>"Email"</dt>
                                                <dd>{p.email}</dd>
                                                <dt>"Phone"</dt>
                                                <dd>{p.phone.unwrap_or_default()}</dd>
                                                <dt>"Location"</dt>
                                                <dd>{p.location.unwrap_or_default()}</dd>
                                                <dt>"Verified"</dt>
                                                <dd>{if p.is_verified { "Yes" } else { "Not yet" }}</dd>
                                            </dl>
                                        }
                                            .into_any()
                                    }
                                    Err(e) => {
                                        view! { <p class="dashboard-page__error">{e.to_string()}</p> }.into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </Show>
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab-strip__tab tab-strip__tab--active" } else { "tab-strip__tab" }
}
