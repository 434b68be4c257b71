//! Employer dashboard: own postings plus the create-job dialog.

use leptos::prelude::*;

use crate::components::header_bar::HeaderBar;
use crate::components::job_card::JobCard;
use crate::components::stat_tile::StatTile;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Job, NewJob};
use crate::state::session::{SessionPolicy, SessionState};
use crate::util::auth::handle_unauthorized;

/// Employer landing screen. The jobs endpoint returns only this employer's
/// postings, including ones still pending approval.
#[component]
pub fn EmployerDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let policy = expect_context::<SessionPolicy>();

    let show_create = RwSignal::new(false);

    let jobs = LocalResource::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        async move { client.jobs().await }
    });

    Effect::new(move || {
        if matches!(jobs.get(), Some(Err(ApiError::Rejected))) {
            handle_unauthorized(session, policy);
        }
    });

    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="dashboard-page">
            <HeaderBar title="Employer Dashboard"/>

            <section class="dashboard-page__section">
                {move || {
                    let listing = jobs.get().and_then(Result::ok).unwrap_or_default();
                    let approved = listing.iter().filter(|j| j.is_approved).count();
                    let pending = listing.len() - approved;
                    view! {
                        <div class="stat-grid">
                            <StatTile label="Job postings" value=listing.len().to_string()/>
                            <StatTile label="Approved" value=approved.to_string()/>
                            <StatTile label="Pending approval" value=pending.to_string()/>
                        </div>
                    }
                }}

                <div class="dashboard-page__actions">
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Post Job"
                    </button>
                </div>

                <Suspense fallback=move || view! { <p>"Loading your postings..."</p> }>
                    {move || {
                        jobs.get()
                            .map(|result| match result {
                                Ok(listing) => {
                                    if listing.is_empty() {
                                        view! {
                                            <p class="dashboard-page__empty">
                                                "No postings yet. Create your first job to start hiring."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="job-grid">
                                                {listing
                                                    .into_iter()
                                                    .map(|job| view! { <JobCard job=job show_approval=true/> })
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

            <Show when=move || show_create.get()>
                <CreateJobDialog on_cancel=on_cancel jobs=jobs/>
            </Show>
        </div>
    }
}

/// Modal dialog collecting a new job posting.
#[component]
fn CreateJobDialog(
    on_cancel: Callback<()>,
    jobs: LocalResource<Result<Vec<Job>, ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let policy = expect_context::<SessionPolicy>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let salary_range = RwSignal::new(String::new());
    let job_type = RwSignal::new("full-time".to_owned());
    let requirements = RwSignal::new(String::new());
    let is_international = RwSignal::new(false);
    let deadline = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let job = NewJob {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            salary_range: salary_range.get().trim().to_owned(),
            job_type: job_type.get(),
            requirements: requirements.get().trim().to_owned(),
            is_international: is_international.get(),
            deadline: Some(deadline.get()).filter(|d| !d.is_empty()),
        };
        if job.title.is_empty() {
            error.set(Some("Give the posting a title".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let jobs = jobs.clone();
            leptos::task::spawn_local(async move {
                let client = ApiClient::for_session(&session.get_untracked());
                match client.create_job(&job).await {
                    Ok(_) => {
                        jobs.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => {
                        if e == ApiError::Rejected {
                            handle_unauthorized(session, policy);
                        }
                        error.try_set(Some(e.to_string()));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Post a Job"</h2>

                <form class="dialog__form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Job Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Location"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Salary Range"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="e.g. KES 40k-60k"
                                prop:value=move || salary_range.get()
                                on:input=move |ev| salary_range.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Job Type"
                            <select
                                class="dialog__input"
                                on:change=move |ev| job_type.set(event_target_value(&ev))
                            >
                                <option value="full-time" selected=move || job_type.get() == "full-time">
                                    "Full-time"
                                </option>
                                <option value="part-time" selected=move || job_type.get() == "part-time">
                                    "Part-time"
                                </option>
                                <option value="contract" selected=move || job_type.get() == "contract">
                                    "Contract"
                                </option>
                                <option value="casual" selected=move || job_type.get() == "casual">
                                    "Casual"
                                </option>
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Application Deadline"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || deadline.get()
                                on:input=move |ev| deadline.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="dialog__label">
                        "Requirements"
                        <textarea
                            class="dialog__input"
                            prop:value=move || requirements.get()
                            on:input=move |ev| requirements.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || is_international.get()
                            on:change=move |ev| is_international.set(event_target_checked(&ev))
                        />
                        "International opportunity"
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Posting..." } else { "Post Job" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
