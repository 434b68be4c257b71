//! Card rendering one job posting.

use leptos::prelude::*;

use crate::net::types::Job;

/// Job listing card.
///
/// Workers pass `on_apply` to get an apply button; employers pass
/// `show_approval` to see the moderation state of their own postings.
#[component]
pub fn JobCard(
    job: Job,
    #[prop(into, optional)] on_apply: Option<Callback<i64>>,
    #[prop(optional)] show_approval: bool,
) -> impl IntoView {
    let Job {
        id,
        title,
        description,
        location,
        salary_range,
        job_type,
        is_international,
        is_approved,
        employer_name,
        ..
    } = job;

    view! {
        <article class="job-card">
            <div class="job-card__head">
                <h3 class="job-card__title">{title}</h3>
                <Show when=move || is_international>
                    <span class="job-card__badge job-card__badge--international">"International"</span>
                </Show>
                <Show when=move || show_approval>
                    <span class=if is_approved {
                        "job-card__badge job-card__badge--approved"
                    } else {
                        "job-card__badge job-card__badge--pending"
                    }>
                        {if is_approved { "Approved" } else { "Pending approval" }}
                    </span>
                </Show>
            </div>
            <p class="job-card__employer">{employer_name}</p>
            <p class="job-card__meta">
                <span>{location}</span>
                <span>{job_type}</span>
                <span>{salary_range}</span>
            </p>
            <p class="job-card__description">{description}</p>
            <Show when=move || on_apply.is_some()>
                <button
                    class="btn btn--primary job-card__apply"
                    on:click=move |_| {
                        if let Some(cb) = on_apply {
                            cb.run(id);
                        }
                    }
                >
                    "Apply"
                </button>
            </Show>
        </article>
    }
}
