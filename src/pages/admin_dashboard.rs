//! Admin dashboard: platform stats and the user directory.

use leptos::prelude::*;

use crate::components::header_bar::HeaderBar;
use crate::components::stat_tile::StatTile;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::{SessionPolicy, SessionState};
use crate::util::auth::handle_unauthorized;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Overview,
    Users,
}

/// Admin landing screen.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let policy = expect_context::<SessionPolicy>();

    let tab = RwSignal::new(AdminTab::Overview);

    let stats = LocalResource::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        async move { client.admin_stats().await }
    });

    let users = LocalResource::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        async move { client.admin_users().await }
    });

    Effect::new(move || {
        if matches!(stats.get(), Some(Err(ApiError::Rejected))) {
            handle_unauthorized(session, policy);
        }
    });
    Effect::new(move || {
        if matches!(users.get(), Some(Err(ApiError::Rejected))) {
            handle_unauthorized(session, policy);
        }
    });

    view! {
        <div class="dashboard-page">
            <HeaderBar title="Admin Dashboard"/>

            <nav class="tab-strip">
                <button
                    class=move || tab_class(tab.get() == AdminTab::Overview)
                    on:click=move |_| tab.set(AdminTab::Overview)
                >
                    "Overview"
                </button>
                <button
                    class=move || tab_class(tab.get() == AdminTab::Users)
                    on:click=move |_| tab.set(AdminTab::Users)
                >
                    "Users"
                </button>
            </nav>

            <Show when=move || tab.get() == AdminTab::Overview>
                <section class="dashboard-page__section">
                    <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                        {move || {
                            stats
                                .get()
                                .map(|result| match result {
                                    Ok(s) => {
                                        view! {
                                            <div class="stat-grid">
                                                <StatTile label="Workers" value=s.total_workers.to_string()/>
                                                <StatTile label="Employers" value=s.total_employers.to_string()/>
                                                <StatTile label="Jobs" value=s.total_jobs.to_string()/>
                                                <StatTile
                                                    label="Applications"
                                                    value=s.total_applications.to_string()
                                                />
                                                <StatTile
                                                    label="Jobs awaiting approval"
                                                    value=s.pending_jobs.to_string()
                                                />
                                            </div>
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

            <Show when=move || tab.get() == AdminTab::Users>
                <section class="dashboard-page__section">
                    <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                        {move || {
                            users
                                .get()
                                .map(|result| match result {
                                    Ok(list) => {
                                        view! {
                                            <table class="user-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Username"</th>
                                                        <th>"Email"</th>
                                                        <th>"Role"</th>
                                                        <th>"Full name"</th>
                                                        <th>"Location"</th>
                                                        <th>"Verified"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list
                                                        .into_iter()
                                                        .map(|u| {
                                                            view! {
                                                                <tr>
                                                                    <td>{u.username}</td>
                                                                    <td>{u.email}</td>
                                                                    <td>{u.role.label()}</td>
                                                                    <td>{u.full_name}</td>
                                                                    <td>{u.location.unwrap_or_default()}</td>
                                                                    <td>{if u.is_verified { "Yes" } else { "No" }}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
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
