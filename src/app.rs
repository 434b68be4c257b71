//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RequireRole;
use crate::net::types::Role;
use crate::pages::{
    admin_dashboard::AdminDashboard, employer_dashboard::EmployerDashboard, landing::LandingPage,
    login::LoginPage, register::RegisterPage, worker_dashboard::WorkerDashboard,
};
use crate::state::session::{SessionPolicy, restore_session};

const WORKER_ONLY: &[Role] = &[Role::Worker];
const EMPLOYER_ONLY: &[Role] = &[Role::Employer];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and policy, restores any persisted session
/// before the first route renders, and sets up client-side routing with
/// role-gated dashboards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(restore_session());
    provide_context(session);
    provide_context(SessionPolicy::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/cv360.css"/>
        <Title text="CV360"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("worker-dashboard")
                    view=|| {
                        view! {
                            <RequireRole allowed=WORKER_ONLY>
                                <WorkerDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("employer-dashboard")
                    view=|| {
                        view! {
                            <RequireRole allowed=EMPLOYER_ONLY>
                                <EmployerDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin-dashboard")
                    view=|| {
                        view! {
                            <RequireRole allowed=ADMIN_ONLY>
                                <AdminDashboard/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
