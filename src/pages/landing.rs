//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Marketing front door with entry points into login and registration.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__nav">
                <span class="landing-page__brand">"CV360"</span>
                <span class="landing-page__spacer"></span>
                <A href="/login" attr:class="btn">
                    "Sign in"
                </A>
                <A href="/register" attr:class="btn btn--primary">
                    "Get started"
                </A>
            </header>

            <section class="landing-page__hero">
                <h1>"Your career, documented and discovered"</h1>
                <p>
                    "CV360 connects workers, employers, and HR professionals across the informal economy. "
                    "Build a digital CV, find jobs locally and internationally, and hire with confidence."
                </p>
                <A href="/register" attr:class="btn btn--primary landing-page__cta">
                    "Create your free account"
                </A>
            </section>

            <section class="landing-page__roles">
                <div class="landing-page__role-card">
                    <h3>"Workers"</h3>
                    <p>"Browse local and international openings matched to your skills and apply in one tap."</p>
                </div>
                <div class="landing-page__role-card">
                    <h3>"Employers"</h3>
                    <p>"Post jobs, reach verified candidates, and track every application in one place."</p>
                </div>
                <div class="landing-page__role-card">
                    <h3>"HR Admins"</h3>
                    <p>"Moderate postings, verify accounts, and watch the platform grow."</p>
                </div>
            </section>

            <footer class="landing-page__footer">
                <p>"© 2024 CV360. All rights reserved."</p>
            </footer>
        </div>
    }
}
