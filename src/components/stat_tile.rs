//! Labelled metric tile for dashboard overviews.

use leptos::prelude::*;

/// Single metric with a caption underneath.
#[component]
pub fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <p class="stat-tile__value">{value}</p>
            <p class="stat-tile__label">{label}</p>
        </div>
    }
}
