//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload GPU Data"</h1>
            <p class="subtitle">
                "Upload your GPU operational CSV file to begin lifecycle analysis. "
                "ReCore estimates remaining lifespan for sustainability and cost efficiency."
            </p>
        </div>
    }
}
