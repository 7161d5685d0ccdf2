use advocate::content::{ADVOCACY_FILM, ADVOCACY_HEADING, ADVOCACY_LEAD, ADVOCACY_TAIL, LEARN_MORE};
use leptos::prelude::*;

#[component]
pub fn Advocacy() -> impl IntoView {
    view! {
        <section id="advocacy" class="advocacy">
            // Parallax layer, scrubbed across the whole section
            <div class="advocacy-bg"></div>
            <div class="container advocacy-body">
                <h3 class="section-title">{ADVOCACY_HEADING}</h3>
                <p class="section-lead">
                    {ADVOCACY_LEAD}<em>{ADVOCACY_FILM}</em>{ADVOCACY_TAIL}
                </p>
                <button class="btn btn-primary">{LEARN_MORE}</button>
            </div>
        </section>
    }
}
