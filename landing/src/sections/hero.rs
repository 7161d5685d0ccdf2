use advocate::content::{HERO_CTA, HERO_EYEBROW, HERO_HEADLINE};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let [first, second] = HERO_HEADLINE;

    view! {
        <section id="home" class="hero">
            <div class="hero-shade"></div>
            // Translated by the scroll-scrubbed hero binding
            <div class="hero-content">
                <div class="rise-in">
                    <p class="hero-eyebrow">{HERO_EYEBROW}</p>
                    <h2 class="hero-title">{first}<br />{second}</h2>
                    <button class="btn btn-primary btn-large">{HERO_CTA}</button>
                </div>
            </div>
        </section>
    }
}
