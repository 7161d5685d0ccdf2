use advocate::actions::PageAction;
use advocate::content::{CONTACT_CTA, CONTACT_HEADING, CONTACT_INTRO};
use leptos::prelude::*;

use crate::page::use_page;

#[component]
pub fn Contact() -> impl IntoView {
    let page = use_page();

    view! {
        <section id="contact" class="contact">
            <div class="container narrow">
                <h3 class="section-title">{CONTACT_HEADING}</h3>
                <p class="section-lead muted">{CONTACT_INTRO}</p>
                <button class="btn btn-primary" on:click=move |_| page.run(PageAction::Contact)>
                    {CONTACT_CTA}
                </button>
            </div>
        </section>
    }
}
