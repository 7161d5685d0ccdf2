use advocate::actions::PageAction;
use advocate::content::{EXPERIENCE, PORTRAIT_ALT, RESUME_CTA, RESUME_HEADING};
use leptos::prelude::*;

use crate::page::use_page;

#[component]
pub fn ResumeHighlights() -> impl IntoView {
    let page = use_page();
    let portrait = page.config.with_value(|c| c.portrait_path.clone());

    view! {
        <section id="resume" class="resume">
            <div class="container resume-grid">
                // Reveal moves the wrapper; the inner div owns the hover zoom
                <div class="portrait-reveal">
                    <div class="portrait">
                        <img src=portrait alt=PORTRAIT_ALT />
                    </div>
                </div>

                // Revealed by the resume binding once #resume reaches mid-viewport
                <div class="resume-content">
                    <h3 class="section-title">{RESUME_HEADING}</h3>
                    <div class="timeline">
                        {EXPERIENCE
                            .iter()
                            .map(|exp| {
                                view! {
                                    <div class="timeline-entry">
                                        <h4 class="timeline-title">{exp.title}</h4>
                                        <p class="timeline-company">{exp.company}</p>
                                        <p class="timeline-period">{exp.period}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| page.run(PageAction::DownloadResume)
                    >
                        {RESUME_CTA}
                    </button>
                </div>
            </div>
        </section>
    }
}
