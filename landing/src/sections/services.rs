use advocate::content::{Service, LEARN_MORE, SERVICES, SERVICES_HEADING, SERVICES_INTRO};
use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-title">{SERVICES_HEADING}</h2>
                    <p class="section-lead">{SERVICES_INTRO}</p>
                </div>
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=*service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One card; the reveal binding matches `.service-card` in document order.
#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon">{service.icon}</div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-text">{service.description}</p>
            <button class="btn btn-light">{LEARN_MORE}</button>
        </div>
    }
}
