use advocate::config::SocialIcon;
use advocate::content::{copyright_line, BRAND, TAGLINE};
use advocate::section::NAV_ITEMS;
use leptos::prelude::*;

use super::icons::{FillIcon, LINKEDIN, TWITTER};
use crate::dom;
use crate::page::use_page;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page();
    let social = page.config.with_value(|c| c.social.clone());

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h4 class="footer-heading">{BRAND}</h4>
                    <p class="muted">{TAGLINE}</p>
                </div>
                <div>
                    <h4 class="footer-heading">"Quick Links"</h4>
                    <ul class="footer-links">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <li>
                                        <button
                                            class="footer-link"
                                            on:click=move |_| page.scroll_to_section(id)
                                        >
                                            {item.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="footer-heading">"Connect"</h4>
                    <div class="footer-social">
                        {social
                            .into_iter()
                            .map(|link| {
                                let path = match link.icon {
                                    SocialIcon::Linkedin => LINKEDIN,
                                    SocialIcon::Twitter => TWITTER,
                                };
                                view! {
                                    <a href=link.href class="footer-link" aria-label=link.label>
                                        <FillIcon path=path />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <p class="footer-copyright">{copyright_line(dom::current_year())}</p>
        </footer>
    }
}
