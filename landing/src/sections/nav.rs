use std::time::Duration;

use advocate::actions::PageAction;
use advocate::content::{BRAND, WORK_WITH_ME};
use advocate::section::NAV_ITEMS;
use leptos::prelude::*;

use super::icons::{StrokeIcon, CLOSE, MENU};
use crate::page::use_page;

#[component]
pub fn Nav() -> impl IntoView {
    let page = use_page();
    let menu_open = Memo::new(move |_| page.state.with(|s| s.is_menu_open()));

    view! {
        <nav class=move || page.state.with(|s| s.navbar_class())>
            <div class="nav-inner">
                <h1 class="nav-brand fade-in">{BRAND}</h1>

                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button
                                    class=move || page.state.with(|s| s.nav_link_class(id))
                                    on:click=move |_| page.scroll_to_section(id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary" on:click=move |_| page.run(PageAction::Contact)>
                        {WORK_WITH_ME}
                    </button>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| page.toggle_menu()
                >
                    <StrokeIcon path=move || if menu_open.get() { CLOSE } else { MENU } />
                </button>
            </div>

            // Mobile panel: mounted on open, exit transition before unmount
            <AnimatedShow
                when=menu_open
                show_class="mobile-menu--enter"
                hide_class="mobile-menu--exit"
                hide_delay=Duration::from_millis(250)
            >
                <div class="mobile-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button
                                    class="mobile-link"
                                    on:click=move |_| page.scroll_to_section(id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| page.run(PageAction::Contact)
                    >
                        {WORK_WITH_ME}
                    </button>
                </div>
            </AnimatedShow>
        </nav>
    }
}
